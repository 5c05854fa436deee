mod common;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use common::synthetic_image::{block_on_canvas, read_png, transparent, write_png};

use alphacrop::{
    DecodeError, EncodeError, Extent, GridReader, GridWriter, PixelGrid, ProcessingParams,
    SizingMode, process_directory_to_path, process_images,
};

fn uniform(exact: bool) -> ProcessingParams {
    ProcessingParams {
        mode: SizingMode::Uniform,
        exact,
        ..Default::default()
    }
}

/// In-memory reader keyed by path; unknown paths fail to decode.
struct MemoryReader(HashMap<PathBuf, PixelGrid>);

impl GridReader for MemoryReader {
    fn decode(&self, path: &Path) -> Result<PixelGrid, DecodeError> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| DecodeError::Unsupported(path.display().to_string()))
    }
}

/// Writer that records what it was asked to write.
#[derive(Default)]
struct RecordingWriter(RefCell<Vec<(PathBuf, Extent)>>);

impl GridWriter for &RecordingWriter {
    fn encode(&self, grid: &PixelGrid, output: &Path) -> Result<(), EncodeError> {
        self.0.borrow_mut().push((output.to_path_buf(), grid.extent()));
        Ok(())
    }
}

fn fixture() -> (Vec<PathBuf>, MemoryReader) {
    let files = vec![
        PathBuf::from("a.png"),
        PathBuf::from("b.png"),
        PathBuf::from("c.png"),
        PathBuf::from("missing.png"),
    ];
    let mut grids = HashMap::new();
    grids.insert(files[0].clone(), block_on_canvas(64, 64, (2, 2), (10, 20)));
    grids.insert(files[1].clone(), block_on_canvas(64, 64, (30, 40), (30, 5)));
    grids.insert(files[2].clone(), transparent(128, 128));
    (files, MemoryReader(grids))
}

#[test]
fn uniform_power_of_two_batch() {
    let (files, reader) = fixture();
    let writer = RecordingWriter::default();

    let report = process_images(&files, Path::new("out"), &uniform(false), reader, &writer).unwrap();

    assert_eq!(report.mode, SizingMode::Uniform);
    assert_eq!(report.target, Some(Extent::new(32, 32).unwrap()));
    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.failures[0].path, PathBuf::from("missing.png"));

    let written = writer.0.borrow();
    assert_eq!(
        *written,
        vec![
            (PathBuf::from("out/a.png"), Extent::new(32, 32).unwrap()),
            (PathBuf::from("out/b.png"), Extent::new(32, 32).unwrap()),
        ]
    );
}

#[test]
fn uniform_exact_batch_uses_raw_maxima() {
    let (files, reader) = fixture();
    let writer = RecordingWriter::default();

    let report = process_images(&files, Path::new("out"), &uniform(true), reader, &writer).unwrap();
    assert_eq!(report.target, Some(Extent::new(30, 20).unwrap()));
    assert!(writer
        .0
        .borrow()
        .iter()
        .all(|(_, extent)| *extent == Extent::new(30, 20).unwrap()));
}

#[test]
fn individual_batch_sizes_each_image() {
    let (files, reader) = fixture();
    let writer = RecordingWriter::default();

    let report =
        process_images(&files, Path::new("out"), &ProcessingParams::default(), reader, &writer)
            .unwrap();
    assert_eq!(report.target, None);
    assert_eq!(report.processed, 2);

    let written = writer.0.borrow();
    assert_eq!(written[0].1, Extent::new(16, 32).unwrap());
    assert_eq!(written[1].1, Extent::new(32, 8).unwrap());
}

#[test]
fn all_transparent_uniform_batch_is_skipped() {
    let files = vec![PathBuf::from("x.png"), PathBuf::from("y.png")];
    let mut grids = HashMap::new();
    grids.insert(files[0].clone(), transparent(8, 8));
    grids.insert(files[1].clone(), transparent(4, 4));
    let writer = RecordingWriter::default();

    let report =
        process_images(&files, Path::new("out"), &uniform(false), MemoryReader(grids), &writer)
            .unwrap();
    assert_eq!(report.target, None);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.processed, 0);
    assert!(writer.0.borrow().is_empty());
}

#[test]
fn undecodable_file_in_empty_uniform_batch_is_an_error() {
    let files = vec![PathBuf::from("bad.png"), PathBuf::from("empty.png")];
    let mut grids = HashMap::new();
    grids.insert(files[1].clone(), transparent(4, 4));
    let writer = RecordingWriter::default();

    let report =
        process_images(&files, Path::new("out"), &uniform(false), MemoryReader(grids), &writer)
            .unwrap();
    assert_eq!(report.target, None);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, PathBuf::from("bad.png"));
    assert!(writer.0.borrow().is_empty());
}

#[test]
fn colliding_output_names_are_not_overwritten() {
    let files = vec![
        PathBuf::from("a.PNG"),
        PathBuf::from("a.png"),
        PathBuf::from("a.webp"),
    ];
    let mut grids = HashMap::new();
    for path in &files {
        grids.insert(path.clone(), block_on_canvas(16, 16, (0, 0), (3, 3)));
    }
    let writer = RecordingWriter::default();

    let report = process_images(
        &files,
        Path::new("out"),
        &ProcessingParams::default(),
        MemoryReader(grids),
        &writer,
    )
    .unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 2);
    assert_eq!(report.failures[0].path, PathBuf::from("a.png"));
    assert_eq!(report.failures[1].path, PathBuf::from("a.webp"));
    assert!(report.failures[0].reason.contains("already written"));

    let written = writer.0.borrow();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].0, PathBuf::from("out/a.png"));
}

#[test]
fn skipped_image_does_not_claim_its_output_name() {
    let files = vec![PathBuf::from("a.png"), PathBuf::from("a.webp")];
    let mut grids = HashMap::new();
    grids.insert(files[0].clone(), transparent(8, 8));
    grids.insert(files[1].clone(), block_on_canvas(8, 8, (1, 1), (2, 2)));
    let writer = RecordingWriter::default();

    let report = process_images(
        &files,
        Path::new("out"),
        &ProcessingParams::default(),
        MemoryReader(grids),
        &writer,
    )
    .unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 0);
    assert_eq!(writer.0.borrow()[0].0, PathBuf::from("out/a.png"));
}

#[test]
fn file_order_does_not_change_output() {
    let (mut files, reader) = fixture();
    let forward = RecordingWriter::default();
    process_images(&files, Path::new("out"), &uniform(false), &reader, &forward).unwrap();

    files.reverse();
    let backward = RecordingWriter::default();
    process_images(&files, Path::new("out"), &uniform(false), &reader, &backward).unwrap();

    let mut a = forward.0.borrow().clone();
    let mut b = backward.0.borrow().clone();
    a.sort_by(|x, y| x.0.cmp(&y.0));
    b.sort_by(|x, y| x.0.cmp(&y.0));
    assert_eq!(a, b);
}

impl GridReader for &MemoryReader {
    fn decode(&self, path: &Path) -> Result<PixelGrid, DecodeError> {
        (**self).decode(path)
    }
}

#[test]
fn directory_run_writes_pngs_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path();
    let output = input.join("cropped");

    write_png(&input.join("one.png"), &block_on_canvas(40, 40, (1, 1), (10, 20)));
    write_png(&input.join("two.png"), &block_on_canvas(40, 40, (5, 30), (30, 5)));
    write_png(&input.join("blank.png"), &transparent(12, 12));
    std::fs::write(input.join("bad.png"), b"garbage").unwrap();
    std::fs::write(input.join("readme.txt"), b"ignored").unwrap();

    let report = process_directory_to_path(input, &output, &uniform(false)).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.target, Some(Extent::new(32, 32).unwrap()));

    let one = read_png(&output.join("one.png"));
    let two = read_png(&output.join("two.png"));
    assert_eq!(one.extent(), Extent::new(32, 32).unwrap());
    assert_eq!(two.extent(), Extent::new(32, 32).unwrap());
    assert!(!output.join("blank.png").exists());
    assert!(!output.join("bad.png").exists());

    // Re-running on the output directory changes nothing.
    let again = input.join("again");
    let rerun = process_directory_to_path(&output, &again, &uniform(false)).unwrap();
    assert_eq!(rerun.processed, 2);
    assert_eq!(read_png(&again.join("one.png")), one);
    assert_eq!(read_png(&again.join("two.png")), two);
}

#[test]
fn report_serializes_to_json() {
    let (files, reader) = fixture();
    let writer = RecordingWriter::default();
    let report = process_images(&files, Path::new("out"), &uniform(true), reader, &writer).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mode"], "uniform");
    assert_eq!(json["target"]["width"], 30);
    assert_eq!(json["errors"], 1);
}
