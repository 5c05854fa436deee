#![allow(dead_code)]

use std::path::Path;

use alphacrop::PixelGrid;

/// Transparent `width`x`height` canvas with an opaque, position-coded block
/// of `size` whose top-left corner sits at `at`.
pub fn block_on_canvas(width: u32, height: u32, at: (u32, u32), size: (u32, u32)) -> PixelGrid {
    assert!(at.0 + size.0 <= width && at.1 + size.1 <= height, "block must fit canvas");

    let mut data = vec![0u8; (width * height * 4) as usize];
    for y in at.1..at.1 + size.1 {
        for x in at.0..at.0 + size.0 {
            let idx = ((y * width + x) * 4) as usize;
            let rx = x - at.0;
            let ry = y - at.1;
            data[idx..idx + 4].copy_from_slice(&[(rx * 13 % 256) as u8, (ry * 29 % 256) as u8, 128, 255]);
        }
    }
    PixelGrid::from_rgba(width, height, data).expect("valid synthetic grid")
}

/// Fully transparent canvas.
pub fn transparent(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
        .expect("valid synthetic grid")
}

/// Encode `grid` as a PNG at `path`.
pub fn write_png(path: &Path, grid: &PixelGrid) {
    let image = grid.clone().into_rgba_image().expect("grid converts to image");
    image.save(path).expect("write test png");
}

/// Decode the PNG at `path`.
pub fn read_png(path: &Path) -> PixelGrid {
    let image = image::open(path).expect("read test png").into_rgba8();
    PixelGrid::try_from(image).expect("valid decoded grid")
}
