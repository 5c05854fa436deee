//! Shared types and enums used across alphacrop.
//! Includes the geometric types (`Extent`, `BoundingBox`), the sizing
//! selectors read from config and CLI (`SizingMode`, `UniformRounding`) and the
//! resolved per-run `SizingPolicy`.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canvas size in pixels. Both sides are always positive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawExtent")]
pub struct Extent {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawExtent {
    width: u32,
    height: u32,
}

impl TryFrom<RawExtent> for Extent {
    type Error = Error;

    fn try_from(raw: RawExtent) -> Result<Self> {
        Extent::new(raw.width, raw.height)
    }
}

impl Extent {
    /// Build an extent, rejecting zero-sized sides.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroExtent { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when `other` fits inside `self` on both axes.
    pub fn contains(&self, other: Extent) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Tight box around content pixels. `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Content extent of the box. A detected box is never empty, so this
    /// only fails for hand-built degenerate boxes.
    pub fn extent(&self) -> Result<Extent> {
        if self.right < self.left || self.bottom < self.top {
            return Err(Error::Processing(format!(
                "inverted bounding box: {:?}",
                self
            )));
        }
        Extent::new(self.width(), self.height())
    }
}

/// Sizing mode selected on the command line or in a config file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Each image gets its own power-of-two canvas
    #[default]
    Individual,
    /// Every image shares one canvas derived from the largest content
    Uniform,
}

impl std::fmt::Display for SizingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingMode::Individual => write!(f, "individual"),
            SizingMode::Uniform => write!(f, "uniform"),
        }
    }
}

/// How the uniform batch extent is turned into the shared target.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum UniformRounding {
    PowerOfTwo,
    Exact,
}

impl UniformRounding {
    pub fn from_exact_flag(exact: bool) -> Self {
        if exact {
            UniformRounding::Exact
        } else {
            UniformRounding::PowerOfTwo
        }
    }
}

impl std::fmt::Display for UniformRounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniformRounding::PowerOfTwo => write!(f, "(power-of-two)"),
            UniformRounding::Exact => write!(f, "exact"),
        }
    }
}

/// Resolved sizing policy for one run. Fixed once before any image is written.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SizingPolicy {
    PerImagePowerOfTwo,
    FixedTarget(Extent),
}

impl std::fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingPolicy::PerImagePowerOfTwo => write!(f, "PerImagePowerOfTwo"),
            SizingPolicy::FixedTarget(extent) => write!(f, "FixedTarget({})", extent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_rejects_zero_sides() {
        assert!(matches!(
            Extent::new(0, 4),
            Err(Error::ZeroExtent { width: 0, height: 4 })
        ));
        assert!(Extent::new(4, 0).is_err());
        assert!(Extent::new(1, 1).is_ok());
    }

    #[test]
    fn bounding_box_extent_is_exclusive() {
        let bbox = BoundingBox {
            left: 3,
            top: 2,
            right: 4,
            bottom: 3,
        };
        assert_eq!(bbox.extent().unwrap(), Extent::new(1, 1).unwrap());
    }

    #[test]
    fn extent_deserialization_is_validated() {
        let ok: Extent = serde_json::from_str(r#"{"width":8,"height":2}"#).unwrap();
        assert_eq!(ok, Extent::new(8, 2).unwrap());
        assert!(serde_json::from_str::<Extent>(r#"{"width":0,"height":2}"#).is_err());
    }

    #[test]
    fn sizing_mode_serializes_lowercase() {
        let json = serde_json::to_string(&SizingMode::Uniform).unwrap();
        assert_eq!(json, "\"uniform\"");
    }
}
