use crate::error::{Error, Result};
use crate::types::Extent;

/// Smallest power of two >= `n`. Zero maps to 1. `None` if the result
/// would not fit in a `u32`.
pub fn next_power_of_two(n: u32) -> Option<u32> {
    n.checked_next_power_of_two()
}

/// Round each axis of `content` up to its own power of two.
pub fn fit_power_of_two(content: Extent) -> Result<Extent> {
    let width = next_power_of_two(content.width()).ok_or(Error::DimensionOverflow {
        value: content.width(),
    })?;
    let height = next_power_of_two(content.height()).ok_or(Error::DimensionOverflow {
        value: content.height(),
    })?;
    Extent::new(width, height)
}
