//! Output grid calculation with terminal aspect-ratio correction.

use crate::error::ConvertError;

/// Default output width in characters.
pub const DEFAULT_TARGET_WIDTH: u32 = 100;

/// Terminal glyphs are taller than wide, so the row count is scaled down by
/// this factor to keep the rendered image's proportions. The exact value is
/// part of the output-compatibility contract.
pub const TERMINAL_CHAR_ASPECT: f64 = 0.55;

/// Output character grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

/// Compute the output grid for a source image and target character width.
///
/// The height preserves the source aspect ratio, corrected by
/// [`TERMINAL_CHAR_ASPECT`] and truncated toward zero. A non-positive
/// source width cannot produce an aspect ratio and is a detected error; a
/// non-positive computed height clamps to an empty grid, which callers
/// treat as degenerate but not fatal.
pub fn target_grid(
    src_width: i32,
    src_height: i32,
    target_width: u32,
) -> Result<GridSize, ConvertError> {
    if src_width <= 0 {
        return Err(ConvertError::InvalidDimensions {
            width: src_width,
            height: src_height,
        });
    }

    let aspect_ratio = src_height as f64 / src_width as f64;
    let height = (aspect_ratio * target_width as f64 * TERMINAL_CHAR_ASPECT) as i64;

    Ok(GridSize {
        width: target_width,
        height: height.clamp(0, u32::MAX as i64) as u32,
    })
}
