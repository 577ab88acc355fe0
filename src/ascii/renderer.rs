//! Row-by-row assembly of the ASCII canvas.

use std::io::{self, Read, Seek};

use crate::bmp::PixelSampler;

use super::dimensions::GridSize;
use super::grayscale::luminance;
use super::mapping::glyph_for_brightness;

/// Render the output grid by sampling one source pixel per cell.
///
/// Rows run top to bottom, columns left to right. A cell whose pixel
/// cannot be fully read is skipped, shortening that row; the terminating
/// newline is appended either way.
pub fn render<R: Read + Seek>(
    sampler: &mut PixelSampler<R>,
    grid: &GridSize,
) -> io::Result<String> {
    let mut canvas = String::with_capacity((grid.width as usize + 1) * grid.height as usize);

    for y in 0..grid.height {
        for x in 0..grid.width {
            if let Some(pixel) = sampler.sample(x, y, grid)? {
                canvas.push(glyph_for_brightness(luminance(pixel)));
            }
        }
        canvas.push('\n');
    }

    Ok(canvas)
}
