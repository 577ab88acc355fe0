//! BGR to luminance conversion using the ITU-R BT.601 formula.

use crate::bmp::Bgr;

/// Convert a BGR pixel to luminance: Y = 0.299*R + 0.587*G + 0.114*B.
///
/// Uses integer math with the coefficients scaled by 1000, which truncates
/// exactly like the real-valued formula. The coefficients sum to 1000, so
/// the result always stays within 0-255.
pub fn luminance(pixel: Bgr) -> u8 {
    let r = pixel.r as u32;
    let g = pixel.g as u32;
    let b = pixel.b as u32;
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}
