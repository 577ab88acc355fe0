//! Brightness to character mapping.

use super::charset::{BLANK, RAMP};

/// Map a brightness value (0-255) to a glyph from the fixed ramp.
///
/// Pure and total over the full byte range. Thresholds are compared with
/// strict `<` and the first match wins, so a brightness sitting exactly on
/// a boundary takes the next (lighter) glyph.
pub fn glyph_for_brightness(brightness: u8) -> char {
    for &(threshold, glyph) in RAMP {
        if brightness < threshold {
            return glyph;
        }
    }
    BLANK
}
