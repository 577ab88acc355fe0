//! Glyph ramp definition for brightness mapping.

/// Brightness thresholds and their glyphs, in ascending threshold order.
/// A pixel takes the glyph of the first threshold strictly above its
/// brightness; 200 and brighter renders as blank.
///
/// The exact ramp is an output-compatibility contract: darkest pixels map
/// to the densest glyph `@`, brightest to space.
pub const RAMP: &[(u8, char)] = &[
    (25, '@'),
    (50, '#'),
    (75, '8'),
    (100, '&'),
    (125, 'o'),
    (150, ':'),
    (175, '*'),
    (200, '.'),
];

/// Glyph for pixels at or above the last ramp threshold.
pub const BLANK: char = ' ';
