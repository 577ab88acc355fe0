//! ASCII rendering for decoded bitmap pixels.
//!
//! This module provides the pipeline for turning sampled pixels into an
//! ASCII-art canvas:
//!
//! 1. **Grid calculation** - derive the character grid from the source size
//! 2. **Luminance** - BGR to brightness using BT.601
//! 3. **Character mapping** - brightness to a fixed 9-glyph ramp
//! 4. **Rendering** - assemble glyphs row by row into the canvas

mod charset;
mod dimensions;
mod grayscale;
mod mapping;
mod renderer;

pub use charset::{BLANK, RAMP};
pub use dimensions::{target_grid, GridSize, DEFAULT_TARGET_WIDTH, TERMINAL_CHAR_ASPECT};
pub use grayscale::luminance;
pub use mapping::glyph_for_brightness;
pub use renderer::render;
