//! Minimal decoder for 24-bit uncompressed BMP files.
//!
//! Parses only the header fields the converter needs (signature, pixel-data
//! offset, dimensions) and fetches pixels straight from the file with
//! explicit offset arithmetic:
//!
//! 1. **Field reading** - little-endian integers at fixed byte offsets
//! 2. **Header parsing** - signature check plus the three consumed fields
//! 3. **Pixel sampling** - bottom-up row order, rows padded to 4 bytes,
//!    BGR byte order, one seek+read per sampled pixel

mod header;
mod reader;
mod sampler;

pub use header::{BmpError, BmpHeader};
pub use reader::ByteReader;
pub use sampler::{Bgr, PixelSampler};
