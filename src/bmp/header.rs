//! BMP header parsing.

use std::io::{Read, Seek};

use thiserror::Error;

use super::reader::ByteReader;

const SIGNATURE_OFFSET: u64 = 0;
const PIXEL_DATA_START_OFFSET: u64 = 10;
const WIDTH_OFFSET: u64 = 18;
const HEIGHT_OFFSET: u64 = 22;

/// The two-byte signature every valid BMP file starts with.
const SIGNATURE: [u8; 2] = *b"BM";

/// Errors from parsing a BMP header.
#[derive(Debug, Error)]
pub enum BmpError {
    /// The file does not start with the `BM` signature.
    #[error("missing 'BM' signature")]
    InvalidSignature,
    /// The header bytes could not be read.
    #[error("failed to read BMP header: {0}")]
    Io(#[from] std::io::Error),
}

/// The subset of the BMP header this tool consumes.
///
/// Compression, bit-depth, and palette fields are never consulted: the
/// decoder assumes 24-bit uncompressed pixel data. Inputs violating that
/// assumption decode to garbage glyphs rather than an error; this is a
/// known limitation.
#[derive(Debug, Clone, Copy)]
pub struct BmpHeader {
    /// File offset where the pixel array begins.
    pub pixel_data_start: u32,
    /// Image width in pixels (signed per the format).
    pub width: i32,
    /// Image height in pixels. Positive height means bottom-up row storage.
    pub height: i32,
}

impl BmpHeader {
    /// Parse the consumed header fields from the start of the stream.
    ///
    /// Verifies the signature, then reads the pixel-data offset (u32 at
    /// byte 10) and the signed width and height (i32 at bytes 18 and 22).
    pub fn parse<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, BmpError> {
        let mut signature = [0u8; 2];
        reader.read_bytes(SIGNATURE_OFFSET, &mut signature)?;
        if signature != SIGNATURE {
            return Err(BmpError::InvalidSignature);
        }

        let pixel_data_start = reader.read_u32_le(PIXEL_DATA_START_OFFSET)?;
        let width = reader.read_i32_le(WIDTH_OFFSET)?;
        let height = reader.read_i32_le(HEIGHT_OFFSET)?;

        Ok(Self {
            pixel_data_start,
            width,
            height,
        })
    }

    /// Bytes of padding at the end of each stored pixel row.
    ///
    /// Every row is padded to a multiple of 4 bytes. Meaningful only for
    /// positive widths, which the pipeline validates before sampling.
    pub fn row_padding(&self) -> u64 {
        (4 - (self.width as u64 * 3) % 4) % 4
    }

    /// Total bytes per stored pixel row, padding included.
    pub fn row_size(&self) -> u64 {
        self.width as u64 * 3 + self.row_padding()
    }
}
