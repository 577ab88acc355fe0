//! Nearest-neighbor pixel sampling straight from the file.

use std::io::{self, Read, Seek};

use crate::ascii::GridSize;

use super::header::BmpHeader;
use super::reader::ByteReader;

/// A single pixel in the file's native blue-green-red byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

/// Samples source pixels for output grid cells.
///
/// Every sample performs an independent seek and 3-byte read. Total work is
/// bounded by the output grid size (typically tens of thousands of reads),
/// so no row caching is done.
pub struct PixelSampler<R> {
    reader: ByteReader<R>,
    header: BmpHeader,
    row_size: u64,
}

impl<R: Read + Seek> PixelSampler<R> {
    /// The caller must have validated `header.width > 0`.
    pub fn new(reader: ByteReader<R>, header: BmpHeader) -> Self {
        let row_size = header.row_size();
        Self {
            reader,
            header,
            row_size,
        }
    }

    /// Fetch the source pixel backing output cell `(x, y)` of a non-empty
    /// `grid`, with `x < grid.width` and `y < grid.height`.
    ///
    /// Returns `Ok(None)` when fewer than 3 bytes are available at the
    /// computed offset (truncated file or bogus pixel-data offset); the
    /// caller skips that cell.
    pub fn sample(&mut self, x: u32, y: u32, grid: &GridSize) -> io::Result<Option<Bgr>> {
        let width = self.header.width as i64;
        let height = self.header.height as i64;

        // Nearest neighbor: which source pixel lands on this output cell.
        let src_x = x as i64 * width / grid.width as i64;
        let src_y = y as i64 * height / grid.height as i64;

        // Rows are stored bottom-to-top, so flip the Y axis.
        let actual_y = height - 1 - src_y;

        let offset = self.header.pixel_data_start as u64
            + actual_y as u64 * self.row_size
            + src_x as u64 * 3;

        let mut pixel = [0u8; 3];
        let read = self.reader.read_at(offset, &mut pixel)?;
        if read < 3 {
            return Ok(None);
        }

        Ok(Some(Bgr {
            b: pixel[0],
            g: pixel[1],
            r: pixel[2],
        }))
    }
}
