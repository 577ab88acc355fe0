//! Unit tests for the BMP decoder: header parsing, row geometry, and
//! nearest-neighbor sampling over in-memory files.

use std::io::Cursor;

use bmp2ascii::ascii::{render, GridSize};
use bmp2ascii::bmp::{Bgr, BmpError, BmpHeader, ByteReader, PixelSampler};

/// File offset where the test images place their pixel array.
const PIXEL_DATA_START: u32 = 26;

/// Build a minimal 24-bit BMP byte vector.
///
/// `rows` are visual rows, top to bottom, each a list of (b, g, r)
/// triplets; they are stored bottom-up with 4-byte row padding like the
/// real format.
fn build_bmp(width: i32, height: i32, rows: &[Vec<(u8, u8, u8)>]) -> Vec<u8> {
    let mut bytes = vec![0u8; PIXEL_DATA_START as usize];
    bytes[0] = b'B';
    bytes[1] = b'M';
    bytes[10..14].copy_from_slice(&PIXEL_DATA_START.to_le_bytes());
    bytes[18..22].copy_from_slice(&width.to_le_bytes());
    bytes[22..26].copy_from_slice(&height.to_le_bytes());

    let padding = (4 - (width.max(0) as usize * 3) % 4) % 4;
    for row in rows.iter().rev() {
        for &(b, g, r) in row {
            bytes.extend_from_slice(&[b, g, r]);
        }
        bytes.extend(std::iter::repeat(0u8).take(padding));
    }
    bytes
}

fn reader_over(bytes: Vec<u8>) -> ByteReader<Cursor<Vec<u8>>> {
    ByteReader::new(Cursor::new(bytes))
}

// ==================== Header Parsing Tests ====================

#[test]
fn test_header_parse_valid() {
    let mut reader = reader_over(build_bmp(3, 2, &[]));
    let header = BmpHeader::parse(&mut reader).unwrap();
    assert_eq!(header.pixel_data_start, PIXEL_DATA_START);
    assert_eq!(header.width, 3);
    assert_eq!(header.height, 2);
}

#[test]
fn test_header_rejects_bad_signature() {
    let mut bytes = build_bmp(3, 2, &[]);
    bytes[0] = b'P';
    bytes[1] = b'N';
    let mut reader = reader_over(bytes);
    let err = BmpHeader::parse(&mut reader).unwrap_err();
    assert!(matches!(err, BmpError::InvalidSignature));
}

#[test]
fn test_header_truncated_file_is_io_error() {
    let mut reader = reader_over(vec![b'B', b'M', 0, 0]);
    let err = BmpHeader::parse(&mut reader).unwrap_err();
    assert!(matches!(err, BmpError::Io(_)));
}

#[test]
fn test_header_negative_height_survives_parse() {
    // Top-down BMPs store a negative height; parsing must not mangle it
    let mut reader = reader_over(build_bmp(3, -2, &[]));
    let header = BmpHeader::parse(&mut reader).unwrap();
    assert_eq!(header.height, -2);
}

// ==================== Row Geometry Tests ====================

#[test]
fn test_row_padding_width_3() {
    // 3 * 3 = 9 bytes, padded to 12: padding = (4 - 9 % 4) % 4 = 3
    let header = BmpHeader {
        pixel_data_start: PIXEL_DATA_START,
        width: 3,
        height: 1,
    };
    assert_eq!(header.row_padding(), 3);
    assert_eq!(header.row_size(), 12);
}

#[test]
fn test_row_padding_width_4() {
    // 4 * 3 = 12 bytes, already a multiple of 4
    let header = BmpHeader {
        pixel_data_start: PIXEL_DATA_START,
        width: 4,
        height: 1,
    };
    assert_eq!(header.row_padding(), 0);
    assert_eq!(header.row_size(), 12);
}

#[test]
fn test_row_padding_width_1_and_2() {
    let one = BmpHeader {
        pixel_data_start: PIXEL_DATA_START,
        width: 1,
        height: 1,
    };
    assert_eq!(one.row_padding(), 1);
    assert_eq!(one.row_size(), 4);

    let two = BmpHeader {
        pixel_data_start: PIXEL_DATA_START,
        width: 2,
        height: 1,
    };
    assert_eq!(two.row_padding(), 2);
    assert_eq!(two.row_size(), 8);
}

// ==================== Sampler Tests ====================

fn sampler_for(bytes: Vec<u8>) -> PixelSampler<Cursor<Vec<u8>>> {
    let mut reader = reader_over(bytes);
    let header = BmpHeader::parse(&mut reader).unwrap();
    PixelSampler::new(reader, header)
}

#[test]
fn test_sampler_reads_bgr_order() {
    let bytes = build_bmp(1, 1, &[vec![(10, 20, 30)]]);
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 1, height: 1 };
    let pixel = sampler.sample(0, 0, &grid).unwrap().unwrap();
    assert_eq!(pixel, Bgr { b: 10, g: 20, r: 30 });
}

#[test]
fn test_sampler_flips_bottom_up_rows() {
    // Visual top row black, bottom row white. Output row 0 must sample the
    // physically last stored row (actual_y = height - 1 - 0 = 1).
    let bytes = build_bmp(1, 2, &[vec![(0, 0, 0)], vec![(255, 255, 255)]]);
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 1, height: 2 };

    let top = sampler.sample(0, 0, &grid).unwrap().unwrap();
    let bottom = sampler.sample(0, 1, &grid).unwrap().unwrap();
    assert_eq!(top, Bgr { b: 0, g: 0, r: 0 });
    assert_eq!(bottom, Bgr { b: 255, g: 255, r: 255 });
}

#[test]
fn test_sampler_steps_over_row_padding() {
    // Width 3 rows carry 3 padding bytes; the second visual row must be
    // read 12 bytes into the pixel array, not 9.
    let bytes = build_bmp(
        3,
        2,
        &[
            vec![(1, 1, 1), (2, 2, 2), (3, 3, 3)],
            vec![(4, 4, 4), (5, 5, 5), (6, 6, 6)],
        ],
    );
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 3, height: 2 };

    assert_eq!(
        sampler.sample(2, 0, &grid).unwrap().unwrap(),
        Bgr { b: 3, g: 3, r: 3 }
    );
    assert_eq!(
        sampler.sample(0, 1, &grid).unwrap().unwrap(),
        Bgr { b: 4, g: 4, r: 4 }
    );
}

#[test]
fn test_sampler_nearest_neighbor_downsampling() {
    // 4 source columns onto 2 output columns: cells 0 and 1 pick source
    // columns 0 and 2.
    let bytes = build_bmp(
        4,
        1,
        &[vec![(10, 10, 10), (20, 20, 20), (30, 30, 30), (40, 40, 40)]],
    );
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 2, height: 1 };

    assert_eq!(
        sampler.sample(0, 0, &grid).unwrap().unwrap(),
        Bgr { b: 10, g: 10, r: 10 }
    );
    assert_eq!(
        sampler.sample(1, 0, &grid).unwrap().unwrap(),
        Bgr { b: 30, g: 30, r: 30 }
    );
}

#[test]
fn test_sampler_short_read_returns_none() {
    let mut bytes = build_bmp(1, 1, &[vec![(10, 20, 30)]]);
    bytes.truncate(bytes.len() - 2); // only 1 of 3 pixel bytes left
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 1, height: 1 };
    assert!(sampler.sample(0, 0, &grid).unwrap().is_none());
}

// ==================== Renderer Tests ====================

#[test]
fn test_render_rows_and_newlines() {
    // 2x2: top row black, bottom row white -> "@@\n  \n"
    let bytes = build_bmp(
        2,
        2,
        &[
            vec![(0, 0, 0), (0, 0, 0)],
            vec![(255, 255, 255), (255, 255, 255)],
        ],
    );
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 2, height: 2 };
    let canvas = render(&mut sampler, &grid).unwrap();
    assert_eq!(canvas, "@@\n  \n");
}

#[test]
fn test_render_skips_cell_on_short_read() {
    // Truncate the stored top row so its second pixel cannot be fully
    // read: that row renders one glyph short, newline still present.
    let mut bytes = build_bmp(
        2,
        2,
        &[
            vec![(0, 0, 0), (0, 0, 0)],
            vec![(255, 255, 255), (255, 255, 255)],
        ],
    );
    bytes.truncate(bytes.len() - 4);
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 2, height: 2 };
    let canvas = render(&mut sampler, &grid).unwrap();

    let lines: Vec<&str> = canvas.split('\n').collect();
    assert_eq!(lines.len(), 3); // two rows plus trailing empty split
    assert_eq!(lines[0], "@", "short read should drop the second glyph");
    assert_eq!(lines[1], "  ");
}

#[test]
fn test_render_empty_grid_is_empty_canvas() {
    let bytes = build_bmp(2, 2, &[]);
    let mut sampler = sampler_for(bytes);
    let grid = GridSize { width: 2, height: 0 };
    assert_eq!(render(&mut sampler, &grid).unwrap(), "");
}
