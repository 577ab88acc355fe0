//! Top-level error type for a conversion run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
///
/// Per-pixel short reads are not represented here: the sampler absorbs them
/// locally by skipping the affected cell.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("input file '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// Input exists but does not start with the BMP signature.
    #[error("'{}' is not a valid BMP file (missing 'BM' signature)", .path.display())]
    InvalidFormat { path: PathBuf },

    /// Header declares a non-positive width, so no output geometry can be derived.
    #[error("invalid image dimensions {width}x{height}: width must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
