//! End-to-end conversion: decode, render, print, persist.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ascii::{self, GridSize, DEFAULT_TARGET_WIDTH};
use crate::bmp::{BmpError, BmpHeader, ByteReader, PixelSampler};
use crate::config::Config;
use crate::error::ConvertError;

/// Parameters for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target_width: u32,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct ConvertSummary {
    pub source_width: i32,
    pub source_height: i32,
    pub grid: GridSize,
    pub output: PathBuf,
}

/// Errors from resolving run options out of CLI arguments and config.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("no input file given (pass a path or set [input] path in the config)")]
    MissingInput,
    #[error("output width must be greater than 0")]
    ZeroWidth,
}

/// Merge CLI arguments over config values over built-in defaults.
///
/// CLI flags win over the config file; the config wins over defaults
/// (width falls back to [`DEFAULT_TARGET_WIDTH`], the output path to
/// [`default_output_path`]). The width is re-checked here because the
/// config file is not covered by the CLI's validating parser.
pub fn resolve_options(
    input: Option<PathBuf>,
    width: Option<u32>,
    output: Option<PathBuf>,
    config: Config,
) -> Result<ConvertOptions, OptionsError> {
    let input = input
        .or(config.input.path)
        .ok_or(OptionsError::MissingInput)?;

    let target_width = width
        .or(config.render.width)
        .unwrap_or(DEFAULT_TARGET_WIDTH);
    if target_width == 0 {
        return Err(OptionsError::ZeroWidth);
    }

    let output = output
        .or(config.output.path)
        .unwrap_or_else(|| default_output_path(&input));

    Ok(ConvertOptions {
        input,
        output,
        target_width,
    })
}

/// Default output path: `<input stem>_ascii_art.txt` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{stem}_ascii_art.txt"))
}

/// Convert one BMP file to ASCII art.
///
/// Header validation failures abort before any output is produced. The
/// source handle stays open for the whole sampling phase and is released
/// before the artifact is written; per-pixel short reads are absorbed in
/// the sampler and never fail the run.
pub fn convert(opts: &ConvertOptions) -> Result<ConvertSummary, ConvertError> {
    let file = File::open(&opts.input).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ConvertError::FileNotFound {
                path: opts.input.clone(),
            }
        } else {
            ConvertError::Io(e)
        }
    })?;

    let mut reader = ByteReader::new(file);
    let header = BmpHeader::parse(&mut reader).map_err(|e| match e {
        BmpError::InvalidSignature => ConvertError::InvalidFormat {
            path: opts.input.clone(),
        },
        BmpError::Io(e) => ConvertError::Io(e),
    })?;

    let grid = ascii::target_grid(header.width, header.height, opts.target_width)?;
    log::info!(
        "converting {}: {}x{} pixels -> {}x{} characters",
        opts.input.display(),
        header.width,
        header.height,
        grid.width,
        grid.height
    );

    let mut sampler = PixelSampler::new(reader, header);
    let canvas = ascii::render(&mut sampler, &grid)?;
    drop(sampler);

    print!("{canvas}");

    fs::write(&opts.output, canvas.as_bytes())?;
    log::info!("saved ASCII art to {}", opts.output.display());

    Ok(ConvertSummary {
        source_width: header.width,
        source_height: header.height,
        grid,
        output: opts.output.clone(),
    })
}
