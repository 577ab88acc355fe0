//! bmp2ascii library crate.
//!
//! This module exposes the decoder and renderer components for integration testing.

pub mod ascii;
pub mod bmp;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
