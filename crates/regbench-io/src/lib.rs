#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_any`] to read an image without knowing its
/// channel layout up front.
pub mod functional;

/// PNG image encoding and decoding.
///
/// Read and write PNG images with 8 and 16 bit depths.
pub mod png;

/// Internal utility functions for image bit depth conversion.
mod conv_utils;

pub use crate::error::IoError;
pub use crate::functional::{read_image_any, GenericImage};
