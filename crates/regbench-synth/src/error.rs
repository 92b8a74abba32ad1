use std::path::PathBuf;

use regbench_image::ImageError;
use regbench_io::IoError;

/// An error type for the dataset generator.
#[derive(thiserror::Error, Debug)]
pub enum SynthError {
    /// The source image does not exist.
    #[error("Input image not found: {0}")]
    ImageNotFound(PathBuf),

    /// The source image is not 8-bit single channel.
    #[error("Input image must be grayscale (single channel), got {format} with {channels} channels: {path}")]
    UnsupportedImage {
        /// Path of the rejected image.
        path: PathBuf,
        /// Decoded pixel layout.
        format: &'static str,
        /// Decoded number of channels.
        channels: usize,
    },

    /// The source image exists but could not be decoded.
    #[error("Failed to load input image {path}")]
    ImageLoad {
        /// Path of the image.
        path: PathBuf,
        /// Underlying decoding error.
        source: IoError,
    },

    /// A sampling interval is empty or not finite.
    #[error("Invalid {name} range [{min}, {max}]: bounds must be finite with min <= max")]
    InvalidRange {
        /// Name of the sampled parameter.
        name: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// The affine matrix built from the transform cannot be inverted.
    #[error("Transform yields a non-invertible warp matrix (determinant {0})")]
    DegenerateTransform(f32),

    /// The image does not have the shape the warp expects.
    #[error("Image shape mismatch. {0}")]
    ShapeMismatch(ImageError),

    /// Writing a dataset file or directory failed.
    #[error("Failed to write {path}")]
    Write {
        /// File or directory that could not be written.
        path: PathBuf,
        /// Underlying error.
        source: IoError,
    },

    /// Appending to the deformation report failed.
    #[error("Failed to append to the deformation report {path}")]
    ReportWrite {
        /// Path of the report.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Reading the deformation report failed.
    #[error("Failed to read the deformation report {path}")]
    ReportRead {
        /// Path of the report.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A report line does not follow the record format.
    #[error("Malformed deformation report line: {0:?}")]
    MalformedReport(String),
}

impl From<ImageError> for SynthError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::SingularMatrix(determinant) => SynthError::DegenerateTransform(determinant),
            other => SynthError::ShapeMismatch(other),
        }
    }
}
