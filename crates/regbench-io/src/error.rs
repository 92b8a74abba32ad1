/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] regbench_image::ImageError),

    /// Error to decode a non-PNG image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// Error when the decoded pixel layout has no [`crate::GenericImage`] variant.
    #[error("Unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    /// Error when the decoded image does not have the requested layout.
    #[error("Expected a {expected} image, got {found}")]
    UnexpectedImageFormat {
        /// The requested pixel layout.
        expected: &'static str,
        /// The decoded pixel layout.
        found: &'static str,
    },

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),
}
