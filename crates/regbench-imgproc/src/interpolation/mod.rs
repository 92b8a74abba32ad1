//! Pixel interpolation methods for image transformations.
//!
//! Sample positions are expressed in pixel units with the align-corners
//! convention: the integer coordinate `(x, y)` is the centre of pixel `(x, y)`,
//! so the first and last pixels sit exactly on the grid corners.
//!
//! Neighbours that fall outside the source image contribute zero, which is the
//! behaviour of a zero-padded `grid_sample`.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the nearest pixel value (no interpolation)
//! - **Bilinear**: linear interpolation between the four adjacent pixels

mod bilinear;

/// Grid generation and coordinate mapping utilities.
pub mod grid;

mod interpolate;
mod nearest;
mod remap;

pub use interpolate::{interpolate_pixel, InterpolationMode};
pub use remap::remap;
