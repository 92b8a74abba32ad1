//! Geometric image transformations using affine warps.
//!
//! Matrices are 2x3 row-major arrays `[a, b, c, d, e, f]` mapping a source
//! pixel `(x, y)` to the destination pixel `(a*x + b*y + c, d*x + e*y + f)`.
//!
//! # Examples
//!
//! Rotating an image by 45 degrees around its centre:
//!
//! ```no_run
//! use regbench_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((128.0, 128.0), 45.0, 1.0);
//! // Use with warp_affine to rotate the image
//! ```

mod affine;

pub use affine::{get_rotation_matrix2d, invert_affine_transform, warp_affine};
