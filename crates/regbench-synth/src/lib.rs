#![deny(missing_docs)]
//! Synthetic datasets for image-registration benchmarking.
//!
//! From one grayscale image the generator writes a `reference` set of
//! unmodified copies and a `floating` set of copies warped by a single random
//! rigid transform, and appends the sampled parameters to
//! `deformation_report.log`:
//!
//! ```text
//! {output_path}/reference/IM0.png .. IM{N-1}.png
//! {output_path}/floating/IM0.png  .. IM{N-1}.png
//! {output_path}/deformation_report.log
//! ```
//!
//! A failed run never appends to the report, but files already written to
//! `reference/` or `floating/` are left in place.

/// Generator configuration.
pub mod config;

/// Error types for the dataset generator.
pub mod error;

/// The generation pipeline tying all stages together.
pub mod generator;

/// Writing N copies of an image to disk.
pub mod materialize;

/// The append-only deformation report.
pub mod report;

/// Random sampling of rigid transforms.
pub mod sampler;

/// Rigid transform and affine matrix value types.
pub mod transform;

/// Warping an image by a rigid transform.
pub mod warp;

pub use crate::config::GeneratorConfig;
pub use crate::error::SynthError;
pub use crate::generator::{load_source_image, run};
pub use crate::materialize::{materialize, GeneratedSet};
pub use crate::report::{append_record, read_report, DeformationLogRecord};
pub use crate::sampler::{sample_rigid_transform, SampleRange, TransformRanges};
pub use crate::transform::{AffineMatrix, RigidTransform2D};
pub use crate::warp::warp_rigid;
