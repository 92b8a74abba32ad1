use rand::{distr::Uniform, Rng};

use crate::{error::SynthError, transform::RigidTransform2D};

/// A closed sampling interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl SampleRange {
    /// Create a new interval. Bounds are validated when sampling.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// An interval holding a single value.
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Whether `value` lies inside the interval, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    fn sample<R: Rng + ?Sized>(&self, name: &'static str, rng: &mut R) -> Result<f64, SynthError> {
        let dist =
            Uniform::new_inclusive(self.min, self.max).map_err(|_| SynthError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })?;
        Ok(rng.sample(dist))
    }
}

/// Bounds for each parameter of a sampled rigid transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformRanges {
    /// Translation along x, in pixels.
    pub tx: SampleRange,
    /// Translation along y, in pixels.
    pub ty: SampleRange,
    /// Rotation, in degrees.
    pub angle_deg: SampleRange,
}

impl Default for TransformRanges {
    fn default() -> Self {
        Self {
            tx: SampleRange::new(-10.0, 10.0),
            ty: SampleRange::new(-10.0, 10.0),
            angle_deg: SampleRange::new(-10.0, 10.0),
        }
    }
}

impl TransformRanges {
    /// Degenerate ranges that always sample `transform`.
    pub fn fixed(transform: &RigidTransform2D) -> Self {
        Self {
            tx: SampleRange::fixed(transform.tx),
            ty: SampleRange::fixed(transform.ty),
            angle_deg: SampleRange::fixed(transform.angle_deg),
        }
    }

    /// Whether every parameter of `transform` lies in its range.
    pub fn contains(&self, transform: &RigidTransform2D) -> bool {
        self.tx.contains(transform.tx)
            && self.ty.contains(transform.ty)
            && self.angle_deg.contains(transform.angle_deg)
    }
}

/// Draws a rigid transform with every parameter uniform in its closed range.
///
/// The parameters are drawn independently in the order tx, ty, angle.
///
/// # Arguments
///
/// * `ranges` - The bounds of each parameter.
/// * `rng` - The random source.
///
/// # Errors
///
/// [`SynthError::InvalidRange`] if a range has `min > max` or a non-finite bound.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use regbench_synth::{sample_rigid_transform, TransformRanges};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let ranges = TransformRanges::default();
/// let transform = sample_rigid_transform(&ranges, &mut rng).unwrap();
/// assert!(ranges.contains(&transform));
/// ```
pub fn sample_rigid_transform<R: Rng + ?Sized>(
    ranges: &TransformRanges,
    rng: &mut R,
) -> Result<RigidTransform2D, SynthError> {
    let tx = ranges.tx.sample("tx", rng)?;
    let ty = ranges.ty.sample("ty", rng)?;
    let angle_deg = ranges.angle_deg.sample("angle", rng)?;

    Ok(RigidTransform2D { tx, ty, angle_deg })
}
