use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};

use crate::{report::REPORT_FILE_NAME, sampler::TransformRanges};

/// Name of the directory holding the unmodified copies.
pub const REFERENCE_DIR: &str = "reference";

/// Name of the directory holding the warped copies.
pub const FLOATING_DIR: &str = "floating";

/// Settings of one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Grayscale source image.
    pub input_image: PathBuf,
    /// Base directory receiving both sets and the report.
    pub output_path: PathBuf,
    /// Number of copies per set.
    pub num_images: usize,
    /// Bounds of the sampled transform.
    pub ranges: TransformRanges,
    /// Seed of the random source; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_image: PathBuf::from("IM1.png"),
            output_path: PathBuf::from("."),
            num_images: 256,
            ranges: TransformRanges::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Directory of the reference set.
    pub fn reference_dir(&self) -> PathBuf {
        self.output_path.join(REFERENCE_DIR)
    }

    /// Directory of the floating set.
    pub fn floating_dir(&self) -> PathBuf {
        self.output_path.join(FLOATING_DIR)
    }

    /// Path of the deformation report.
    pub fn report_path(&self) -> PathBuf {
        self.output_path.join(REPORT_FILE_NAME)
    }

    /// The random source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
