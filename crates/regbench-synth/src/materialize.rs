use std::path::{Path, PathBuf};

use regbench_image::Image;
use regbench_io::{png::encode_image_png_gray8, IoError};

use crate::error::SynthError;

/// File name of the `index`-th image of a set.
pub fn image_file_name(index: usize) -> String {
    format!("IM{index}.png")
}

/// A directory holding `count` identical images `IM0.png .. IM{count-1}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSet {
    dir: PathBuf,
    count: usize,
}

impl GeneratedSet {
    /// The directory of the set.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of images in the set.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Path of the `index`-th image, `None` past the end of the set.
    pub fn path(&self, index: usize) -> Option<PathBuf> {
        (index < self.count).then(|| self.dir.join(image_file_name(index)))
    }

    /// Paths of all images in index order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (0..self.count).map(|i| self.dir.join(image_file_name(i)))
    }
}

/// Writes `count` copies of `image` as PNG files into `output_dir`.
///
/// The directory and its parents are created if missing. The image is encoded
/// once, so every file holds the same bytes.
///
/// # Arguments
///
/// * `image` - The grayscale image to write.
/// * `output_dir` - The directory receiving `IM0.png .. IM{count-1}.png`.
/// * `count` - Number of copies.
///
/// # Errors
///
/// [`SynthError::Write`] on the first failing write. Files written before the
/// failure are not removed.
pub fn materialize(
    image: &Image<u8, 1>,
    output_dir: impl AsRef<Path>,
    count: usize,
) -> Result<GeneratedSet, SynthError> {
    let dir = output_dir.as_ref().to_path_buf();

    std::fs::create_dir_all(&dir).map_err(|e| SynthError::Write {
        path: dir.clone(),
        source: IoError::FileError(e),
    })?;

    let bytes = encode_image_png_gray8(image).map_err(|source| SynthError::Write {
        path: dir.clone(),
        source,
    })?;

    let set = GeneratedSet { dir, count };

    log::debug!("writing {} copies to {}", count, set.dir.display());

    for path in set.paths() {
        std::fs::write(&path, &bytes).map_err(|e| SynthError::Write {
            path,
            source: IoError::FileError(e),
        })?;
    }

    Ok(set)
}
