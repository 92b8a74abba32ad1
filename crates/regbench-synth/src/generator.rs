use std::path::Path;

use rand::Rng;
use regbench_image::Image;
use regbench_io::{read_image_any, GenericImage, IoError};

use crate::{
    config::GeneratorConfig,
    error::SynthError,
    materialize::materialize,
    report::{append_record, DeformationLogRecord},
    sampler::sample_rigid_transform,
    warp::warp_rigid,
};

/// Loads the source image, accepting only 8-bit single channel images.
///
/// # Errors
///
/// * [`SynthError::ImageNotFound`] if `path` does not exist.
/// * [`SynthError::UnsupportedImage`] if the image has more than one channel or 16-bit samples.
/// * [`SynthError::ImageLoad`] if the file cannot be decoded.
pub fn load_source_image(path: impl AsRef<Path>) -> Result<Image<u8, 1>, SynthError> {
    let path = path.as_ref();

    match read_image_any(path) {
        Ok(GenericImage::L8(image)) => Ok(image),
        Ok(other) => Err(SynthError::UnsupportedImage {
            path: path.to_path_buf(),
            format: other.format_name(),
            channels: other.num_channels(),
        }),
        Err(IoError::FileDoesNotExist(path)) => Err(SynthError::ImageNotFound(path)),
        Err(source) => Err(SynthError::ImageLoad {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Generates a reference/floating dataset pair and records it in the report.
///
/// The stages run in order: load, sample, warp, write the reference set, write
/// the floating set, append the report line. A failure in any stage returns
/// immediately; the report is only appended once both sets are complete.
///
/// # Arguments
///
/// * `config` - Input, output layout, copy count and sampling ranges.
/// * `rng` - The random source used to sample the transform.
///
/// # Returns
///
/// The record appended to the report.
///
/// # Example
///
/// ```no_run
/// use regbench_synth::{run, GeneratorConfig};
///
/// let config = GeneratorConfig {
///     input_image: "IM1.png".into(),
///     output_path: "dataset".into(),
///     num_images: 16,
///     ..Default::default()
/// };
/// let record = run(&config, &mut config.rng()).unwrap();
/// println!("{record}");
/// ```
pub fn run<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<DeformationLogRecord, SynthError> {
    let image = load_source_image(&config.input_image)?;
    log::debug!(
        "loaded {} ({}x{})",
        config.input_image.display(),
        image.width(),
        image.height()
    );

    let transform = sample_rigid_transform(&config.ranges, rng)?;
    log::debug!(
        "sampled {:?} with matrix {:?}",
        transform,
        transform.matrix().as_array()
    );

    let warped = warp_rigid(&image, &transform)?;

    let reference = materialize(&image, config.reference_dir(), config.num_images)?;
    log::info!(
        "reference: {} images written to {} from {}",
        reference.count(),
        reference.dir().display(),
        config.input_image.display()
    );

    let floating = materialize(&warped, config.floating_dir(), config.num_images)?;
    log::info!(
        "floating: {} images written to {} from deformed image",
        floating.count(),
        floating.dir().display()
    );

    let record = DeformationLogRecord::new(
        config.input_image.display().to_string(),
        &transform,
        config.num_images,
    );
    let report_path = config.report_path();
    append_record(&report_path, &record)?;
    log::info!("log written to: {}", report_path.display());

    Ok(record)
}
