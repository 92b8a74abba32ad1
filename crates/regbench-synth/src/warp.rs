use regbench_image::{Image, ImageError};
use regbench_imgproc::{interpolation::InterpolationMode, warp::warp_affine};

use crate::{
    error::SynthError,
    transform::{AffineMatrix, RigidTransform2D},
};

/// Warps a grayscale image by a rigid transform.
///
/// The rotation is about pixel (0, 0), not the image centre. The output has
/// the input's size; each output pixel is bilinearly sampled at the inverse
/// transform of its position, with source pixels outside the image reading as
/// zero. Samples are clamped to [0, 255] and truncated to `u8`.
///
/// Sampling stays in pixel units even when the image is a single pixel wide
/// or tall. A fractional translation along such an axis blends the pixel with
/// the zero background; it is not collapsed onto index 0 the way a
/// normalized-coordinate `grid_sample` with `align_corners` would.
///
/// # Arguments
///
/// * `image` - The source image, left untouched.
/// * `transform` - The rigid transform mapping source to output pixels.
///
/// # Errors
///
/// * [`SynthError::ShapeMismatch`] if the image has no pixels.
/// * [`SynthError::DegenerateTransform`] if the affine matrix is not invertible.
pub fn warp_rigid(
    image: &Image<u8, 1>,
    transform: &RigidTransform2D,
) -> Result<Image<u8, 1>, SynthError> {
    if image.is_empty() {
        return Err(SynthError::ShapeMismatch(ImageError::ZeroSizedImage(
            image.width(),
            image.height(),
        )));
    }

    let matrix = AffineMatrix::from(transform);

    let src = image.cast::<f32>()?;
    let mut dst = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

    warp_affine(
        &src,
        &mut dst,
        matrix.as_array(),
        InterpolationMode::Bilinear,
    )?;

    if dst.size() != image.size() {
        return Err(SynthError::ShapeMismatch(ImageError::InvalidImageSize(
            image.width(),
            image.height(),
            dst.width(),
            dst.height(),
        )));
    }

    let data = dst.as_slice().iter().map(|&v| quantize_u8(v)).collect();

    Ok(Image::new(image.size(), data)?)
}

// clamp then truncate toward zero; NaN maps to 0
fn quantize_u8(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
