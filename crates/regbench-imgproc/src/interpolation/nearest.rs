use regbench_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The value of the closest pixel, zero if it lies outside the image.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let mut pixel = [0.0; C];

    let iu = u.round();
    let iv = v.round();

    if !(iu >= 0.0 && iv >= 0.0 && iu < image.cols() as f32 && iv < image.rows() as f32) {
        return pixel;
    }

    let base = (iv as usize * image.cols() + iu as usize) * C;
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);

    pixel
}
