use regbench_image::Image;

/// Kernel for bilinear interpolation with zero padding
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values. Each of the four neighbours lying outside
/// the image contributes zero to the weighted sum.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let mut pixel = [0.0; C];

    if !u.is_finite() || !v.is_finite() {
        return pixel;
    }

    let (rows, cols) = (image.rows() as f32, image.cols() as f32);

    // fully outside: no neighbour can be inside the image
    if u <= -1.0 || v <= -1.0 || u >= cols || v >= rows {
        return pixel;
    }

    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let taps = [
        (u0, v0, frac_uu * frac_vv),
        (u0 + 1.0, v0, frac_u * frac_vv),
        (u0, v0 + 1.0, frac_uu * frac_v),
        (u0 + 1.0, v0 + 1.0, frac_u * frac_v),
    ];

    let data = image.as_slice();
    let stride = image.cols();

    for (tu, tv, w) in taps {
        if tu < 0.0 || tv < 0.0 || tu >= cols || tv >= rows {
            continue;
        }
        let base = (tv as usize * stride + tu as usize) * C;
        for (k, p) in pixel.iter_mut().enumerate() {
            *p += data[base + k] * w;
        }
    }

    pixel
}
