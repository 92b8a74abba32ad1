use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use regbench_image::Image;
use regbench_imgproc::{
    interpolation::InterpolationMode,
    warp::{get_rotation_matrix2d, warp_affine},
};

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");
    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let data = (0..width * height)
            .map(|_| rng.random_range(0..=255u8))
            .collect::<Vec<_>>();
        let image = Image::<u8, 1>::new(image_size, data).unwrap();
        let image_f32 = image.cast::<f32>().unwrap();

        // output image
        let output = Image::<f32, 1>::from_size_val(image_size, 0.0).unwrap();
        let m = get_rotation_matrix2d((*width as f32 / 2.0, *height as f32 / 2.0), 7.5, 1.0);

        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), &parameter_string),
                &(&image_f32, &output, m),
                |b, i| {
                    let (src, mut dst, m) = (i.0, i.1.clone(), i.2);
                    b.iter(|| {
                        warp_affine(
                            black_box(src),
                            black_box(&mut dst),
                            black_box(&m),
                            black_box(mode),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_warp_affine);
criterion_main!(benches);
