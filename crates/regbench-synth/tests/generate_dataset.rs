use std::path::Path;

use rand::{rngs::StdRng, SeedableRng};
use regbench_image::Image;
use regbench_io::png::{read_image_png_mono8, write_image_png_gray8, write_image_png_rgb8};
use regbench_synth::{
    read_report, run, warp_rigid, GeneratorConfig, RigidTransform2D, SynthError, TransformRanges,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn center_dot() -> Image<u8, 1> {
    let mut data = vec![0u8; 16];
    data[2 * 4 + 2] = 255;
    Image::new([4, 4].into(), data).unwrap()
}

fn gradient(width: usize, height: usize) -> Image<u8, 1> {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| ((x * 7 + y * 13) % 256) as u8))
        .collect();
    Image::new([width, height].into(), data).unwrap()
}

fn config_for(input: &Path, output: &Path, num_images: usize) -> GeneratorConfig {
    GeneratorConfig {
        input_image: input.to_path_buf(),
        output_path: output.to_path_buf(),
        num_images,
        ..Default::default()
    }
}

#[test]
fn identity_run_copies_source_everywhere() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("IM1.png");
    let source = center_dot();
    write_image_png_gray8(&input, &source)?;

    let out = tmp_dir.path().join("dataset");
    let config = GeneratorConfig {
        ranges: TransformRanges::fixed(&RigidTransform2D::IDENTITY),
        ..config_for(&input, &out, 3)
    };

    let record = run(&config, &mut StdRng::seed_from_u64(0))?;
    assert_eq!(record.transform(), RigidTransform2D::IDENTITY);
    assert_eq!(record.count, 3);

    for set in ["reference", "floating"] {
        let dir = out.join(set);
        assert_eq!(std::fs::read_dir(&dir)?.count(), 3);
        for i in 0..3 {
            let image = read_image_png_mono8(dir.join(format!("IM{i}.png")))?;
            assert_eq!(image, source, "{set}/IM{i}.png");
        }
    }

    let log = std::fs::read_to_string(out.join("deformation_report.log"))?;
    let lines = log.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('['));
    assert!(
        lines[0].ends_with(&format!(
            "] {}: tx=0.00, ty=0.00, angle=0.00 deg, written=3",
            input.display()
        )),
        "{}",
        lines[0]
    );

    Ok(())
}

#[test]
fn missing_input_writes_nothing() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("does_not_exist.png");
    let out = tmp_dir.path().join("dataset");

    let res = run(&config_for(&input, &out, 3), &mut StdRng::seed_from_u64(0));
    assert!(matches!(res, Err(SynthError::ImageNotFound(ref p)) if *p == input));

    assert!(!out.join("reference").exists());
    assert!(!out.join("floating").exists());
    assert!(!out.join("deformation_report.log").exists());

    Ok(())
}

#[test]
fn color_input_is_rejected_before_writing() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("IM1.png");
    write_image_png_rgb8(&input, &Image::<u8, 3>::from_size_val([4, 4].into(), 80)?)?;

    let out = tmp_dir.path().join("dataset");
    let res = run(&config_for(&input, &out, 3), &mut StdRng::seed_from_u64(0));
    assert!(matches!(
        res,
        Err(SynthError::UnsupportedImage { channels: 3, .. })
    ));
    assert!(!out.exists());

    Ok(())
}

#[test]
fn floating_set_matches_logged_transform() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("IM1.png");
    let source = gradient(32, 24);
    write_image_png_gray8(&input, &source)?;

    let out = tmp_dir.path().join("dataset");
    let config = GeneratorConfig {
        seed: Some(2024),
        ..config_for(&input, &out, 4)
    };

    let record = run(&config, &mut config.rng())?;
    assert!(TransformRanges::default().contains(&record.transform()));

    let expected = warp_rigid(&source, &record.transform())?;
    let first = std::fs::read(out.join("floating/IM0.png"))?;
    for i in 0..4 {
        let path = out.join(format!("floating/IM{i}.png"));
        assert_eq!(std::fs::read(&path)?, first);
        assert_eq!(read_image_png_mono8(&path)?, expected);
    }

    // the report keeps the parameters with two decimals
    let records = read_report(config.report_path())?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_image, input.display().to_string());
    assert_eq!(records[0].count, 4);
    assert!((records[0].tx - record.tx).abs() <= 0.005 + 1e-9);
    assert!((records[0].ty - record.ty).abs() <= 0.005 + 1e-9);
    assert!((records[0].angle_deg - record.angle_deg).abs() <= 0.005 + 1e-9);

    Ok(())
}

#[test]
fn same_seed_reproduces_floating_set() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("IM1.png");
    write_image_png_gray8(&input, &gradient(20, 20))?;

    let mut outputs = Vec::new();
    for name in ["a", "b"] {
        let config = GeneratorConfig {
            seed: Some(7),
            ..config_for(&input, &tmp_dir.path().join(name), 2)
        };
        let record = run(&config, &mut config.rng())?;
        outputs.push((record.transform(), std::fs::read(config.floating_dir().join("IM1.png"))?));
    }

    assert_eq!(outputs[0], outputs[1]);

    Ok(())
}

#[test]
fn repeated_runs_append_to_the_report() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("IM1.png");
    write_image_png_gray8(&input, &gradient(8, 8))?;

    let out = tmp_dir.path().join("dataset");
    let config = config_for(&input, &out, 2);
    let mut rng = StdRng::seed_from_u64(5);

    let first = run(&config, &mut rng)?;
    let second = run(&config, &mut rng)?;

    let records = read_report(config.report_path())?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].count, first.count);
    assert_eq!(records[1].count, second.count);
    assert_eq!(std::fs::read_dir(config.floating_dir())?.count(), 2);

    Ok(())
}

#[test]
fn failed_floating_set_keeps_reference_and_skips_report() -> TestResult {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("IM1.png");
    write_image_png_gray8(&input, &gradient(6, 6))?;

    let out = tmp_dir.path().join("dataset");
    std::fs::create_dir_all(&out)?;
    // a regular file where the floating directory should go
    std::fs::write(out.join("floating"), b"in the way")?;

    let config = config_for(&input, &out, 3);
    let res = run(&config, &mut StdRng::seed_from_u64(1));
    assert!(matches!(
        res,
        Err(SynthError::Write { ref path, .. }) if *path == config.floating_dir()
    ));

    // the reference set written before the failure stays on disk
    assert_eq!(std::fs::read_dir(config.reference_dir())?.count(), 3);
    assert!(!config.report_path().exists());

    Ok(())
}
