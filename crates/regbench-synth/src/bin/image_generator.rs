use std::path::PathBuf;

use clap::Parser;
use regbench_synth::{run, GeneratorConfig};

/// Create reference/floating folders from a grayscale image (2D rigid transform)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image
    #[arg(long = "input_image", default_value = "IM1.png")]
    input_image: PathBuf,

    /// Base output folder
    #[arg(long = "output_path", default_value = ".")]
    output_path: PathBuf,

    /// Number of copies per set
    #[arg(long = "num_images", default_value_t = 256)]
    num_images: usize,

    /// Seed of the random transform, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = GeneratorConfig {
        input_image: args.input_image,
        output_path: args.output_path,
        num_images: args.num_images,
        seed: args.seed,
        ..Default::default()
    };

    let record = run(&config, &mut config.rng())?;

    let written = written_files(config.num_images);
    println!(
        "reference: {written} written from {}",
        config.input_image.display()
    );
    println!("floating:  {written} written from deformed image");
    println!("log written to: {}", config.report_path().display());
    println!(
        "tx={:.2}, ty={:.2}, angle={:.2} deg",
        record.tx, record.ty, record.angle_deg
    );

    Ok(())
}

/// Names the files of one set for the summary, e.g. `IM0..IM255`.
fn written_files(count: usize) -> String {
    match count {
        0 => "no images".to_string(),
        1 => "IM0".to_string(),
        n => format!("IM0..IM{}", n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::written_files;

    #[test]
    fn summary_names_written_files() {
        assert_eq!(written_files(0), "no images");
        assert_eq!(written_files(1), "IM0");
        assert_eq!(written_files(256), "IM0..IM255");
    }
}
