use argh::FromArgs;
use std::path::PathBuf;

use grayconv::image::Kernel;
use grayconv::imgproc::filter::{self, BorderType, FilterOptions, OverflowPolicy};
use grayconv::imgproc::parallel::ExecutionStrategy;
use grayconv::io::pgm;

#[derive(FromArgs)]
/// Apply a 3x3 kernel to a text PGM image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// nine comma separated kernel weights in row-major order, defaults to all ones
    #[argh(option, short = 'k')]
    kernel: Option<String>,

    /// number of worker threads, defaults to the hardware concurrency
    #[argh(option, short = 'j')]
    threads: Option<usize>,

    /// clamp sums to [0, 255] instead of wrapping them modulo 255
    #[argh(switch)]
    clamp: bool,

    /// filter the border by replicating the edge pixels instead of leaving it unchanged
    #[argh(switch)]
    replicate: bool,
}

fn parse_kernel(weights: &str) -> Result<Kernel, Box<dyn std::error::Error>> {
    let weights = weights
        .split(',')
        .map(|w| w.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Kernel::from_slice(&weights)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let kernel = match &args.kernel {
        Some(weights) => parse_kernel(weights)?,
        None => Kernel::default(),
    };

    let mut options = FilterOptions::default();
    if let Some(n) = args.threads {
        options = options.with_strategy(ExecutionStrategy::Fixed(n));
    }
    if args.clamp {
        options = options.with_overflow(OverflowPolicy::Clamp);
    }
    if args.replicate {
        options = options.with_border(BorderType::Replicate, 0);
    }

    // read the image
    let mut image = pgm::read_image_pgm(&args.input)?;
    log::info!("read {} from {:?}", image.size(), args.input);

    // filter it in place
    filter::filter3x3_with(&mut image, &kernel, &options)?;

    pgm::write_image_pgm(&args.output, &image)?;
    log::info!("wrote {:?}", args.output);

    Ok(())
}
