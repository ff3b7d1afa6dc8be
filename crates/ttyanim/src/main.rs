use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use ttyanim::Config;
use ttyanim_resample::FrameRate;

/// Transform a set of ttygif images into a GIF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input files [default: all `*.xwd` files in the current directory]
    inputs: Vec<PathBuf>,

    /// Name of the output GIF file
    #[arg(short, long, default_value = "out.gif")]
    output: PathBuf,

    /// Sampling FPS
    #[arg(long, default_value = "25")]
    fps: FrameRate,

    /// Pause in seconds at the end of the GIF
    #[arg(long, default_value = "2")]
    pause: f64,

    /// Number of GIF loops (0 is infinite)
    #[arg(long = "loop", default_value = "0")]
    loop_count: u32,

    /// Delete inputs when done
    #[arg(short, long)]
    delete: bool,

    /// Compositor program used to assemble the GIF
    #[arg(long, default_value = "convert")]
    encoder: String,

    /// Microseconds per unit of the delay encoded in input file names
    #[arg(long, default_value = "100")]
    delay_unit: u64,
}

fn main() -> anyhow::Result<()> {
    ttyanim::init_logger!();

    let args = Args::parse();
    let pause = Duration::try_from_secs_f64(args.pause)
        .with_context(|| format!("invalid pause of {} seconds", args.pause))?;

    let config = Config::default()
        .inputs(args.inputs)
        .output(args.output)
        .rate(args.fps)
        .pause(pause)
        .loop_count(args.loop_count)
        .delete(args.delete)
        .encoder(args.encoder)
        .delay_unit(Duration::from_micros(args.delay_unit));

    let summary = ttyanim::run(&config)?;
    log::debug!("{:?}", summary);

    Ok(())
}
