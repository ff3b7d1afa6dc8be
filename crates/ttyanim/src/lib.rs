//! Turns a burst of timestamped terminal screenshots into a looping GIF.
//!
//! A recorder such as `ttygif` dumps one image per terminal update, named `<order>_<delay>.xwd`.
//! This library collects those files, resamples them onto a uniform frame rate with
//! [`ttyanim_resample`], and hands the result to an external compositor (ImageMagick's `convert`
//! by default) to produce the animation.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log filter set up by [`init_logger!`].

use log::LevelFilter;

pub mod config;
pub mod encode;
pub mod input;


pub use config::Config;

use encode::GifEncoder;
use input::InputSet;

/// Frame rates above this produce GIF delays below 15ms, which many viewers replay slowly.
pub const MAX_SMOOTH_FPS: f64 = 66.0;

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of input images that matched the filename convention.
    pub input_frames: usize,
    /// Number of frames passed to the encoder, including the trailing pause frame.
    pub output_frames: usize,
    /// Whether the input images were deleted afterwards.
    pub deleted_inputs: bool,
}

/// Runs the whole conversion described by `config`.
///
/// Inputs are only deleted if requested, the encoder succeeded, and the inputs were numbered
/// consecutively. Non-consecutive numbering does not stop the conversion itself.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    if config.rate.fps() > MAX_SMOOTH_FPS {
        log::warn!(
            "FPS above {} imply GIF delays of less than 15ms, which may cause slow replay",
            MAX_SMOOTH_FPS
        );
    }

    let paths = input::discover(config)?;
    let inputs = InputSet::parse(&paths)?;
    let sequence = inputs.to_sequence(config.delay_unit)?;
    let frames = sequence.subsample_for_encoding(config.rate);
    log::debug!(
        "resampled {} frames ({:?}) to {} frames at {}",
        sequence.len(),
        sequence.total_duration(),
        frames.len(),
        config.rate,
    );

    let command = GifEncoder::new(&config.encoder)
        .loop_count(config.loop_count)
        .pause(config.pause)
        .command(frames, &config.output)?;
    log::info!("{}", command);
    command.run()?;

    let deleted_inputs = if !config.delete {
        false
    } else if inputs.is_consecutive() {
        inputs.delete_files()?;
        true
    } else {
        log::warn!("not deleting inputs because they are not consecutively numbered");
        false
    };

    log::info!(
        "successfully generated {} sampled at {}",
        config.output.display(),
        config.rate
    );

    Ok(Summary {
        input_frames: inputs.len(),
        output_frames: command.frame_count(),
        deleted_inputs,
    })
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Info;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("ttyanim_resample"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library log at *info* level. `RUST_LOG` is applied on top.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
