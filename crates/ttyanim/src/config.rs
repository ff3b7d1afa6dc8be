//! Per-invocation settings.

use std::{path::PathBuf, time::Duration};

use ttyanim_resample::FrameRate;

/// Settings for one [`run`](crate::run).
///
/// Constructed once per invocation via [`Config::default`] and the builder methods below.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) inputs: Vec<PathBuf>,
    pub(crate) search_dir: PathBuf,
    pub(crate) extension: String,
    pub(crate) output: PathBuf,
    pub(crate) rate: FrameRate,
    pub(crate) pause: Duration,
    pub(crate) loop_count: u32,
    pub(crate) delete: bool,
    pub(crate) encoder: String,
    pub(crate) delay_unit: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            search_dir: PathBuf::from("."),
            extension: "xwd".into(),
            output: PathBuf::from("out.gif"),
            rate: FrameRate::new(25.0),
            pause: Duration::from_secs(2),
            loop_count: 0,
            delete: false,
            encoder: "convert".into(),
            delay_unit: Duration::from_micros(100),
        }
    }
}

impl Config {
    /// Sets the input images explicitly.
    ///
    /// If no inputs are given, all files in the search directory with the configured extension
    /// are used.
    pub fn inputs(self, inputs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            ..self
        }
    }

    /// Sets the directory that is scanned when no explicit inputs are given.
    pub fn search_dir(self, dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: dir.into(),
            ..self
        }
    }

    /// Sets the file extension (without the dot) of images to pick up from the search directory.
    pub fn extension(self, extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..self
        }
    }

    pub fn output(self, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..self
        }
    }

    /// Sets the frame rate the recording is resampled at.
    #[inline]
    pub fn rate(mut self, rate: FrameRate) -> Self {
        self.rate = rate;
        self
    }

    /// Sets how long the last frame stays on screen before the animation loops.
    #[inline]
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Sets the number of times the animation plays. 0 loops forever.
    #[inline]
    pub fn loop_count(mut self, loop_count: u32) -> Self {
        self.loop_count = loop_count;
        self
    }

    /// Selects whether the input images are deleted after a successful conversion.
    #[inline]
    pub fn delete(mut self, delete: bool) -> Self {
        self.delete = delete;
        self
    }

    /// Sets the compositor program that assembles the GIF.
    pub fn encoder(self, encoder: impl Into<String>) -> Self {
        Self {
            encoder: encoder.into(),
            ..self
        }
    }

    /// Sets the duration that one unit of the delay encoded in input filenames stands for.
    #[inline]
    pub fn delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.inputs.is_empty());
        assert_eq!(config.extension, "xwd");
        assert_eq!(config.output, PathBuf::from("out.gif"));
        assert_eq!(config.rate, FrameRate::new(25.0));
        assert_eq!(config.pause, Duration::from_secs(2));
        assert_eq!(config.loop_count, 0);
        assert!(!config.delete);
        assert_eq!(config.encoder, "convert");
        assert_eq!(config.delay_unit, Duration::from_micros(100));
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .inputs([PathBuf::from("0_0.png")])
            .rate(FrameRate::new(10.0))
            .loop_count(3)
            .delete(true)
            .output("demo.gif");
        assert_eq!(config.inputs, [PathBuf::from("0_0.png")]);
        assert_eq!(config.rate.fps(), 10.0);
        assert_eq!(config.loop_count, 3);
        assert!(config.delete);
        assert_eq!(config.output, PathBuf::from("demo.gif"));
    }
}
