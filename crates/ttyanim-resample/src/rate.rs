//! Target frame rates.

use std::{error::Error, fmt, num::ParseFloatError, str::FromStr, time::Duration};

use crate::grid::{grid_placement, saturating_micros, GridPlacement};

/// A sampling rate in frames per second.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FrameRate {
    fps: f64,
}

impl FrameRate {
    /// Creates a frame rate from a number of frames per second.
    ///
    /// # Panics
    ///
    /// This method will panic if `fps` is not a positive, finite number. Use
    /// [`FrameRate::try_new`] for values that have not been validated yet.
    pub fn new(fps: f64) -> Self {
        match Self::try_new(fps) {
            Some(rate) => rate,
            None => panic!("invalid frame rate {fps} (must be positive and finite)"),
        }
    }

    /// Creates a frame rate, returning [`None`] if `fps` is not positive and finite.
    pub fn try_new(fps: f64) -> Option<Self> {
        if fps.is_finite() && fps > 0.0 {
            Some(Self { fps })
        } else {
            None
        }
    }

    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Returns the sampling period in microseconds.
    ///
    /// This is generally not an integer (eg. 30 FPS has a period of 33333.3µs).
    #[inline]
    pub fn period_us(&self) -> f64 {
        1e6 / self.fps
    }

    /// Returns the length of one sampling period in centiseconds, the delay unit used by GIF.
    #[inline]
    pub fn centis_per_sample(&self) -> f64 {
        1e2 / self.fps
    }

    /// Places a cumulative timestamp onto the sampling grid of this frame rate.
    pub fn place(&self, cumulative: Duration) -> GridPlacement {
        grid_placement(saturating_micros(cumulative), self.period_us())
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FPS", self.fps)
    }
}

/// Error returned when parsing a [`FrameRate`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFrameRateError {
    Invalid(ParseFloatError),
    OutOfRange,
}

impl fmt::Display for ParseFrameRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid frame rate: {e}"),
            Self::OutOfRange => f.write_str("frame rate must be positive and finite"),
        }
    }
}

impl Error for ParseFrameRateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::OutOfRange => None,
        }
    }
}

impl FromStr for FrameRate {
    type Err = ParseFrameRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fps = s.trim().parse::<f64>().map_err(ParseFrameRateError::Invalid)?;
        Self::try_new(fps).ok_or(ParseFrameRateError::OutOfRange)
    }
}
