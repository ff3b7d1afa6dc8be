//! Temporal resampling of irregularly timed frame sequences.
//!
//! A recording made of still images is rarely evenly spaced: every frame carries its own display
//! duration. This crate maps such a sequence onto a uniform timeline at a target [`FrameRate`] and
//! derives per-frame delays for animation formats that count time in centiseconds (GIF).
//!
//! # The sampling grid
//!
//! The output timeline is divided into cells that are one sampling period wide. Cells are
//! *centered* on multiples of the period, so cell `n` covers `[n*p - p/2, n*p + p/2)`. Every input
//! frame is placed into the cell its cumulative timestamp falls into. When several frames land in
//! the same cell, the one closest to the cell center is kept; on a tie, the earlier one stays.
//!
//! ```
//! use std::time::Duration;
//! use ttyanim_resample::{Frame, FrameRate, FrameSequence};
//!
//! let seq: FrameSequence<&str> = [
//!     Frame::new("a", Duration::ZERO),
//!     Frame::new("b", Duration::from_millis(40)),
//!     Frame::new("c", Duration::from_millis(80)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let encoded = seq.subsample_for_encoding(FrameRate::new(25.0));
//! let delays = encoded.iter().map(|f| f.delay_centis()).collect::<Vec<_>>();
//! assert_eq!(delays, [0, 4, 8]);
//! ```

mod frame;
mod grid;
mod rate;
mod sample;

pub use frame::{Frame, FrameSequence};
pub use grid::{grid_placement, GridPlacement};
pub use rate::{FrameRate, ParseFrameRateError};
pub use sample::{subsample, EncodedFrame, Sample, SampledSequence};
