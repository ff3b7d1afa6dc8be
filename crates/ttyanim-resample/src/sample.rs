//! Sampling frames onto the grid and deriving encoder delays.

use itertools::Itertools;

use crate::{
    grid::{grid_placement, saturating_micros},
    Frame, FrameRate, GridPlacement,
};

/// A frame that was selected to represent one cell of the sampling grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<I> {
    id: I,
    placement: GridPlacement,
}

impl<I> Sample<I> {
    #[inline]
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Returns the index of the grid cell this sample occupies.
    #[inline]
    pub fn index(&self) -> u64 {
        self.placement.index()
    }

    /// Returns the signed distance between the source frame's timestamp and the cell center.
    #[inline]
    pub fn offset_us(&self) -> f64 {
        self.placement.offset_us()
    }

    #[inline]
    pub fn placement(&self) -> GridPlacement {
        self.placement
    }
}

/// The result of [`subsample`]: one [`Sample`] per occupied grid cell, in increasing cell order.
///
/// Cells that no input frame landed in are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSequence<I> {
    rate: FrameRate,
    samples: Vec<Sample<I>>,
}

impl<I> SampledSequence<I> {
    /// Returns the frame rate the samples were taken at.
    #[inline]
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    #[inline]
    pub fn samples(&self) -> &[Sample<I>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Computes the delay (in centiseconds) preceding every sample.
    ///
    /// The first frame always gets a delay of 0. Every following frame gets the gap in grid cells
    /// to its predecessor, converted to centiseconds and truncated.
    pub fn encode(&self) -> Vec<EncodedFrame<I>>
    where
        I: Clone,
    {
        let centis = self.rate.centis_per_sample();
        let first = self.samples.first().map(|s| EncodedFrame::new(s.id.clone(), 0));
        let rest = self.samples.iter().tuple_windows::<(_, _)>().map(|(prev, next)| {
            let gap = next.index() - prev.index();
            EncodedFrame::new(next.id.clone(), (gap as f64 * centis) as u32)
        });
        first.into_iter().chain(rest).collect()
    }
}

/// A frame ready to be handed to an animation encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame<I> {
    id: I,
    delay_centis: u32,
}

impl<I> EncodedFrame<I> {
    pub fn new(id: I, delay_centis: u32) -> Self {
        Self { id, delay_centis }
    }

    #[inline]
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Returns the delay in centiseconds (1/100 s).
    #[inline]
    pub fn delay_centis(&self) -> u32 {
        self.delay_centis
    }

    pub fn set_delay_centis(&mut self, delay_centis: u32) {
        self.delay_centis = delay_centis;
    }
}

/// Maps a sequence of frames onto the uniform sampling grid of `rate`.
///
/// Frame durations are accumulated in order, and a frame's timestamp is the cumulative time
/// *including* its own duration. Every frame is placed into its grid cell (see
/// [`grid_placement`](crate::grid_placement)). Consecutive frames landing in the same cell compete
/// for it: a later frame replaces the accepted one only if it is strictly closer to the cell
/// center.
///
/// The result holds at most one sample per input frame, with strictly increasing cell indices.
/// Timestamps beyond `u64::MAX` microseconds saturate.
pub fn subsample<I, F>(frames: F, rate: FrameRate) -> SampledSequence<I>
where
    F: IntoIterator<Item = Frame<I>>,
{
    let period_us = rate.period_us();
    let mut cumulative_us: u64 = 0;
    let mut samples: Vec<Sample<I>> = Vec::new();
    let mut input_len = 0;

    for frame in frames {
        input_len += 1;
        cumulative_us = cumulative_us.saturating_add(saturating_micros(frame.duration()));
        let candidate = Sample {
            placement: grid_placement(cumulative_us, period_us),
            id: frame.into_id(),
        };

        match samples.last_mut() {
            Some(last) if last.index() == candidate.index() => {
                if candidate.placement.distance_us() < last.placement.distance_us() {
                    *last = candidate;
                }
            }
            _ => samples.push(candidate),
        }
    }

    log::trace!(
        "sampled {} frames into {} cells at {}",
        input_len,
        samples.len(),
        rate,
    );

    SampledSequence { rate, samples }
}
