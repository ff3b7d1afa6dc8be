//! Input frames and recording sessions.

use std::{slice, time::Duration, vec};

use crate::{rate::FrameRate, sample, EncodedFrame, SampledSequence};

/// A recorded frame: an identifier for the source image and how long it was displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<I> {
    id: I,
    duration: Duration,
}

impl<I> Frame<I> {
    /// Creates a frame that was shown for `duration` before the next frame replaced it.
    pub fn new(id: I, duration: Duration) -> Self {
        Self { id, duration }
    }

    #[inline]
    pub fn id(&self) -> &I {
        &self.id
    }

    #[inline]
    pub fn into_id(self) -> I {
        self.id
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// An ordered sequence of [`Frame`]s making up one recording session.
///
/// Sequence order is display order; frames are never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence<I> {
    frames: Vec<Frame<I>>,
}

impl<I> FrameSequence<I> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Appends a frame to the end of the sequence.
    pub fn push(&mut self, frame: Frame<I>) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame<I>] {
        &self.frames
    }

    pub fn iter(&self) -> slice::Iter<'_, Frame<I>> {
        self.frames.iter()
    }

    /// Returns the sum of all frame durations.
    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.duration).sum()
    }
}

impl<I: Clone> FrameSequence<I> {
    /// Resamples this sequence onto the uniform grid of `rate`.
    ///
    /// See [`subsample`](crate::subsample) for details.
    pub fn subsample(&self, rate: FrameRate) -> SampledSequence<I> {
        sample::subsample(self.frames.iter().cloned(), rate)
    }

    /// Resamples this sequence and derives GIF frame delays from the result.
    ///
    /// Equivalent to `self.subsample(rate).encode()`.
    pub fn subsample_for_encoding(&self, rate: FrameRate) -> Vec<EncodedFrame<I>> {
        self.subsample(rate).encode()
    }
}

impl<I> Default for FrameSequence<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> FromIterator<Frame<I>> for FrameSequence<I> {
    fn from_iter<T: IntoIterator<Item = Frame<I>>>(iter: T) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<I> Extend<Frame<I>> for FrameSequence<I> {
    fn extend<T: IntoIterator<Item = Frame<I>>>(&mut self, iter: T) {
        self.frames.extend(iter);
    }
}

impl<I> IntoIterator for FrameSequence<I> {
    type Item = Frame<I>;
    type IntoIter = vec::IntoIter<Frame<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a FrameSequence<I> {
    type Item = &'a Frame<I>;
    type IntoIter = slice::Iter<'a, Frame<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_duration() {
        let mut seq = FrameSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.total_duration(), Duration::ZERO);

        seq.push(Frame::new(0, Duration::from_micros(500)));
        seq.extend([
            Frame::new(1, Duration::from_micros(1500)),
            Frame::new(2, Duration::from_micros(0)),
        ]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.total_duration(), Duration::from_micros(2000));
        assert_eq!(
            seq.iter().map(|f| *f.id()).collect::<Vec<_>>(),
            [0, 1, 2],
        );
    }
}
