//! Randomized checks of the sampling invariants.

use std::time::Duration;

use ttyanim_resample::{Frame, FrameRate, FrameSequence};

const RATES: &[f64] = &[10.0, 12.5, 20.0, 25.0, 30.0, 50.0];
const ROUNDS: usize = 500;

fn random_sequence(rng: &mut fastrand::Rng) -> FrameSequence<usize> {
    let len = rng.usize(1..60);
    (0..len)
        .map(|i| {
            // Mix of bursts, typical frame times and long pauses.
            let us = match rng.u8(0..10) {
                0..=3 => rng.u64(0..5_000),
                4..=8 => rng.u64(5_000..150_000),
                _ => rng.u64(150_000..3_000_000),
            };
            Frame::new(i, Duration::from_micros(us))
        })
        .collect()
}

fn cumulative_times(seq: &FrameSequence<usize>) -> Vec<Duration> {
    seq.iter()
        .scan(Duration::ZERO, |acc, f| {
            *acc += f.duration();
            Some(*acc)
        })
        .collect()
}

#[test]
fn indices_strictly_increase() {
    let mut rng = fastrand::Rng::with_seed(0x7474_7961);
    for _ in 0..ROUNDS {
        let seq = random_sequence(&mut rng);
        let rate = FrameRate::new(RATES[rng.usize(..RATES.len())]);
        let sampled = seq.subsample(rate);

        assert!(!sampled.is_empty());
        assert!(sampled.len() <= seq.len());
        for pair in sampled.samples().windows(2) {
            assert!(pair[0].index() < pair[1].index());
            assert!(pair[0].id() < pair[1].id());
        }
    }
}

#[test]
fn winner_is_earliest_closest_frame_of_its_cell() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..ROUNDS {
        let seq = random_sequence(&mut rng);
        let rate = FrameRate::new(RATES[rng.usize(..RATES.len())]);
        let placements = cumulative_times(&seq)
            .into_iter()
            .map(|t| rate.place(t))
            .collect::<Vec<_>>();
        let sampled = seq.subsample(rate);

        for sample in sampled.samples() {
            let mut best: Option<usize> = None;
            for (i, p) in placements.iter().enumerate() {
                if p.index() != sample.index() {
                    continue;
                }
                match best {
                    Some(b) if placements[b].distance_us() <= p.distance_us() => {}
                    _ => best = Some(i),
                }
            }
            assert_eq!(Some(*sample.id()), best);
            assert_eq!(sample.placement(), placements[*sample.id()]);
        }

        // Every occupied cell is represented.
        let mut cells = placements.iter().map(|p| p.index()).collect::<Vec<_>>();
        cells.dedup();
        assert_eq!(
            cells,
            sampled.samples().iter().map(|s| s.index()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn encoded_delays_follow_gaps() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let seq = random_sequence(&mut rng);
        let rate = FrameRate::new(RATES[rng.usize(..RATES.len())]);
        let sampled = seq.subsample(rate);
        let encoded = seq.subsample_for_encoding(rate);

        assert_eq!(encoded.len(), sampled.len());
        assert_eq!(encoded[0].delay_centis(), 0);
        for (frame, sample) in encoded.iter().zip(sampled.samples()) {
            assert_eq!(frame.id(), sample.id());
        }

        let min_delay = rate.centis_per_sample() as u32;
        for (i, frame) in encoded.iter().enumerate().skip(1) {
            let gap = sampled.samples()[i].index() - sampled.samples()[i - 1].index();
            assert!(frame.delay_centis() >= min_delay);
            assert!(frame.delay_centis() > 0);
            assert_eq!(
                frame.delay_centis(),
                (gap as f64 * rate.centis_per_sample()) as u32
            );
        }
    }
}

#[test]
fn repeated_calls_agree() {
    let mut rng = fastrand::Rng::with_seed(1234);
    let seq = random_sequence(&mut rng);
    let rate = FrameRate::new(25.0);
    assert_eq!(seq.subsample(rate), seq.subsample(rate));
    assert_eq!(
        seq.subsample_for_encoding(rate),
        seq.subsample_for_encoding(rate)
    );
}
