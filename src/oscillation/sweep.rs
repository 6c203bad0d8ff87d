use super::{Frame, OscillationParameters, generate_frames};
use crate::utils::consts::{SWEEP_FREQ_MAX, SWEEP_FREQ_MIN, SWEEP_STEPS};
use tracing::debug;

/// Frame names belonging to one slider frequency
#[derive(Debug, Clone)]
pub struct FrequencyGroup {
    pub frequency: f64,
    pub frame_names: Vec<String>,
}

/// Accumulated output of the frequency sweep: every frame in generation
/// order, plus the per-frequency name groups the slider steps play.
#[derive(Debug)]
pub struct Sweep {
    pub frames: Vec<Frame>,
    pub groups: Vec<FrequencyGroup>,
}

/// Slider frequencies: `SWEEP_STEPS` evenly spaced values in
/// `[SWEEP_FREQ_MIN, SWEEP_FREQ_MAX]`, endpoints included
pub fn frequency_values() -> Vec<f64> {
    let step = (SWEEP_FREQ_MAX - SWEEP_FREQ_MIN) / (SWEEP_STEPS - 1) as f64;
    (0..SWEEP_STEPS)
        .map(|i| SWEEP_FREQ_MIN + step * i as f64)
        .collect()
}

/// Run the generator once per slider frequency.
///
/// `on_frequency_done` is called after each completed frequency so the
/// caller can drive a progress display without the numeric code knowing
/// about it.
pub fn run_sweep(
    amplitude: f64,
    duration_factor: usize,
    mut on_frequency_done: impl FnMut(f64),
) -> Result<Sweep, String> {
    let mut sweep = Sweep {
        frames: Vec::new(),
        groups: Vec::new(),
    };

    for frequency in frequency_values() {
        let params = OscillationParameters::new(amplitude, frequency, duration_factor);
        let frames = generate_frames(&params)?;
        debug!("Generated {} frames for frequency {}", frames.len(), frequency);

        let frame_names = frames.iter().map(|f| f.name.clone()).collect();
        sweep.groups.push(FrequencyGroup {
            frequency,
            frame_names,
        });
        sweep.frames.extend(frames);

        on_frequency_done(frequency);
    }

    Ok(sweep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sweep_covers_one_through_ten() {
        let values = frequency_values();
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], 1.0);
        assert_eq!(values[9], 10.0);
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sweep_produces_one_disjoint_group_per_frequency() {
        let sweep = run_sweep(1.0, 1, |_| {}).unwrap();
        assert_eq!(sweep.groups.len(), 10);
        assert_eq!(sweep.frames.len(), 10 * 100);

        let mut seen: HashSet<&str> = HashSet::new();
        for group in &sweep.groups {
            assert_eq!(group.frame_names.len(), 100);
            for name in &group.frame_names {
                assert!(seen.insert(name), "name {} appears in two groups", name);
            }
        }
    }

    #[test]
    fn sweep_reports_progress_in_frequency_order() {
        let mut reported = Vec::new();
        run_sweep(1.0, 1, |f| reported.push(f)).unwrap();
        assert_eq!(reported, frequency_values());
    }

    #[test]
    fn full_size_sweep_groups_hold_ten_thousand_names() {
        let sweep = run_sweep(1.0, 100, |_| {}).unwrap();
        assert_eq!(sweep.groups.len(), 10);
        for group in &sweep.groups {
            assert_eq!(group.frame_names.len(), 10_000);
        }
        assert_eq!(sweep.frames.len(), 100_000);
    }
}
