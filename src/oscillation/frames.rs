use super::OscillationParameters;

/// One rendered snapshot of the oscillating point
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Unique within the whole sweep: frequency plus sequential index
    pub name: String,
    /// Horizontal displacement at this instant
    pub position: f64,
}

/// Name shared between a generated frame and the slider step that plays it
pub fn frame_name(frequency: f64, index: usize) -> String {
    format!("freq_{}_frame_{}", frequency, index)
}

/// Evenly spaced sample instants spanning `[0, time_span]`, both endpoints included
pub fn sample_times(params: &OscillationParameters) -> Vec<f64> {
    let n = params.sample_count();
    let span = params.time_span();
    (0..n).map(|i| span * i as f64 / (n - 1) as f64).collect()
}

/// Generate the ordered frame sequence for one parameter set.
///
/// Pure computation: exactly `duration_factor * 100` frames, index order
/// corresponding to increasing time, `position = amplitude * sin(frequency * t)`.
pub fn generate_frames(params: &OscillationParameters) -> Result<Vec<Frame>, String> {
    params.validate()?;

    let frames = sample_times(params)
        .into_iter()
        .enumerate()
        .map(|(i, t)| Frame {
            name: frame_name(params.frequency, i),
            position: params.amplitude * (params.frequency * t).sin(),
        })
        .collect();

    Ok(frames)
}
