use crate::utils::consts::{
    DEFAULT_AMPLITUDE, DEFAULT_DURATION_FACTOR, DEFAULT_FREQUENCY, SAMPLES_PER_FACTOR,
    TIME_SPAN_FACTOR,
};

/// Parameters for one oscillation animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillationParameters {
    /// Maximum displacement of the point from center
    pub amplitude: f64,
    /// Oscillation rate; must be positive (it divides the time span)
    pub frequency: f64,
    /// Scales both the sample count and the sampled time span
    pub duration_factor: usize,
}

impl Default for OscillationParameters {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            duration_factor: DEFAULT_DURATION_FACTOR,
        }
    }
}

impl OscillationParameters {
    pub fn new(amplitude: f64, frequency: f64, duration_factor: usize) -> Self {
        Self {
            amplitude,
            frequency,
            duration_factor,
        }
    }

    /// Reject bad parameter sets before any frame is computed
    pub fn validate(&self) -> Result<(), String> {
        if !self.amplitude.is_finite() {
            return Err(format!(
                "Invalid amplitude {}: must be finite",
                self.amplitude
            ));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(format!(
                "Invalid frequency {}: must be positive and finite",
                self.frequency
            ));
        }
        if self.duration_factor == 0 {
            return Err("Invalid duration factor 0: must be positive".to_string());
        }
        Ok(())
    }

    /// Number of frames produced for these parameters
    pub fn sample_count(&self) -> usize {
        self.duration_factor * SAMPLES_PER_FACTOR
    }

    /// Upper end of the sampled time span `[0, duration_factor * 10 / frequency]`
    pub fn time_span(&self) -> f64 {
        self.duration_factor as f64 * TIME_SPAN_FACTOR / self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_hardcoded_run_parameters() {
        let params = OscillationParameters::default();
        assert_eq!(params.amplitude, 1.0);
        assert_eq!(params.frequency, 4.0);
        assert_eq!(params.duration_factor, 100);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let params = OscillationParameters::new(1.0, 0.0, 100);
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_frequency_is_rejected() {
        let params = OscillationParameters::new(1.0, -2.5, 100);
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(
            OscillationParameters::new(f64::NAN, 1.0, 1)
                .validate()
                .is_err()
        );
        assert!(
            OscillationParameters::new(1.0, f64::INFINITY, 1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn zero_duration_factor_is_rejected() {
        let params = OscillationParameters::new(1.0, 1.0, 0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn sample_count_and_span_scale_with_duration_factor() {
        let params = OscillationParameters::new(1.0, 2.0, 3);
        assert_eq!(params.sample_count(), 300);
        assert_eq!(params.time_span(), 15.0);
    }
}
