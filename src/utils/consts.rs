/// 日志级别（可被 RUST_LOG 覆盖）
pub const LOG_LEVEL: &str = "info";

/// Output document filename (written to the working directory)
pub const OUTPUT_FILENAME: &str = "oscillating_point.html";

// ============================================================================
// Oscillation Parameters
// ============================================================================

/// Default oscillation amplitude
pub const DEFAULT_AMPLITUDE: f64 = 1.0;

/// Default oscillation frequency
pub const DEFAULT_FREQUENCY: f64 = 4.0;

/// Default duration scaling factor
pub const DEFAULT_DURATION_FACTOR: usize = 100;

/// Frames generated per duration-factor unit
pub const SAMPLES_PER_FACTOR: usize = 100;

/// Time span per duration-factor unit, before dividing by frequency
pub const TIME_SPAN_FACTOR: f64 = 10.0;

// Frequency sweep (slider steps)
/// Lowest slider frequency
pub const SWEEP_FREQ_MIN: f64 = 1.0;

/// Highest slider frequency
pub const SWEEP_FREQ_MAX: f64 = 10.0;

/// Number of slider frequencies, spaced evenly across the sweep range
pub const SWEEP_STEPS: usize = 10;

// ============================================================================
// Chart Configuration
// ============================================================================

/// Chart title text
pub const CHART_TITLE: &str = "Vestibular Rehab: Oscillating Point";

/// Title font size
pub const TITLE_FONT_SIZE: u32 = 20;

/// Title font family
pub const TITLE_FONT_FAMILY: &str = "Times New Roman";

/// Title font weight
pub const TITLE_FONT_WEIGHT: u32 = 5;

/// Horizontal axis range
pub const X_AXIS_RANGE: [f64; 2] = [-2.0, 2.0];

/// Vertical axis range
pub const Y_AXIS_RANGE: [f64; 2] = [-0.5, 0.5];

/// Point marker size (px)
pub const MARKER_SIZE: u32 = 12;

/// Point marker color
pub const MARKER_COLOR: &str = "blue";

/// Slider step frame duration numerator (ms); divided by the step frequency
pub const SLIDER_BASE_DURATION_MS: f64 = 100.0;

/// Frame duration (ms) used by the Play button
pub const PLAY_FRAME_DURATION_MS: u64 = 100;

/// Slider top padding (px)
pub const SLIDER_PAD_TOP: u32 = 50;

/// Prefix shown before the current slider value
pub const SLIDER_VALUE_PREFIX: &str = "Frequency: ";

/// DOM id of the chart container in the exported page
pub const CHART_DIV_ID: &str = "oscillating-point";

/// Pinned plotly.js script source for the exported page
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
