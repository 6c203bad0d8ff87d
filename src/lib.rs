//! Generator for the oscillating-point vestibular rehab visualization:
//! sinusoidal frame sampling, chart configuration, and HTML export.

pub mod export;
pub mod figure;
pub mod oscillation;
pub mod ui;
pub mod utils;
