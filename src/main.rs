use oscillating_point_rs::export::write_html;
use oscillating_point_rs::figure::build_figure;
use oscillating_point_rs::oscillation::run_sweep;
use oscillating_point_rs::ui::print_banner;
use oscillating_point_rs::ui::progress::{ProgressManager, templates};
use oscillating_point_rs::utils::consts::{
    DEFAULT_AMPLITUDE, DEFAULT_DURATION_FACTOR, OUTPUT_FILENAME, SWEEP_FREQ_MAX, SWEEP_FREQ_MIN,
    SWEEP_STEPS,
};
use oscillating_point_rs::utils::logging::init_logging;
use std::path::Path;

fn main() {
    init_logging();
    print_banner();

    tracing::info!(
        "Sweeping {} frequencies in [{}, {}] (amplitude {}, duration factor {})",
        SWEEP_STEPS,
        SWEEP_FREQ_MIN,
        SWEEP_FREQ_MAX,
        DEFAULT_AMPLITUDE,
        DEFAULT_DURATION_FACTOR
    );

    let progress_manager = ProgressManager::new();
    if let Err(err) =
        progress_manager.create_bar("sweep", SWEEP_STEPS as u64, templates::SWEEP, "")
    {
        tracing::warn!("Progress bar unavailable: {}", err);
    }

    let sweep = match run_sweep(DEFAULT_AMPLITUDE, DEFAULT_DURATION_FACTOR, |frequency| {
        let _ = progress_manager.set_message("sweep", &format!("f = {}", frequency));
        let _ = progress_manager.inc("sweep", 1);
    }) {
        Ok(sweep) => sweep,
        Err(err) => {
            tracing::error!("Frame generation failed: {}", err);
            std::process::exit(1);
        }
    };
    progress_manager.finish_all();

    tracing::info!(
        "Generated {} frames across {} frequency groups",
        sweep.frames.len(),
        sweep.groups.len()
    );

    let figure = build_figure(&sweep);

    if let Err(err) = write_html(&figure, Path::new(OUTPUT_FILENAME)) {
        eprintln!("Export failed: {}", err);
        std::process::exit(1);
    }

    println!(
        "✅ Visualization saved as '{}'. Open this file in a web browser to view it.",
        OUTPUT_FILENAME
    );
}
