//! Chart configuration handed to the renderer.
//!
//! Stable parts of the plotly figure schema are modeled as serde structs;
//! the heterogeneous argument lists of animate calls use `serde_json::Value`.

use crate::oscillation::{FrequencyGroup, Sweep};
use crate::utils::consts::{
    CHART_TITLE, MARKER_COLOR, MARKER_SIZE, PLAY_FRAME_DURATION_MS, SLIDER_BASE_DURATION_MS,
    SLIDER_PAD_TOP, SLIDER_VALUE_PREFIX, SWEEP_FREQ_MIN, TITLE_FONT_FAMILY, TITLE_FONT_SIZE,
    TITLE_FONT_WEIGHT, X_AXIS_RANGE, Y_AXIS_RANGE,
};
use serde::Serialize;
use serde_json::{Value, json};

/// Marker style of the oscillating point
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: u32,
    pub color: &'static str,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            size: MARKER_SIZE,
            color: MARKER_COLOR,
        }
    }
}

/// Scatter trace holding the point at one instant
#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub marker: Marker,
}

impl Scatter {
    /// Single marker at `(x, 0)`
    pub fn point(x: f64) -> Self {
        Self {
            x: vec![x],
            y: vec![0.0],
            mode: "markers",
            marker: Marker::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub size: u32,
    pub family: &'static str,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub showticklabels: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub plot_bgcolor: &'static str,
    pub sliders: Vec<Slider>,
    pub updatemenus: Vec<UpdateMenu>,
}

/// One precomputed visual snapshot, named so slider steps can replay it
#[derive(Debug, Clone, Serialize)]
pub struct AnimationFrame {
    pub data: Vec<Scatter>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderStep {
    pub method: &'static str,
    pub args: Value,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub active: usize,
    pub currentvalue: Value,
    pub pad: Value,
    pub steps: Vec<SliderStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub method: &'static str,
    pub args: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub menu_type: &'static str,
    pub showactive: bool,
    pub buttons: Vec<Button>,
}

/// Complete chart configuration: initial trace, layout with controls, and
/// every precomputed animation frame
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Scatter>,
    pub layout: Layout,
    pub frames: Vec<AnimationFrame>,
}

/// Slider step playing the frame group of one frequency.
/// Faster oscillations get shorter per-frame durations (truncated, as ms).
fn slider_step(group: &FrequencyGroup) -> SliderStep {
    let duration = (SLIDER_BASE_DURATION_MS / group.frequency) as u64;
    SliderStep {
        method: "animate",
        args: json!([
            group.frame_names,
            {
                "frame": {"duration": duration, "redraw": true},
                "mode": "immediate"
            }
        ]),
        label: format!("{}", group.frequency),
    }
}

/// Frequency slider over the sweep groups, starting on the lowest frequency
pub fn build_slider(groups: &[FrequencyGroup]) -> Slider {
    let active = groups
        .iter()
        .position(|g| g.frequency == SWEEP_FREQ_MIN)
        .unwrap_or(0);

    Slider {
        active,
        currentvalue: json!({"prefix": SLIDER_VALUE_PREFIX}),
        pad: json!({"t": SLIDER_PAD_TOP}),
        steps: groups.iter().map(slider_step).collect(),
    }
}

/// Play / Pause button pair
fn play_pause_menu() -> UpdateMenu {
    UpdateMenu {
        menu_type: "buttons",
        showactive: false,
        buttons: vec![
            Button {
                label: "Play",
                method: "animate",
                args: json!([
                    null,
                    {
                        "frame": {"duration": PLAY_FRAME_DURATION_MS, "redraw": true},
                        "fromcurrent": true
                    }
                ]),
            },
            Button {
                label: "Pause",
                method: "animate",
                args: json!([[null], {"frame": null, "mode": "immediate"}]),
            },
        ],
    }
}

/// Assemble the full figure from sweep output: the numeric results come in,
/// a renderer-ready configuration goes out.
pub fn build_figure(sweep: &Sweep) -> Figure {
    let frames = sweep
        .frames
        .iter()
        .map(|f| AnimationFrame {
            data: vec![Scatter::point(f.position)],
            name: f.name.clone(),
        })
        .collect();

    Figure {
        data: vec![Scatter::point(0.0)],
        layout: Layout {
            title: Title {
                text: CHART_TITLE,
                font: Font {
                    size: TITLE_FONT_SIZE,
                    family: TITLE_FONT_FAMILY,
                    weight: TITLE_FONT_WEIGHT,
                },
            },
            xaxis: Axis {
                range: X_AXIS_RANGE,
                showticklabels: false,
            },
            yaxis: Axis {
                range: Y_AXIS_RANGE,
                showticklabels: false,
            },
            showlegend: false,
            plot_bgcolor: "white",
            sliders: vec![build_slider(&sweep.groups)],
            updatemenus: vec![play_pause_menu()],
        },
        frames,
    }
}
