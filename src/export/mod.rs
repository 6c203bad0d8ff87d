//! Serialization of the figure into a single interactive HTML document.

use crate::figure::Figure;
use crate::utils::consts::{CHART_DIV_ID, CHART_TITLE, PLOTLY_JS_URL};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Render the figure as a standalone page: plotly.js script tag, one chart
/// container, and a bootstrap script that registers the precomputed frames.
pub fn render_html(figure: &Figure) -> Result<String, String> {
    let figure_json = serde_json::to_string(figure)
        .map_err(|e| format!("Figure serialization failed: {}", e))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{plotly_src}"></script>
</head>
<body>
<div id="{div_id}"></div>
<script>
var figure = {figure_json};
Plotly.newPlot("{div_id}", figure.data, figure.layout).then(function () {{
    Plotly.addFrames("{div_id}", figure.frames);
}});
</script>
</body>
</html>
"#,
        title = CHART_TITLE,
        plotly_src = PLOTLY_JS_URL,
        div_id = CHART_DIV_ID,
        figure_json = figure_json,
    ))
}

/// Render and write the document in one scoped pass; any failure aborts the
/// export and surfaces to the caller.
pub fn write_html(figure: &Figure, path: &Path) -> Result<(), String> {
    let html = render_html(figure)?;

    let file =
        File::create(path).map_err(|e| format!("Cannot create {}: {}", path.display(), e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .map_err(|e| format!("Write to {} failed: {}", path.display(), e))?;
    writer
        .flush()
        .map_err(|e| format!("Write to {} failed: {}", path.display(), e))?;

    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::build_figure;
    use crate::oscillation::run_sweep;

    fn small_figure() -> Figure {
        build_figure(&run_sweep(1.0, 1, |_| {}).unwrap())
    }

    #[test]
    fn rendered_page_embeds_figure_and_bootstrap() {
        let html = render_html(&small_figure()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_JS_URL));
        assert!(html.contains(r#"<div id="oscillating-point">"#));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("Plotly.addFrames"));
        assert!(html.contains("freq_1_frame_0"));
        assert!(html.contains("Vestibular Rehab: Oscillating Point"));
    }

    #[test]
    fn embedded_figure_json_parses_back() {
        let html = render_html(&small_figure()).unwrap();
        let start = html.find("var figure = ").unwrap() + "var figure = ".len();
        let end = html[start..].find(";\n").unwrap() + start;
        let value: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(value["frames"].as_array().unwrap().len(), 1000);
    }

    #[test]
    fn write_html_creates_the_document_on_disk() {
        let path = std::env::temp_dir().join("oscillating_point_export_test.html");
        write_html(&small_figure(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Plotly.newPlot"));
        std::fs::remove_file(&path).unwrap();
    }
}
