// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNG and SVG.

use chart_core::{CategoryAxis, Chart, ChartConfig, RenderOptions, Series, Theme};

fn two_part_chart() -> Chart {
    Chart::new(
        CategoryAxis::numbered(5),
        vec![
            Series::new("Part One", vec![24.0, 3.25, 7.75, 9.52, 3.0]),
            Series::new("Part Two", vec![24.0, 3.25, 8.0, 16.25, 12.95]),
        ],
        ChartConfig::new("Completion")
            .x_label("Day")
            .y_label("Hours")
            .legend_title("Parts")
            .y_bounds(0.0, 25.0),
    )
    .expect("valid chart")
}

#[test]
fn render_smoke_png() {
    let chart = two_part_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let _ = std::fs::remove_file(&out);

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_svg() {
    let chart = two_part_chart();
    let opts = RenderOptions::default().with_theme(Theme::xkcd());
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    let _ = std::fs::remove_file(&out);

    chart.render_to_svg(&opts, &out).expect("svg render should succeed");
    let text = std::fs::read_to_string(&out).expect("svg written");
    assert!(text.contains("<svg"), "should be an SVG document");
}

#[test]
fn every_preset_renders() {
    let chart = two_part_chart();
    for theme in chart_core::theme::presets() {
        let opts = RenderOptions::default().with_theme(theme).with_size(320, 240);
        let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
        let img = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!((img.width(), img.height()), (320, 240), "theme {}", theme.name);
    }
}

#[test]
fn zero_sized_surface_is_a_backend_failure() {
    let chart = two_part_chart();
    let opts = RenderOptions::default().with_size(0, 0);
    let err = chart.render_to_png_bytes(&opts).expect_err("no surface");
    assert!(matches!(err, chart_core::ChartError::Backend(_)), "got {err:?}");
}
