// File: crates/chart-window/tests/headless.rs
// Purpose: Without a display server, `show` fails with a backend error instead of panicking.

#![cfg(all(unix, not(target_os = "macos")))]

use chart_core::{CategoryAxis, Chart, ChartConfig, ChartError, RenderOptions, Series};

#[test]
fn missing_display_is_a_backend_error() {
    std::env::remove_var("DISPLAY");
    std::env::remove_var("WAYLAND_DISPLAY");

    let chart = Chart::new(
        CategoryAxis::numbered(3),
        vec![Series::new("Part One", vec![1.0, 2.0, 3.0])],
        ChartConfig::new("Headless"),
    )
    .expect("valid chart");

    let err = chart_window::show(&chart, &RenderOptions::default()).expect_err("no display");
    match err {
        ChartError::Backend(msg) => assert!(msg.contains("no display"), "{msg}"),
        other => panic!("expected Backend, got {other:?}"),
    }
}
