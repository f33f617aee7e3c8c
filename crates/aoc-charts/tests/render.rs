// File: crates/aoc-charts/tests/render.rs
// Purpose: End-to-end file output through `run`.

use aoc_charts::cli::{parse_args, Output};
use aoc_charts::{data, run};
use chart_core::Theme;

fn tmp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("aoc-charts-{}-{name}", std::process::id()))
}

#[test]
fn run_writes_png_and_svg() -> anyhow::Result<()> {
    let png = tmp_path("rank.png");
    let svg = tmp_path("time.svg");

    let args = parse_args(
        ["--out".to_string(), png.display().to_string(), "--size".into(), "400x300".into()],
        Theme::classic(),
    )?;
    assert!(matches!(args.output, Output::Png(_)));
    run(data::rank_chart, &args)?;
    let bytes = std::fs::read(&png)?;
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let args = parse_args(["--out".to_string(), svg.display().to_string()], Theme::xkcd())?;
    run(data::time_chart, &args)?;
    let text = std::fs::read_to_string(&svg)?;
    assert!(text.contains("<svg"));

    let _ = std::fs::remove_file(png);
    let _ = std::fs::remove_file(svg);
    Ok(())
}
