// File: crates/aoc-charts/tests/cli.rs
// Purpose: Flag parsing for the chart programs.

use std::path::PathBuf;

use aoc_charts::cli::{parse_args, usage, Output, UsageError};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::Theme;

fn parse(args: &[&str]) -> Result<aoc_charts::cli::Args, UsageError> {
    parse_args(args.iter().map(|s| s.to_string()), Theme::xkcd())
}

#[test]
fn no_arguments_opens_a_window() {
    let args = parse(&[]).unwrap();
    assert_eq!(args.output, Output::Window);
    assert_eq!(args.theme.name, "xkcd");
    assert_eq!((args.width, args.height), (WIDTH, HEIGHT));
    assert!(!args.help);
}

#[test]
fn out_extension_picks_format() {
    let png = parse(&["--out", "rank.png"]).unwrap();
    assert_eq!(png.output, Output::Png(PathBuf::from("rank.png")));

    let svg = parse(&["-o", "time.SVG"]).unwrap();
    assert_eq!(svg.output, Output::Svg(PathBuf::from("time.SVG")));

    let bare = parse(&["--out", "chart"]).unwrap();
    assert_eq!(bare.output, Output::Png(PathBuf::from("chart")));
}

#[test]
fn equals_form_is_accepted() {
    let args = parse(&["--theme=dark", "--size=800x500", "--out=a.svg"]).unwrap();
    assert_eq!(args.theme.name, "dark");
    assert_eq!((args.width, args.height), (800, 500));
    assert_eq!(args.output, Output::Svg(PathBuf::from("a.svg")));
}

#[test]
fn short_flag_accepts_equals_form() {
    let args = parse(&["-o=chart.png"]).unwrap();
    assert_eq!(args.output, Output::Png(PathBuf::from("chart.png")));
}

#[test]
fn unknown_theme_is_a_usage_error() {
    let err = parse(&["--theme", "neon"]).unwrap_err();
    assert_eq!(err, UsageError::UnknownTheme("neon".into()));
    assert!(err.to_string().contains("classic, xkcd, dark"));
}

#[test]
fn bad_sizes_are_rejected() {
    for raw in ["800", "0x600", "axb", "800x-1"] {
        let err = parse(&["--size", raw]).unwrap_err();
        assert_eq!(err, UsageError::InvalidSize(raw.into()));
    }
}

#[test]
fn missing_value_and_unknown_flag() {
    assert_eq!(parse(&["--out"]).unwrap_err(), UsageError::MissingValue("--out"));
    assert_eq!(parse(&["--verbose"]).unwrap_err(), UsageError::Unexpected("--verbose".into()));
}

#[test]
fn help_flag_and_usage_text() {
    assert!(parse(&["--help"]).unwrap().help);
    assert!(parse(&["-h"]).unwrap().help);
    let text = usage("aoc-rank");
    assert!(text.starts_with("usage: aoc-rank"));
    assert!(text.contains("--size WxH"));
}
