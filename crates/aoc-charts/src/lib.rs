// File: crates/aoc-charts/src/lib.rs
// Summary: Shared entry point for the chart programs: logging, flags, output dispatch, exit codes.

pub mod cli;
pub mod data;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions, Theme};
use cli::{Args, Output};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Run a program that renders the chart produced by `build`.
/// Exit status: 0 on success, 1 on render failure, 2 on bad flags.
pub fn main_with(program: &str, build: fn() -> chart_core::Result<Chart>) -> ExitCode {
    init_logging();

    let args = match cli::parse_args(std::env::args().skip(1), Theme::xkcd()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::usage(program));
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", cli::usage(program));
        return ExitCode::SUCCESS;
    }

    match run(build, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{program} failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn run(build: fn() -> chart_core::Result<Chart>, args: &Args) -> Result<()> {
    let chart = build().context("invalid chart data")?;
    let opts = RenderOptions::default()
        .with_theme(args.theme)
        .with_size(args.width, args.height);
    info!(title = %chart.config().title, theme = args.theme.name, "rendering chart");

    match &args.output {
        Output::Window => chart_window::show(&chart, &opts).context("showing chart window")?,
        Output::Png(path) => chart
            .render_to_png(&opts, path)
            .with_context(|| format!("writing PNG to {}", path.display()))?,
        Output::Svg(path) => chart
            .render_to_svg(&opts, path)
            .with_context(|| format!("writing SVG to {}", path.display()))?,
    }
    Ok(())
}
