// File: crates/aoc-charts/src/cli.rs
// Summary: Optional command-line flags. With no arguments the chart opens in a window.

use std::path::{Path, PathBuf};

use chart_core::{theme, Theme};
use chart_core::types::{HEIGHT, WIDTH};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UsageError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown theme '{0}' (available: classic, xkcd, dark)")]
    UnknownTheme(String),
    #[error("invalid size '{0}', expected WIDTHxHEIGHT such as 1024x640")]
    InvalidSize(String),
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Where the rendered chart goes. The file format follows the extension.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Window,
    Png(PathBuf),
    Svg(PathBuf),
}

impl Output {
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if is_svg { Output::Svg(path.to_path_buf()) } else { Output::Png(path.to_path_buf()) }
    }
}

#[derive(Clone, Debug)]
pub struct Args {
    pub output: Output,
    pub theme: Theme,
    pub width: i32,
    pub height: i32,
    pub help: bool,
}

pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} [--out <file.png|file.svg>] [--theme classic|xkcd|dark] [--size WxH]\n\
         \n\
         Without --out the chart is shown in a window; close it to exit."
    )
}

/// Parse flags (program name already skipped). Accepts `--flag value`, `--flag=value` and `-o=value`.
pub fn parse_args<I>(args: I, default_theme: Theme) -> Result<Args, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Args {
        output: Output::Window,
        theme: default_theme,
        width: WIDTH,
        height: HEIGHT,
        help: false,
    };

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with('-') => (f.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &'static str| inline.clone().or_else(|| it.next()).ok_or(UsageError::MissingValue(name));
        match flag.as_str() {
            "-h" | "--help" => out.help = true,
            "-o" | "--out" => out.output = Output::for_path(value("--out")?),
            "--theme" => {
                let name = value("--theme")?;
                out.theme = theme::find(&name).ok_or(UsageError::UnknownTheme(name))?;
            }
            "--size" => {
                let raw = value("--size")?;
                let (w, h) = parse_size(&raw).ok_or(UsageError::InvalidSize(raw))?;
                out.width = w;
                out.height = h;
            }
            _ => return Err(UsageError::Unexpected(arg)),
        }
    }
    Ok(out)
}

fn parse_size(raw: &str) -> Option<(i32, i32)> {
    let (w, h) = raw.split_once(['x', 'X'])?;
    let w: i32 = w.trim().parse().ok()?;
    let h: i32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}
