// File: crates/chart-core/src/theme.rs
// Summary: Explicit style presets (classic, xkcd-like sketch, dark) passed into each render.

use skia_safe as skia;

/// Hand-drawn stroke wobble. Seeded, so a given theme always draws the same wobble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sketch {
    /// Length in pixels of the pieces a stroke is broken into.
    pub segment: f32,
    /// Maximum perpendicular displacement in pixels.
    pub deviation: f32,
    /// Corner rounding applied after displacement; 0 keeps the jagged look.
    pub smoothing: f32,
    pub seed: u32,
}

impl Default for Sketch {
    fn default() -> Self {
        Self { segment: 8.0, deviation: 1.6, smoothing: 6.0, seed: 0x5eed }
    }
}

/// Matplotlib's "tab10" cycle.
pub const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

const SANS: &[&str] = &["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"];
const COMIC: &[&str] = &["xkcd", "xkcd Script", "Humor Sans", "Comic Neue", "Comic Sans MS", "DejaVu Sans", "sans-serif"];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub show_grid: bool,
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_frame: skia::Color,
    pub palette: [skia::Color; 10],
    pub line_width: f32,
    pub axis_width: f32,
    pub marker_radius: f32,
    pub font_families: &'static [&'static str],
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub sketch: Option<Sketch>,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::WHITE,
            plot_background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 230, 230, 235),
            show_grid: false,
            axis_line: skia::Color::BLACK,
            text: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame: skia::Color::from_argb(255, 204, 204, 204),
            palette: TAB10,
            line_width: 1.5,
            axis_width: 1.0,
            marker_radius: 3.5,
            font_families: SANS,
            title_size: 18.0,
            label_size: 15.0,
            tick_size: 12.0,
            sketch: None,
        }
    }

    /// White figure, thick black spines, comic fonts and wobbly strokes.
    pub fn xkcd() -> Self {
        Self {
            name: "xkcd",
            legend_frame: skia::Color::BLACK,
            legend_background: skia::Color::WHITE,
            line_width: 2.5,
            axis_width: 1.8,
            marker_radius: 4.5,
            font_families: COMIC,
            title_size: 20.0,
            label_size: 16.0,
            tick_size: 13.0,
            sketch: Some(Sketch::default()),
            ..Self::classic()
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            show_grid: true,
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
            legend_frame: skia::Color::from_argb(255, 90, 90, 100),
            ..Self::classic()
        }
    }

    /// Trace color for the series at `index` (cycles through the palette).
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::xkcd(), Theme::dark()]
}

/// Find a preset by name (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
