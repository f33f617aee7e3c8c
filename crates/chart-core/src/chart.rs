// File: crates/chart-core/src/chart.rs
// Summary: Chart construction/validation and the Skia rendering pipeline (PNG, SVG, RGBA).

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::CategoryAxis;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::grid::{decimals_for_step, format_tick, nice_step, nice_ticks};
use crate::legend::{estimate_text, LegendLayout, LegendMetrics};
use crate::scale::{CategoryScale, ValueScale};
use crate::series::Series;
use crate::sketch;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TICK_LEN: f32 = 5.0;
const Y_TICK_TARGET: usize = 6;

/// Static labels and bounds of a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Fixed visible y range; autoscaled from the data when `None`.
    pub y_bounds: Option<(f64, f64)>,
}

impl ChartConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }
    pub fn legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }
    pub fn y_bounds(mut self, min: f64, max: f64) -> Self {
        self.y_bounds = Some((min, max));
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A validated category line chart. Immutable once built.
#[derive(Clone, Debug)]
pub struct Chart {
    categories: CategoryAxis,
    series: Vec<Series>,
    config: ChartConfig,
}

impl Chart {
    /// Validate and build. Series order is trace order and legend order.
    pub fn new(categories: CategoryAxis, series: Vec<Series>, config: ChartConfig) -> Result<Self> {
        if categories.is_empty() {
            return Err(ChartError::EmptyCategories);
        }
        if series.is_empty() {
            return Err(ChartError::EmptyInput);
        }
        for (i, s) in series.iter().enumerate() {
            if series[..i].iter().any(|prev| prev.name == s.name) {
                return Err(ChartError::DuplicateSeries { name: s.name.clone() });
            }
            if s.len() != categories.len() {
                return Err(ChartError::ShapeMismatch {
                    series: s.name.clone(),
                    expected: categories.len(),
                    actual: s.len(),
                });
            }
        }
        if let Some((min, max)) = config.y_bounds {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(ChartError::InvalidBounds { min, max });
            }
        }
        Ok(Self { categories, series, config })
    }

    pub fn categories(&self) -> &CategoryAxis { &self.categories }

    pub fn series(&self) -> &[Series] { &self.series }

    pub fn config(&self) -> &ChartConfig { &self.config }

    /// Resolved visible ranges.
    pub fn view(&self) -> ViewState { ViewState::from_chart(self) }

    /// X tick labels in drawn order (the given category order).
    pub fn x_tick_labels(&self) -> Vec<&str> {
        self.categories.labels().iter().map(String::as_str).collect()
    }

    /// Y tick values inside the visible range.
    pub fn y_ticks(&self) -> Vec<f64> {
        let v = self.view();
        nice_ticks(v.y_min, v.y_max, Y_TICK_TARGET)
    }

    /// Series names in legend order.
    pub fn legend_entries(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn legend_title(&self) -> &str { &self.config.legend_title }

    /// Legend placement for the given options.
    pub fn legend_layout(&self, opts: &RenderOptions) -> LegendLayout {
        let frame = Frame::new(self, opts);
        let shaper = shaper_for(opts);
        frame.legend(self, opts, shaper.as_ref())
    }

    /// Draw the whole chart onto `canvas`, sized per `opts`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let shaper = shaper_for(opts);
        self.draw_with(canvas, opts, shaper.as_ref());
    }

    /// Like [`Chart::draw`], reusing a shaper built for `opts.theme.font_families`.
    /// Text is skipped when `shaper` is `None` or `opts.draw_labels` is off.
    pub fn draw_with(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: Option<&TextShaper>) {
        let theme = &opts.theme;
        let frame = Frame::new(self, opts);
        let shaper = shaper.filter(|_| opts.draw_labels);
        debug!(
            series = self.series.len(),
            categories = self.categories.len(),
            theme = theme.name,
            "drawing chart"
        );

        canvas.clear(theme.background);
        canvas.draw_rect(skia::Rect::from(frame.plot), &sketch::fill(theme.plot_background));

        if theme.show_grid {
            draw_grid(canvas, &frame, theme, self.categories.len());
        }

        canvas.save();
        canvas.clip_rect(skia::Rect::from(frame.plot), None, Some(true));
        for (i, s) in self.series.iter().enumerate() {
            draw_series(canvas, &frame, theme, theme.series_color(i), s);
        }
        canvas.restore();

        draw_axes(canvas, &frame, theme);
        draw_ticks(canvas, self, &frame, theme, shaper);
        if let Some(shaper) = shaper {
            draw_titles(canvas, self, &frame, opts, shaper);
        }
        let legend = frame.legend(self, opts, shaper);
        draw_legend(canvas, &legend, theme, shaper);
    }

    fn rasterize(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::backend(format!(
                "failed to create {}x{} raster surface",
                opts.width, opts.height
            )))?;
        self.draw_with(surface.canvas(), opts, shaper);
        Ok(surface)
    }

    /// Render to straight-alpha RGBA8 pixels: `(pixels, width, height, row stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let shaper = shaper_for(opts);
        self.render_to_rgba8_with(opts, shaper.as_ref())
    }

    /// [`Chart::render_to_rgba8`] with a caller-owned shaper, for repeated frames.
    pub fn render_to_rgba8_with(
        &self,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
    ) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts, shaper)?;
        let (w, h) = (opts.width as u32, opts.height as u32);
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::backend("reading raster pixels failed"));
        }
        Ok((pixels, w, h, stride))
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| ChartError::backend("pixel buffer does not match surface size"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| ChartError::backend(format!("encode PNG failed: {e}")))?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    /// Render to an in-memory SVG document.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        let data = canvas.end();
        if data.is_empty() {
            return Err(ChartError::backend("SVG canvas produced no output"));
        }
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to an SVG at `output_svg_path`, creating parent directories.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }
}

/// Text shaper for `opts`, or `None` when labels are off.
pub fn shaper_for(opts: &RenderOptions) -> Option<TextShaper> {
    opts.draw_labels.then(|| TextShaper::new(opts.theme.font_families))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "chart written");
    Ok(())
}

// ---- layout -----------------------------------------------------------------

/// Plot rectangle plus the scales resolved for one render.
struct Frame {
    plot: RectF,
    view: ViewState,
    x: CategoryScale,
    y: ValueScale,
}

impl Frame {
    fn new(chart: &Chart, opts: &RenderOptions) -> Self {
        let plot = RectF::plot_area(opts.width, opts.height, &opts.insets);
        let view = chart.view();
        let x = CategoryScale::new(plot.left, plot.right, view.x_min, view.x_max);
        let y = ValueScale::new(plot.top, plot.bottom, view.y_min, view.y_max);
        Self { plot, view, x, y }
    }

    fn point(&self, index: usize, value: f64) -> (f32, f32) {
        (self.x.to_px(index), self.y.to_px(value))
    }

    fn legend(&self, chart: &Chart, opts: &RenderOptions, shaper: Option<&TextShaper>) -> LegendLayout {
        let points: Vec<(f32, f32)> = chart
            .series()
            .iter()
            .flat_map(|s| s.points().map(|(i, v)| self.point(i, v)))
            .collect();
        let metrics = LegendMetrics {
            label_size: opts.theme.tick_size,
            title_size: opts.theme.tick_size,
            marker_radius: opts.theme.marker_radius,
        };
        let measure = |text: &str, size: f32| match shaper {
            Some(s) => s.measure(text, size),
            None => estimate_text(text, size),
        };
        LegendLayout::compute(
            chart.legend_title(),
            &chart.legend_entries(),
            metrics,
            self.plot,
            &points,
            &measure,
        )
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, frame: &Frame, theme: &Theme, categories: usize) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let p = frame.plot;
    for i in 0..categories {
        let x = frame.x.to_px(i);
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
    for v in nice_ticks(frame.view.y_min, frame.view.y_max, Y_TICK_TARGET) {
        let y = frame.y.to_px(v);
        canvas.draw_line((p.left, y), (p.right, y), &paint);
    }
}

fn draw_series(canvas: &skia::Canvas, frame: &Frame, theme: &Theme, color: skia::Color, series: &Series) {
    let stroke = sketch::stroke(theme, color, theme.line_width);
    for run in series.runs() {
        if run.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        let (x0, y0) = frame.point(run[0].0, run[0].1);
        path.move_to((x0, y0));
        for &(i, v) in run.iter().skip(1) {
            path.line_to(frame.point(i, v));
        }
        canvas.draw_path(&path, &stroke);
    }

    let marker = sketch::fill(color);
    for (i, v) in series.points() {
        canvas.draw_circle(frame.point(i, v), theme.marker_radius, &marker);
    }
}

fn draw_axes(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let paint = sketch::stroke(theme, theme.axis_line, theme.axis_width);
    let p = frame.plot;
    let mut path = skia::Path::new();
    path.move_to((p.left, p.top));
    path.line_to((p.right, p.top));
    path.line_to((p.right, p.bottom));
    path.line_to((p.left, p.bottom));
    path.close();
    canvas.draw_path(&path, &paint);
}

fn draw_ticks(canvas: &skia::Canvas, chart: &Chart, frame: &Frame, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut tick = skia::Paint::default();
    tick.set_anti_alias(true);
    tick.set_color(theme.tick);
    tick.set_stroke_width(theme.axis_width);

    let p = frame.plot;
    let labels = chart.x_tick_labels();
    let stride = match shaper {
        Some(s) => {
            let widest = labels.iter().map(|l| s.measure(l, theme.tick_size).0).fold(0.0f32, f32::max);
            label_stride(widest + 6.0, frame.x.band_px())
        }
        None => 1,
    };
    for (i, label) in labels.iter().enumerate() {
        let x = frame.x.to_px(i);
        canvas.draw_line((x, p.bottom), (x, p.bottom + TICK_LEN), &tick);
        if let Some(s) = shaper {
            if i % stride == 0 {
                let y = p.bottom + TICK_LEN + theme.tick_size;
                s.draw(canvas, label, x, y, theme.tick_size, theme.text, Align::Center);
            }
        }
    }

    let (vmin, vmax) = (frame.view.y_min, frame.view.y_max);
    let decimals = decimals_for_step(nice_step(vmax - vmin, Y_TICK_TARGET));
    for v in nice_ticks(vmin, vmax, Y_TICK_TARGET) {
        let y = frame.y.to_px(v);
        canvas.draw_line((p.left - TICK_LEN, y), (p.left, y), &tick);
        if let Some(s) = shaper {
            let text = format_tick(v, decimals);
            s.draw(canvas, &text, p.left - TICK_LEN - 4.0, y, theme.tick_size, theme.text, Align::Right);
        }
    }
}

/// Show every `k`-th x label so labels `label_px` wide fit in bands `band_px` apart.
pub(crate) fn label_stride(label_px: f32, band_px: f32) -> usize {
    if band_px <= 0.0 || label_px <= band_px {
        return 1;
    }
    (label_px / band_px).ceil() as usize
}

fn draw_titles(canvas: &skia::Canvas, chart: &Chart, frame: &Frame, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    let p = frame.plot;
    let cfg = chart.config();
    if !cfg.title.is_empty() {
        let y = (p.top * 0.5).max(theme.title_size * 0.6);
        shaper.draw(canvas, &cfg.title, (p.left + p.right) * 0.5, y, theme.title_size, theme.text, Align::Center);
    }
    if !cfg.x_label.is_empty() {
        let y = p.bottom + TICK_LEN + theme.tick_size * 2.0 + theme.label_size;
        shaper.draw(canvas, &cfg.x_label, (p.left + p.right) * 0.5, y, theme.label_size, theme.text, Align::Center);
    }
    if !cfg.y_label.is_empty() {
        let x = (theme.label_size * 0.9).min(p.left * 0.25).max(theme.label_size * 0.6);
        shaper.draw_vertical(canvas, &cfg.y_label, x, (p.top + p.bottom) * 0.5, theme.label_size, theme.text);
    }
}

fn draw_legend(canvas: &skia::Canvas, legend: &LegendLayout, theme: &Theme, shaper: Option<&TextShaper>) {
    let rect = skia::Rect::from(legend.rect);
    canvas.draw_rect(rect, &sketch::fill(theme.legend_background));
    let mut frame_path = skia::Path::new();
    frame_path.add_rect(rect, None);
    canvas.draw_path(&frame_path, &sketch::stroke(theme, theme.legend_frame, 1.0));

    if let (Some(s), Some((title, y))) = (shaper, &legend.title) {
        let cx = (legend.rect.left + legend.rect.right) * 0.5;
        s.draw(canvas, title, cx, *y, theme.tick_size, theme.text, Align::Center);
    }

    for entry in &legend.entries {
        let color = theme.series_color(entry.series_index);
        let y = entry.y_center;
        let mut swatch = skia::Path::new();
        swatch.move_to((legend.swatch_left, y));
        swatch.line_to((legend.swatch_right, y));
        canvas.draw_path(&swatch, &sketch::stroke(theme, color, theme.line_width));
        let mid = (legend.swatch_left + legend.swatch_right) * 0.5;
        canvas.draw_circle((mid, y), theme.marker_radius, &sketch::fill(color));
        if let Some(s) = shaper {
            s.draw(canvas, &entry.name, legend.text_left, y, theme.tick_size, theme.text, Align::Left);
        }
    }
}
