// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with theme font families.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor for a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
    families: &'static [&'static str],
}

impl TextShaper {
    pub fn new(families: &'static [&'static str]) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families }
    }

    fn make_style(&self, size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(self.families);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width of the longest line, paragraph height)
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw `text` anchored horizontally at `x` and vertically centered on `y_center`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y_center: f32,
        size: f32,
        color: skia::Color,
        align: Align,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        p.paint(canvas, (left, y_center - p.height() * 0.5));
    }

    /// Draw `text` rotated a quarter turn counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
    ) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
        self.draw(canvas, text, cx, cy, size, color, Align::Center);
        canvas.restore();
    }
}
