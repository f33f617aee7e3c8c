// File: crates/chart-core/src/sketch.rs
// Summary: Stroke paints, with the theme's hand-drawn wobble applied as a Skia path effect.

use skia_safe as skia;

use crate::theme::{Sketch, Theme};

/// Wobble effect: displace the stroke in short pieces, then round the resulting corners.
pub fn path_effect(sketch: &Sketch) -> Option<skia::PathEffect> {
    let discrete = skia::PathEffect::discrete(sketch.segment, sketch.deviation, sketch.seed)?;
    if sketch.smoothing <= 0.0 {
        return Some(discrete);
    }
    match skia::PathEffect::corner_path(sketch.smoothing) {
        Some(corner) => Some(skia::PathEffect::compose(corner, discrete)),
        None => Some(discrete),
    }
}

/// Anti-aliased stroke paint; sketched when the theme asks for it.
pub fn stroke(theme: &Theme, color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(color);
    if let Some(effect) = theme.sketch.as_ref().and_then(path_effect) {
        paint.set_path_effect(effect);
    }
    paint
}

pub fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
