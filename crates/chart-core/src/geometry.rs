// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Plot area inside a `width` x `height` surface. Degenerate sizes collapse to a 1px rect.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let l = insets.left as f32;
        let t = insets.top as f32;
        let r = (width as f32 - insets.right as f32).max(l + 1.0);
        let b = (height as f32 - insets.bottom as f32).max(t + 1.0);
        Self::from_ltrb(l, t, r, b)
    }
}

impl From<RectF> for skia_safe::Rect {
    fn from(r: RectF) -> Self {
        skia_safe::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
    }
}
