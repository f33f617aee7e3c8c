// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) transforms from data space to pixels.

/// Horizontal scale placing category index `i` at logical x = i, inside a padded view range.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub x_min: f64,
    pub x_max: f64,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, x_min: f64, x_max: f64) -> Self {
        let mut s = Self { left_px, right_px, x_min, x_max };
        if (s.x_max - s.x_min).abs() < 1e-12 { s.x_max = s.x_min + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.logical_to_px(index as f64)
    }
    #[inline]
    pub fn logical_to_px(&self, x: f64) -> f32 {
        let span = self.x_max - self.x_min;
        self.left_px + ((x - self.x_min) / span) as f32 * (self.right_px - self.left_px)
    }
    /// Pixel distance between neighbouring categories.
    pub fn band_px(&self) -> f32 {
        self.logical_to_px(1.0) - self.logical_to_px(0.0)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
