// File: crates/chart-core/src/view.rs
// Visible data ranges for a chart: fixed y bounds or autoscale with margins.

use crate::Chart;

/// Fraction of the data span added on each side when autoscaling.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let (x_min, x_max) = category_range(chart.categories().len());
        let (y_min, y_max) = match chart.config().y_bounds {
            Some((lo, hi)) => (lo, hi),
            None => autoscale_y(chart),
        };
        Self { x_min, x_max, y_min, y_max }
    }
}

/// Categories sit at 0..n-1; pad by the margin, or half a band when there is one category.
fn category_range(n: usize) -> (f64, f64) {
    let last = n.saturating_sub(1) as f64;
    let pad = if n <= 1 { 0.5 } else { last * MARGIN };
    (-pad, last + pad)
}

fn autoscale_y(chart: &Chart) -> (f64, f64) {
    let range = chart
        .series()
        .iter()
        .filter_map(|s| s.value_range())
        .reduce(|(a_lo, a_hi), (b_lo, b_hi)| (a_lo.min(b_lo), a_hi.max(b_hi)));
    match range {
        None => (0.0, 1.0),
        Some((lo, hi)) if (hi - lo).abs() < 1e-9 => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let m = (hi - lo) * MARGIN;
            (lo - m, hi + m)
        }
    }
}
