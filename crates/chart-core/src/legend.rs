// File: crates/chart-core/src/legend.rs
// Summary: Legend box layout: title row plus one entry per series, placed in the emptiest plot corner.

use crate::geometry::RectF;

const PAD: f32 = 8.0;
const OFFSET: f32 = 10.0;
const SWATCH: f32 = 28.0;
const GAP: f32 = 8.0;

/// Candidate corners, in tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::UpperRight, Corner::UpperLeft, Corner::LowerLeft, Corner::LowerRight];
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub series_index: usize,
    /// Vertical center of the entry row.
    pub y_center: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub rect: RectF,
    pub corner: Corner,
    pub title: Option<(String, f32)>,
    pub entries: Vec<LegendEntry>,
    pub swatch_left: f32,
    pub swatch_right: f32,
    pub text_left: f32,
}

/// Font sizes and marker size the legend is laid out with.
#[derive(Clone, Copy, Debug)]
pub struct LegendMetrics {
    pub label_size: f32,
    pub title_size: f32,
    pub marker_radius: f32,
}

impl LegendLayout {
    /// Lay out the legend for `names` (in trace order) and choose the corner of `plot`
    /// covering the fewest `points` (pixel positions of drawn data).
    pub fn compute(
        title: &str,
        names: &[&str],
        metrics: LegendMetrics,
        plot: RectF,
        points: &[(f32, f32)],
        measure: &dyn Fn(&str, f32) -> (f32, f32),
    ) -> Self {
        let row_h = (metrics.label_size * 1.4).max(metrics.marker_radius * 2.0 + 6.0);
        let (title_w, title_h) = if title.is_empty() {
            (0.0, 0.0)
        } else {
            let (w, h) = measure(title, metrics.title_size);
            (w, h.max(metrics.title_size * 1.2))
        };
        let label_w = names
            .iter()
            .map(|n| measure(n, metrics.label_size).0)
            .fold(0.0f32, f32::max);

        let width = (SWATCH + GAP + label_w).max(title_w) + 2.0 * PAD;
        let height = title_h + row_h * names.len() as f32 + 2.0 * PAD;

        let corner = Corner::ALL
            .into_iter()
            .min_by_key(|&c| {
                let r = place(c, plot, width, height);
                points.iter().filter(|&&(x, y)| r.contains(x, y)).count()
            })
            .unwrap_or(Corner::UpperRight);
        let rect = place(corner, plot, width, height);

        let title_row = (!title.is_empty())
            .then(|| (title.to_string(), rect.top + PAD + title_h * 0.5));
        let rows_top = rect.top + PAD + title_h;
        let entries = names
            .iter()
            .enumerate()
            .map(|(i, n)| LegendEntry {
                name: n.to_string(),
                series_index: i,
                y_center: rows_top + row_h * (i as f32 + 0.5),
            })
            .collect();

        let swatch_left = rect.left + PAD;
        Self {
            rect,
            corner,
            title: title_row,
            entries,
            swatch_left,
            swatch_right: swatch_left + SWATCH,
            text_left: swatch_left + SWATCH + GAP,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

fn place(corner: Corner, plot: RectF, w: f32, h: f32) -> RectF {
    let (left, top) = match corner {
        Corner::UpperRight => (plot.right - OFFSET - w, plot.top + OFFSET),
        Corner::UpperLeft => (plot.left + OFFSET, plot.top + OFFSET),
        Corner::LowerLeft => (plot.left + OFFSET, plot.bottom - OFFSET - h),
        Corner::LowerRight => (plot.right - OFFSET - w, plot.bottom - OFFSET - h),
    };
    RectF::from_ltwh(left, top, w, h)
}

/// Size estimate used when text is not shaped (labels disabled).
pub fn estimate_text(text: &str, size: f32) -> (f32, f32) {
    (text.chars().count() as f32 * size * 0.6, size * 1.2)
}
