// File: crates/chart-core/src/series.rs
// Summary: Named value series plotted against the shared category axis.
// Notes:
// - Series are kept in an ordered Vec by the chart; that order fixes trace and legend order.
// - A non-finite value marks a missing point and breaks the line.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }

    /// Build from any numeric values convertible to `f64` (ranks, counts, hours).
    pub fn from_values<T: Into<f64> + Copy>(name: impl Into<String>, values: &[T]) -> Self {
        Self::new(name, values.iter().map(|&v| v.into()).collect())
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Present (finite) points as `(category index, value)`.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| (i, v))
    }

    /// Contiguous runs of present points; each run is drawn as one polyline.
    pub fn runs(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        for (i, &v) in self.values.iter().enumerate() {
            if v.is_finite() {
                current.push((i, v));
            } else if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() { out.push(current); }
        out
    }

    /// Min/max over present values, `None` when every value is missing.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points().fold(None, |acc, (_, v)| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
