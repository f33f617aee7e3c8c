// File: crates/chart-core/src/axis.rs
// Summary: Category axis model (ordered X labels).

/// Ordered category labels shared by every series. Labels keep the order they were given in.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    pub categories: Vec<String>,
}

impl CategoryAxis {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self { categories: categories.into_iter().map(Into::into).collect() }
    }

    /// Categories "1"..="n", e.g. challenge days.
    pub fn numbered(n: usize) -> Self {
        Self::new((1..=n).map(|i| i.to_string()))
    }

    pub fn len(&self) -> usize { self.categories.len() }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    pub fn labels(&self) -> &[String] { &self.categories }
}
