// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers (nice steps, tick values, labels).

/// Pick a "nice" step (1, 2, 2.5 or 5 times a power of ten) giving roughly `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    let raw = (span / target).abs();
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&m| m >= norm - 1e-9)
        .unwrap_or(10.0);
    mult * mag
}

/// Tick values at multiples of a nice step inside `[min, max]` (inclusive).
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .map(|v| if v.abs() < eps { 0.0 } else { v })
        .collect()
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn decimals_for_step(step: f64) -> usize {
    (0..=6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6)
}

pub fn format_tick(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
