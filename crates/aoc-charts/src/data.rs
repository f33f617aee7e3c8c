// File: crates/aoc-charts/src/data.rs
// Summary: Compiled-in per-day results (25 days, two parts) and the charts built from them.

use chart_core::{CategoryAxis, Chart, ChartConfig, Result, Series};

pub const DAYS: usize = 25;

pub const RANK_PART_ONE: [i32; DAYS] = [
    112530, 29273, 55924, 48233, 20948,
    20803, 30650, 19163, 49334, 44014,
    27172, 15208, 14566, 11676, 10698,
    7906, 23865, 10011, 5861, 20533,
    14117, 19778, 14307, 10235, 10242,
];

pub const RANK_PART_TWO: [i32; DAYS] = [
    105914, 19948, 46802, 61880, 44084,
    28955, 29008, 17308, 39122, 43027,
    17829, 16886, 10188, 9297, 8688,
    5069, 18382, 9672, 7604, 17533,
    11406, 16951, 11860, 7759, 6668,
];

/// Hours between puzzle release and completion; 24 marks "a day or more".
pub const HOURS_PART_ONE: [f64; DAYS] = [
    24.0, 3.25, 7.75, 9.52, 3.0,
    3.30, 8.30, 5.0, 24.0, 24.0,
    6.20, 4.30, 4.30, 3.75, 4.0,
    3.5, 17.90, 3.5, 1.25, 24.0,
    24.0, 24.0, 9.5, 5.25, 5.35,
];

pub const HOURS_PART_TWO: [f64; DAYS] = [
    24.0, 3.25, 8.0, 16.25, 12.95,
    11.95, 9.0, 5.20, 24.0, 24.0,
    6.35, 12.25, 4.5, 4.29, 7.19,
    3.55, 24.0, 4.0, 3.28, 24.0,
    24.0, 24.0, 10.19, 15.72, 5.46,
];

pub const LEGEND_TITLE: &str = "Parts";

pub fn rank_chart() -> Result<Chart> {
    Chart::new(
        CategoryAxis::numbered(DAYS),
        vec![
            Series::from_values("Part One", &RANK_PART_ONE),
            Series::from_values("Part Two", &RANK_PART_TWO),
        ],
        ChartConfig::new("Ranking for Part One and Part Two")
            .x_label("Day")
            .y_label("Rank")
            .legend_title(LEGEND_TITLE),
    )
}

pub fn time_chart() -> Result<Chart> {
    Chart::new(
        CategoryAxis::numbered(DAYS),
        vec![
            Series::from_values("Part One", &HOURS_PART_ONE),
            Series::from_values("Part Two", &HOURS_PART_TWO),
        ],
        ChartConfig::new("Challenge Completion Times for Part One and Part Two")
            .x_label("Day")
            .y_label("Elapsed time (h) since challenge release")
            .legend_title(LEGEND_TITLE)
            // headroom above the 24h cap
            .y_bounds(0.0, 25.0),
    )
}
