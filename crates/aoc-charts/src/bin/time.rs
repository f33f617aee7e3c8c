// File: crates/aoc-charts/src/bin/time.rs
// Summary: Per-day completion time (hours after release) for both parts, y axis fixed to 0..25.

use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_charts::main_with("aoc-time", aoc_charts::data::time_chart)
}
