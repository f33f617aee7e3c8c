// File: crates/aoc-charts/src/bin/rank.rs
// Summary: Per-day leaderboard rank for both parts.

use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_charts::main_with("aoc-rank", aoc_charts::data::rank_chart)
}
