// File: crates/chart-core/tests/autoscale.rs
// Purpose: Visible range resolution: fixed bounds are exact, otherwise data plus margins.

use chart_core::{CategoryAxis, Chart, ChartConfig, Series};

fn chart(values: Vec<Vec<f64>>, config: ChartConfig) -> Chart {
    let n = values[0].len();
    let series = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| Series::new(format!("s{i}"), v))
        .collect();
    Chart::new(CategoryAxis::numbered(n), series, config).expect("valid chart")
}

#[test]
fn fixed_bounds_are_exact_regardless_of_data() {
    let ch = chart(vec![vec![-40.0, 3.0, 120.0]], ChartConfig::new("T").y_bounds(0.0, 25.0));
    let view = ch.view();
    assert_eq!(view.y_min, 0.0);
    assert_eq!(view.y_max, 25.0);
    assert_eq!(ch.y_ticks(), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
}

#[test]
fn autoscale_adds_five_percent_margins() {
    let ch = chart(vec![vec![10.0, 20.0, 30.0], vec![0.0, 50.0, 100.0]], ChartConfig::new("T"));
    let view = ch.view();
    assert!((view.y_min - -5.0).abs() < 1e-9, "{view:?}");
    assert!((view.y_max - 105.0).abs() < 1e-9, "{view:?}");
}

#[test]
fn categories_are_padded_on_both_sides() {
    let ch = chart(vec![vec![1.0; 21]], ChartConfig::new("T"));
    let view = ch.view();
    assert!((view.x_min - -1.0).abs() < 1e-9);
    assert!((view.x_max - 21.0).abs() < 1e-9);

    let single = chart(vec![vec![7.0]], ChartConfig::new("T"));
    let view = single.view();
    assert_eq!((view.x_min, view.x_max), (-0.5, 0.5));
}

#[test]
fn flat_data_gets_unit_padding() {
    let ch = chart(vec![vec![4.0, 4.0, 4.0]], ChartConfig::new("T"));
    let view = ch.view();
    assert_eq!((view.y_min, view.y_max), (3.0, 5.0));
}

#[test]
fn missing_values_are_ignored_by_autoscale() {
    let ch = chart(vec![vec![f64::NAN, 2.0, 6.0, f64::NAN]], ChartConfig::new("T"));
    let view = ch.view();
    assert!((view.y_min - 1.8).abs() < 1e-9, "{view:?}");
    assert!((view.y_max - 6.2).abs() < 1e-9, "{view:?}");

    let runs = ch.series()[0].runs();
    assert_eq!(runs, vec![vec![(1, 2.0), (2, 6.0)]]);

    let empty = chart(vec![vec![f64::NAN, f64::NAN]], ChartConfig::new("T"));
    let view = empty.view();
    assert_eq!((view.y_min, view.y_max), (0.0, 1.0));
}
