// File: crates/qae-utils/tests/charts.rs
// Purpose: Plot builders produce the expected chart model and write files.

use std::path::PathBuf;

use approx::assert_relative_eq;
use qae_chart::palette::SET1;
use qae_chart::{Color, GuidePosition, LineStyle, ScaleKind, SeriesType};
use qae_utils::charts::{best_index, round_label, title_case};
use qae_utils::{
    meas_plot, multi_plot_flat_ts, plot_compare_hist, plot_hist, CompareHistOptions, HistOptions,
    MeasPlotOptions, MultiPlotOptions, SeriesParams, Task, UtilsError,
};

fn out_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/test_out").join(name)
}

#[test]
fn multi_plot_lays_segments_back_to_back() {
    let series = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![2.0, 1.0, 0.5, 0.0]];
    let params = SeriesParams::new().labels(["train"]).line_styles([LineStyle::Solid, LineStyle::Dashed]);
    let plot = multi_plot_flat_ts(&series, &params, &MultiPlotOptions::default()).expect("plot");
    let chart = &plot.canvas;

    assert_eq!(chart.title.as_deref(), Some("Time series plot"));
    assert_eq!(chart.x_axis.label, "Range");
    assert_eq!(chart.y_axis.label, "Target value");
    assert_eq!(chart.series.len(), 3);
    assert_eq!(chart.series[1].data_xy, vec![(3.0, 4.0), (4.0, 5.0)]);
    assert_eq!(chart.series[2].data_xy[0], (5.0, 2.0));
    assert_eq!(chart.series[0].label.as_deref(), Some("train"));
    assert_eq!(chart.series[2].label.as_deref(), Some("Plot 02"));
    assert_eq!(chart.series[1].style.line_style, LineStyle::Dashed);
    assert_eq!(chart.series[2].style.color, SET1[2]);

    let separators: Vec<f64> = chart
        .guides
        .iter()
        .map(|g| match g.position {
            GuidePosition::X(x) => x,
            GuidePosition::Y(_) => panic!("separators are vertical"),
        })
        .collect();
    assert_eq!(separators, vec![2.5, 4.5]);
    assert!(chart.guides.iter().all(|g| g.line_style == LineStyle::Dashed && g.color == Color::LIGHT_GRAY));

    assert_eq!(chart.legend.map(|l| l.columns), Some(3));
    assert_eq!((plot.options.width, plot.options.height), (864, 432));
    assert!(chart.x_axis.min < 0.0 && chart.x_axis.max > 8.0);
}

#[test]
fn multi_plot_honours_limits_and_saves() {
    let path = out_dir("multi/series.png");
    let _ = std::fs::remove_file(&path);
    let opts = MultiPlotOptions {
        xlim: Some((0.0, 10.0)),
        ylim: Some((-1.0, 1.0)),
        legend_cols: 2,
        save_plot: Some(path.clone()),
        ..MultiPlotOptions::default()
    };
    let series = vec![vec![0.1, 0.2], vec![0.3]];
    let plot = multi_plot_flat_ts(&series, &SeriesParams::new(), &opts).expect("plot");
    assert_eq!((plot.canvas.x_axis.min, plot.canvas.x_axis.max), (0.0, 10.0));
    assert_eq!((plot.canvas.y_axis.min, plot.canvas.y_axis.max), (-1.0, 1.0));
    assert_eq!(plot.canvas.legend.map(|l| l.columns), Some(2));

    let bytes = std::fs::read(&path).expect("saved file");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn multi_plot_rejects_no_series() {
    let empty: Vec<Vec<f64>> = Vec::new();
    let err = multi_plot_flat_ts(&empty, &SeriesParams::new(), &MultiPlotOptions::default());
    assert!(matches!(err, Err(UtilsError::EmptyInput(_))));
}

#[test]
fn histogram_uses_binary_labels_and_threshold() {
    let probs = [0.5, 0.0, 0.25, 0.05, 0.2];
    let plot = plot_hist(&probs, &HistOptions::default()).expect("hist");
    let chart = &plot.canvas;
    assert_eq!(chart.title.as_deref(), Some("Measurement Outcomes"));
    assert_eq!(chart.series[0].series_type, SeriesType::Bar);
    assert_eq!(chart.series[0].data_xy.len(), 5);
    let ticks = chart.x_axis.tick_labels.as_ref().expect("categories");
    let names: Vec<&str> = ticks.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(names, vec!["000", "001", "010", "011", "100"]);
    assert_eq!(chart.x_axis.tick_rotation, 60.0);
    assert!(chart.guides.iter().any(|g| g.position == GuidePosition::Y(0.0)));
    assert_eq!((plot.options.width, plot.options.height), (576, 432));

    let filtered = plot_hist(&probs, &HistOptions { threshold: 0.1, ..HistOptions::default() }).expect("hist");
    let heights: Vec<f64> = filtered.canvas.series[0].data_xy.iter().map(|&(_, y)| y).collect();
    assert_eq!(heights, vec![0.5, 0.25, 0.2]);
    let kept = filtered.canvas.x_axis.tick_labels.as_ref().expect("categories");
    assert_eq!(kept.iter().map(|(_, l)| l.as_str()).collect::<Vec<_>>(), vec!["000", "010", "100"]);
}

#[test]
fn histogram_label_count_must_match() {
    let opts = HistOptions { labels: Some(vec!["a".into(), "b".into()]), ..HistOptions::default() };
    match plot_hist(&[0.2, 0.3, 0.5], &opts) {
        Err(UtilsError::LengthMismatch { expected: 3, got: 2, .. }) => {}
        Err(other) => panic!("expected LengthMismatch, got {other:?}"),
        Ok(_) => panic!("expected LengthMismatch"),
    }
    assert!(matches!(plot_hist(&[], &HistOptions::default()), Err(UtilsError::EmptyInput(_))));
}

#[test]
fn histogram_scale_multiplies_resolution() {
    let plot = plot_hist(&[0.5, 0.5], &HistOptions { scale: Some(2.0), ..HistOptions::default() }).expect("hist");
    assert_eq!((plot.options.width, plot.options.height), (1152, 864));
    assert_relative_eq!(plot.options.text_scale, 2.0);
}

#[test]
fn compare_hist_builds_two_panels() {
    let path = out_dir("compare/hist.svg");
    let opts = CompareHistOptions { save_plot: Some(path.clone()), ..CompareHistOptions::default() };
    let plot = plot_compare_hist(&[0.7, 0.0, 0.3, 0.0], &[0.25; 4], &opts).expect("compare");
    let panels = &plot.canvas.panels;
    assert_eq!(panels.len(), 2);
    // default threshold 0 drops nothing here, zeros are >= 0
    assert_eq!(panels[0].series[0].data_xy.len(), 4);
    assert_eq!(panels[1].title.as_deref(), Some("Measurement Outcomes 2"));

    let svg = std::fs::read_to_string(&path).expect("saved svg");
    assert!(svg.contains("<svg"));
}

#[test]
fn best_index_takes_first_optimum() {
    let v = [3.0, 1.0, 2.0, 1.0, f64::NAN, 5.0];
    assert_eq!(best_index(&v, Task::Min), Some((1, 1.0)));
    assert_eq!(best_index(&v, Task::Max), Some((5, 5.0)));
    assert_eq!(best_index(&[f64::NAN], Task::Min), None);
    assert_eq!("MAX".parse::<Task>().expect("task"), Task::Max);
    assert!("median".parse::<Task>().is_err());
}

#[test]
fn title_case_capitalises_words() {
    assert_eq!(title_case("cost"), "Cost");
    assert_eq!(title_case("test accuracy"), "Test Accuracy");
    assert_eq!(title_case("MSE-loss"), "Mse-Loss");
}

#[test]
fn meas_plot_labels_and_guide() {
    let costs = [0.9, 0.5, 0.7, 0.2, 0.4];
    let opts = MeasPlotOptions { log_interval: 10, title_prefix: "QAE".into(), ..MeasPlotOptions::default() };
    let plot = meas_plot(&costs, &opts).expect("meas");
    let chart = &plot.canvas;

    assert_eq!(chart.title.as_deref(), Some("QAE cost vs iteration with smoothing"));
    assert_eq!(chart.x_axis.label, "Iteration (best cost=0.2 @ iter# 30)");
    assert_eq!(chart.y_axis.label, "Cost");
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].style.color, Color::BLACK);
    assert_eq!(chart.series[0].data_xy[4].0, 40.0);
    assert_relative_eq!(chart.series[0].data_xy[1].1, 0.9 * 0.9 + 0.1 * 0.5, epsilon = 1e-12);
    assert_eq!(chart.guides[0].position, GuidePosition::X(30.0));
    assert_eq!((plot.options.width, plot.options.height), (576, 288));
}

#[test]
fn meas_plot_backplot_max_task_and_log_scale() {
    let acc = [0.1, 0.4, 0.8, 0.6];
    let opts = MeasPlotOptions {
        task: Task::Max,
        backplot: true,
        smooth_weight: 0.0,
        meas: "accuracy".into(),
        yscale: ScaleKind::Log10,
        ..MeasPlotOptions::default()
    };
    let plot = meas_plot(&acc, &opts).expect("meas");
    let chart = &plot.canvas;
    assert_eq!(chart.title.as_deref(), Some("accuracy vs iteration"));
    assert_eq!(chart.x_axis.label, "Iteration (best accuracy=0.8 @ iter# 2)");
    assert_eq!(chart.y_axis.kind, ScaleKind::Log10);
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].style.color, Color::rgb(250, 240, 230));
    assert_eq!(chart.series[0].data_xy, chart.series[1].data_xy);
}

#[test]
fn meas_plot_rejects_empty_bad_weight_and_zero_interval() {
    assert!(matches!(meas_plot(&[], &MeasPlotOptions::default()), Err(UtilsError::EmptyInput(_))));
    let opts = MeasPlotOptions { smooth_weight: 2.0, ..MeasPlotOptions::default() };
    assert!(matches!(meas_plot(&[1.0, 2.0], &opts), Err(UtilsError::InvalidWeight(_))));
    let opts = MeasPlotOptions { log_interval: 0, ..MeasPlotOptions::default() };
    assert!(matches!(meas_plot(&[1.0, 2.0], &opts), Err(UtilsError::ZeroInterval)));
}

#[test]
fn meas_plot_handles_huge_log_interval() {
    let opts = MeasPlotOptions { log_interval: usize::MAX, ..MeasPlotOptions::default() };
    let plot = meas_plot(&[3.0, 2.0, 1.0], &opts).expect("meas");
    let last_x = plot.canvas.series[0].data_xy[2].0;
    assert_relative_eq!(last_x, 2.0 * usize::MAX as f64);
    assert_eq!(plot.canvas.guides[0].position, GuidePosition::X(last_x));
}

#[test]
fn optimum_label_drops_trailing_zeros() {
    assert_eq!(round_label(0.2, 4), "0.2");
    assert_eq!(round_label(0.123456, 4), "0.1235");
    assert_eq!(round_label(1.0, 4), "1.0");
    assert_eq!(round_label(-3.00004, 4), "-3.0");
    assert_eq!(round_label(f64::INFINITY, 4), "inf");
}

#[test]
fn plot_renders_to_png_and_rejects_unknown_extension() {
    let plot = meas_plot(&[3.0, 2.0, 1.0], &MeasPlotOptions::default()).expect("meas");
    let bytes = plot.to_png().expect("png");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (576, 288));

    let err = plot.save(out_dir("trace.bmp"));
    assert!(matches!(err, Err(UtilsError::Chart(_))));
}
