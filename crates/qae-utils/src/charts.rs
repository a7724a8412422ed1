// File: crates/qae-utils/src/charts.rs
// Summary: Notebook-style plot builders: measurement histograms, optimisation
// traces and multi-segment time series, each returning an explicit chart object.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use qae_chart::export::{self, ImageFormat, Paint};
use qae_chart::types::DPI;
use qae_chart::{
    Chart, Color, Figure, FigureSize, Guide, Legend, LineStyle, RenderOptions, ScaleKind, Series,
    SeriesStyle, SeriesType,
};

use crate::bits::binary_labels;
use crate::error::{Result, UtilsError};
use crate::normalize::{normalize, SeriesParams};
use crate::smoothing::smooth;

/// matplotlib's first cycle color, used for histogram bars.
const BAR_COLOR: Color = Color::rgb(31, 119, 180);
/// Autoscale padding on each side, as a fraction of the data span.
const MARGIN: f64 = 0.05;

/// A drawable (chart or figure) together with the options to render it.
pub struct Plot<T> {
    pub canvas: T,
    pub options: RenderOptions,
}

impl<T: Paint> Plot<T> {
    /// Write to `path`; the format follows the extension and parent directories are created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        export::save(&self.canvas, &self.options, path.as_ref())?;
        Ok(())
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        Ok(export::encode(&self.canvas, &self.options, ImageFormat::Png)?)
    }

    fn save_if_requested(self, path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            self.save(path)?;
            log::debug!("saved plot to {}", path.display());
        }
        Ok(self)
    }
}

fn apply_limits(chart: &mut Chart, xlim: Option<(f64, f64)>, ylim: Option<(f64, f64)>) {
    if let Some((lo, hi)) = xlim {
        chart.x_axis.set_limits(lo, hi);
    }
    if let Some((lo, hi)) = ylim {
        chart.y_axis.set_limits(lo, hi);
    }
}

// ---- multi-segment time series ----------------------------------------------

#[derive(Clone, Debug)]
pub struct MultiPlotOptions {
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub fig_size: FigureSize,
    pub xlabel: String,
    pub ylabel: String,
    pub legend_cols: usize,
    pub title: String,
    pub save_plot: Option<PathBuf>,
}

impl Default for MultiPlotOptions {
    fn default() -> Self {
        Self {
            xlim: None,
            ylim: None,
            fig_size: FigureSize::new(12.0, 6.0, DPI),
            xlabel: "Range".to_string(),
            ylabel: "Target value".to_string(),
            legend_cols: 3,
            title: "Time series plot".to_string(),
            save_plot: None,
        }
    }
}

/// Plot consecutive segments of a time series on one axis. Each series is
/// drawn over `[offset, offset + len)` with its resolved style; a dashed grey
/// separator marks the start of every segment after the first.
pub fn multi_plot_flat_ts<S: AsRef<[f64]>>(
    series: &[S],
    params: &SeriesParams,
    opts: &MultiPlotOptions,
) -> Result<Plot<Chart>> {
    let resolved = normalize(series, params)?;

    let mut chart = Chart::new().with_title(opts.title.clone());
    chart.x_axis.label = opts.xlabel.clone();
    chart.y_axis.label = opts.ylabel.clone();
    for (i, ys) in series.iter().enumerate() {
        chart.add_series(
            Series::line_from(resolved.start_offsets[i], ys.as_ref())
                .with_style(resolved.style(i))
                .with_label(resolved.labels[i].clone()),
        );
    }
    for x in resolved.separators() {
        chart.add_guide(Guide::vertical(x, Color::LIGHT_GRAY, LineStyle::Dashed));
    }
    chart.set_legend(Legend::with_columns(opts.legend_cols));
    apply_limits(&mut chart, opts.xlim, opts.ylim);
    chart.autoscale_axes(MARGIN);

    Plot { canvas: chart, options: RenderOptions::from_figure(opts.fig_size) }
        .save_if_requested(opts.save_plot.as_ref())
}

// ---- measurement histograms ---------------------------------------------------

#[derive(Clone, Debug)]
pub struct HistOptions {
    pub scale: Option<f32>,
    pub fig_size: FigureSize,
    /// Outcomes with probability below this are not drawn.
    pub threshold: f64,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    /// Bar labels; defaults to zero-padded binary outcome indices.
    pub labels: Option<Vec<String>>,
    pub xlabel: String,
    pub ylabel: String,
    pub title: String,
    pub save_plot: Option<PathBuf>,
}

impl Default for HistOptions {
    fn default() -> Self {
        Self {
            scale: None,
            fig_size: FigureSize::default(),
            threshold: -10_000.0,
            xlim: None,
            ylim: None,
            labels: None,
            xlabel: "Results".to_string(),
            ylabel: "Probability".to_string(),
            title: "Measurement Outcomes".to_string(),
            save_plot: None,
        }
    }
}

struct HistPanel<'a> {
    threshold: f64,
    labels: Option<&'a [String]>,
    title: &'a str,
    xlabel: &'a str,
    ylabel: &'a str,
}

fn hist_chart(probs: &[f64], panel: HistPanel<'_>) -> Result<Chart> {
    if probs.is_empty() {
        return Err(UtilsError::EmptyInput("probabilities"));
    }
    let labels = match panel.labels {
        Some(l) if l.len() != probs.len() => {
            return Err(UtilsError::LengthMismatch { what: "histogram labels", expected: probs.len(), got: l.len() });
        }
        Some(l) => l.to_vec(),
        None => binary_labels(probs.len()),
    };

    let (kept, names): (Vec<f64>, Vec<String>) = probs
        .iter()
        .zip(labels)
        .filter(|(p, _)| **p >= panel.threshold)
        .map(|(p, l)| (*p, l))
        .unzip();
    if kept.len() < probs.len() {
        log::debug!("histogram: {} of {} outcomes below threshold {}", probs.len() - kept.len(), probs.len(), panel.threshold);
    }

    let mut chart = Chart::new().with_title(panel.title);
    chart.x_axis.label = panel.xlabel.to_string();
    chart.y_axis.label = panel.ylabel.to_string();
    chart.x_axis.set_categories(names);
    chart.x_axis.tick_rotation = 60.0;
    chart.add_series(Series::bars(&kept).with_style(SeriesStyle::solid(BAR_COLOR)));
    chart.add_guide(Guide::horizontal(0.0, Color::LIGHT_GRAY, LineStyle::Solid));
    Ok(chart)
}

/// Bar chart of a probability distribution over measurement outcomes.
pub fn plot_hist(probs: &[f64], opts: &HistOptions) -> Result<Plot<Chart>> {
    let mut chart = hist_chart(
        probs,
        HistPanel {
            threshold: opts.threshold,
            labels: opts.labels.as_deref(),
            title: &opts.title,
            xlabel: &opts.xlabel,
            ylabel: &opts.ylabel,
        },
    )?;
    apply_limits(&mut chart, opts.xlim, opts.ylim);
    chart.autoscale_axes(MARGIN);

    Plot { canvas: chart, options: RenderOptions::from_figure(opts.fig_size.scaled(opts.scale)) }
        .save_if_requested(opts.save_plot.as_ref())
}

#[derive(Clone, Debug)]
pub struct CompareHistOptions {
    pub scale: Option<f32>,
    pub fig_size: FigureSize,
    pub threshold: f64,
    pub titles: [String; 2],
    pub xlabels: [String; 2],
    pub ylabels: [String; 2],
    pub save_plot: Option<PathBuf>,
}

impl Default for CompareHistOptions {
    fn default() -> Self {
        Self {
            scale: None,
            fig_size: FigureSize::default(),
            threshold: 0.0,
            titles: ["Measurement Outcomes 1".to_string(), "Measurement Outcomes 2".to_string()],
            xlabels: ["Results".to_string(), "Results".to_string()],
            ylabels: ["Probability".to_string(), "Probability".to_string()],
            save_plot: None,
        }
    }
}

/// Two measurement histograms side by side.
pub fn plot_compare_hist(probs_1: &[f64], probs_2: &[f64], opts: &CompareHistOptions) -> Result<Plot<Figure>> {
    let mut panels = Vec::with_capacity(2);
    for (i, probs) in [probs_1, probs_2].into_iter().enumerate() {
        let mut chart = hist_chart(
            probs,
            HistPanel {
                threshold: opts.threshold,
                labels: None,
                title: &opts.titles[i],
                xlabel: &opts.xlabels[i],
                ylabel: &opts.ylabels[i],
            },
        )?;
        chart.autoscale_axes(MARGIN);
        panels.push(chart);
    }

    Plot { canvas: Figure::new(panels), options: RenderOptions::from_figure(opts.fig_size.scaled(opts.scale)) }
        .save_if_requested(opts.save_plot.as_ref())
}

// ---- optimisation traces ------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Task {
    #[default]
    Min,
    Max,
}

impl FromStr for Task {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Task::Min),
            "max" => Ok(Task::Max),
            _ => Err(UtilsError::UnknownName { kind: "task", value: s.to_string() }),
        }
    }
}

/// Index and value of the optimum (first occurrence); NaNs are skipped.
pub fn best_index(values: &[f64], task: Task) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        let better = match (best, task) {
            (None, _) => true,
            (Some((_, b)), Task::Min) => v < b,
            (Some((_, b)), Task::Max) => v > b,
        };
        if better {
            best = Some((i, v));
        }
    }
    best
}

#[derive(Clone, Debug)]
pub struct MeasPlotOptions {
    pub fig_size: FigureSize,
    pub yscale: ScaleKind,
    /// Iterations between consecutive logged values; must be at least 1.
    pub log_interval: usize,
    pub task: Task,
    /// Also draw the raw trace behind the smoothed one.
    pub backplot: bool,
    pub back_color: Color,
    pub smooth_weight: f64,
    pub save_plot: Option<PathBuf>,
    /// Name of the measure, e.g. "cost" or "accuracy".
    pub meas: String,
    pub title_prefix: String,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
}

impl Default for MeasPlotOptions {
    fn default() -> Self {
        Self {
            fig_size: FigureSize::new(8.0, 4.0, DPI),
            yscale: ScaleKind::Linear,
            log_interval: 1,
            task: Task::Min,
            backplot: false,
            back_color: Color::rgb(250, 240, 230), // linen
            smooth_weight: 0.9,
            save_plot: None,
            meas: "cost".to_string(),
            title_prefix: String::new(),
            xlim: None,
            ylim: None,
        }
    }
}

/// `value` rounded to `decimals` places and printed without trailing zeros,
/// keeping one decimal for whole numbers (`0.2`, `1.0`, `0.1235`).
pub fn round_label(value: f64, decimals: i32) -> String {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() { scaled.round() / factor } else { value };
    if rounded.is_finite() && rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Capitalise the first letter of every word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

/// Plot an optimisation trace: the smoothed curve in black, optionally the
/// raw values behind it, and a dashed guide at the best iteration.
pub fn meas_plot(values: &[f64], opts: &MeasPlotOptions) -> Result<Plot<Chart>> {
    if values.is_empty() {
        return Err(UtilsError::EmptyInput("measurement values"));
    }
    let (opt_index, opt_value) = best_index(values, opts.task)
        .ok_or(UtilsError::EmptyInput("non-NaN measurement values"))?;
    let smoothed = smooth(values, opts.smooth_weight)?;
    if opts.log_interval == 0 {
        return Err(UtilsError::ZeroInterval);
    }
    // f64: index * interval may exceed usize
    let interval = opts.log_interval as f64;
    let opt_x = opt_index as f64 * interval;

    let suffix = if opts.smooth_weight > 0.0 { "with smoothing" } else { "" };
    let title = format!("{} {} vs iteration {}", opts.title_prefix, opts.meas, suffix);
    let mut chart = Chart::new().with_title(title.trim());
    chart.x_axis.label = format!("Iteration (best {}={} @ iter# {})", opts.meas, round_label(opt_value, 4), opt_x);
    chart.y_axis.label = title_case(&opts.meas);
    chart.y_axis.kind = opts.yscale;

    let xs = |ys: &[f64]| -> Vec<(f64, f64)> {
        ys.iter().enumerate().map(|(i, &y)| (i as f64 * interval, y)).collect()
    };
    if opts.backplot {
        chart.add_series(
            Series::with_data(SeriesType::Line, xs(values))
                .with_style(SeriesStyle::solid(opts.back_color)),
        );
    }
    chart.add_series(
        Series::with_data(SeriesType::Line, xs(&smoothed)).with_style(SeriesStyle::solid(Color::BLACK)),
    );
    chart.add_guide(Guide::vertical(opt_x, Color::LIGHT_GRAY, LineStyle::Dashed));
    apply_limits(&mut chart, opts.xlim, opts.ylim);
    chart.autoscale_axes(MARGIN);

    Plot { canvas: chart, options: RenderOptions::from_figure(opts.fig_size) }
        .save_if_requested(opts.save_plot.as_ref())
}
