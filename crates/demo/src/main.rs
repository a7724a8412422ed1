// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV of training traces and renders segment, trace and histogram plots.

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use qae_chart::export::Paint;
use qae_utils::{
    meas_plot, multi_plot_flat_ts, plot_hist, timestamp_now, HistOptions, MeasPlotOptions, MultiPlotOptions,
    Plot, SeriesParams,
};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT: &str = "crates/demo/data/training_trace.csv";
const PROBS_COLUMN: &str = "probs";

/// One named numeric CSV column; blank cells are skipped.
struct Column {
    name: String,
    values: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("QAE_LOG", "warn,qae_demo=info"))
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    log::info!("using input file {} ({})", input.display(), timestamp_now());

    let columns = load_columns(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    let (probs, traces): (Vec<Column>, Vec<Column>) = columns.into_iter().partition(|c| c.name == PROBS_COLUMN);
    if traces.is_empty() && probs.is_empty() {
        bail!("no numeric columns in {}", input.display());
    }
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("trace").to_string();

    // 1) All traces as consecutive segments on one axis
    if !traces.is_empty() {
        let series: Vec<&[f64]> = traces.iter().map(|c| c.values.as_slice()).collect();
        let params = SeriesParams::new().labels(traces.iter().map(|c| c.name.clone()));
        let opts = MultiPlotOptions { title: format!("{stem}: all traces"), ..MultiPlotOptions::default() };
        let plot = multi_plot_flat_ts(&series, &params, &opts).context("plotting segments")?;
        write_outputs(&plot, &out_dir.join(format!("{stem}_segments.png")))?;
    }

    // 2) One smoothed optimisation trace per column
    for column in &traces {
        let opts = MeasPlotOptions {
            meas: column.name.replace('_', " "),
            backplot: true,
            title_prefix: stem.clone(),
            ..MeasPlotOptions::default()
        };
        let plot = meas_plot(&column.values, &opts).with_context(|| format!("plotting column '{}'", column.name))?;
        write_outputs(&plot, &out_dir.join(format!("{stem}_{}.png", column.name)))?;
    }

    // 3) Measurement outcome histogram
    if let Some(column) = probs.first() {
        let plot = plot_hist(&column.values, &HistOptions::default()).context("plotting histogram")?;
        write_outputs(&plot, &out_dir.join(format!("{stem}_hist.png")))?;
    }

    Ok(())
}

/// Write `png_path` and a sibling SVG.
fn write_outputs<T: Paint>(plot: &Plot<T>, png_path: &Path) -> Result<()> {
    plot.save(png_path).with_context(|| format!("writing {}", png_path.display()))?;
    let svg_path = png_path.with_extension("svg");
    plot.save(&svg_path).with_context(|| format!("writing {}", svg_path.display()))?;
    println!("Wrote {} (+ svg)", png_path.display());
    Ok(())
}

/// Load every column holding at least one number. Rows may be ragged.
fn load_columns(path: &Path) -> Result<Vec<Column>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column { name, values: Vec::new() })
        .collect();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        for (column, cell) in columns.iter_mut().zip(rec.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => column.values.push(v),
                Err(_) => skipped += 1,
            }
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} non-numeric cells");
    }

    columns.retain(|c| !c.values.is_empty());
    for c in &columns {
        log::info!("column '{}': {} values", c.name, c.values.len());
    }
    Ok(columns)
}
