// File: crates/qae-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

use crate::axis::{Axis, ScaleKind};

/// Round tick step (1, 2, 2.5 or 5 times a power of ten) giving about `target` ticks.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if span < 1e-12 || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 2.5 { 2.5 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions inside `[min, max]` on multiples of [`nice_step`].
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, target);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v }).collect()
}

/// Powers of ten inside `[min, max]`.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    let lo = min.max(1e-12).log10().ceil() as i32;
    let hi = max.max(1e-12).log10().floor() as i32;
    (lo..=hi).map(|e| 10f64.powi(e)).collect()
}

/// Compact label for a tick value.
pub fn format_tick(v: f64, step: f64) -> String {
    if v == 0.0 { return "0".to_string(); }
    let a = v.abs();
    if a >= 1e5 || a < 1e-4 {
        return format!("{:.0e}", v);
    }
    let decimals = if step >= 1.0 { 0 } else { (-step.log10()).ceil().max(0.0) as usize };
    format!("{:.*}", decimals, v)
}

/// Tick positions and labels for `axis`: categorical labels when set, else
/// decade ticks for log axes and nice linear ticks otherwise.
pub fn axis_ticks(axis: &Axis, target: usize) -> Vec<(f64, String)> {
    if let Some(labels) = &axis.tick_labels {
        return labels.clone();
    }
    match axis.kind {
        ScaleKind::Log10 => log_ticks(axis.min, axis.max)
            .into_iter()
            .map(|v| (v, format!("1e{}", v.log10().round() as i32)))
            .collect(),
        ScaleKind::Linear => {
            let step = nice_step(axis.min, axis.max, target);
            nice_ticks(axis.min, axis.max, target)
                .into_iter()
                .map(|v| (v, format_tick(v, step)))
                .collect()
        }
    }
}
