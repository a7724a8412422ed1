// File: crates/qae-chart/src/view.rs
// Visible ranges derived from chart data, applied to axes that have no fixed limits.

use crate::axis::ScaleKind;
use crate::series::GuidePosition;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight bounds over every series (and guide lines), or the unit square when there is no data.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            if let Some((a, b, c, d)) = s.bounds() {
                x_min = x_min.min(a);
                x_max = x_max.max(b);
                y_min = y_min.min(c);
                y_max = y_max.max(d);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        for g in &chart.guides {
            match g.position {
                GuidePosition::X(x) if x.is_finite() => { x_min = x_min.min(x); x_max = x_max.max(x); }
                GuidePosition::Y(y) if y.is_finite() => { y_min = y_min.min(y); y_max = y_max.max(y); }
                _ => {}
            }
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Grow each side by `fraction` of the span. Log axes grow in decades.
    pub fn with_margin(self, fraction: f64, x_log: bool, y_log: bool) -> Self {
        let pad = |lo: f64, hi: f64, log: bool| -> (f64, f64) {
            if log && lo > 0.0 && hi > 0.0 {
                let (l, h) = (lo.log10(), hi.log10());
                let m = (h - l) * fraction;
                (10f64.powf(l - m), 10f64.powf(h + m))
            } else {
                let m = (hi - lo) * fraction;
                (lo - m, hi + m)
            }
        };
        let (x_min, x_max) = pad(self.x_min, self.x_max, x_log);
        let (y_min, y_max) = pad(self.y_min, self.y_max, y_log);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Copy the ranges onto the chart axes, leaving user limits in place.
    pub fn apply_to_chart(&self, chart: &mut Chart) {
        if chart.x_axis.limits.is_none() {
            chart.x_axis.min = self.x_min;
            chart.x_axis.max = self.x_max;
        }
        if chart.y_axis.limits.is_none() {
            chart.y_axis.min = self.y_min;
            chart.y_axis.max = self.y_max;
        }
    }
}

impl Chart {
    /// Fit unconstrained axes to the data plus `margin` (fraction of the span per side).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let view = ViewState::from_chart(self).with_margin(
            margin,
            self.x_axis.kind == ScaleKind::Log10,
            self.y_axis.kind == ScaleKind::Log10,
        );
        view.apply_to_chart(self);
    }
}
