// File: crates/qae-chart/src/scale.rs
// Summary: Data-to-pixel transforms for horizontal and vertical axes, linear or log10.

use crate::axis::{Axis, ScaleKind};
use crate::geometry::clamp;

const EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Values grow left to right.
    Horizontal,
    /// Values grow bottom to top.
    Vertical,
}

/// Maps an axis range onto a pixel span.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    /// Pixel where `vmin` lands.
    pub start_px: f32,
    /// Pixel where `vmax` lands.
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < EPS { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        vmin = if vmin <= EPS { EPS } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { start_px, end_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    /// Build the scale for `axis` spanning `[lo_px, hi_px]` in the given orientation.
    pub fn for_axis(axis: &Axis, lo_px: f32, hi_px: f32, orientation: Orientation) -> Self {
        let (start, end) = match orientation {
            Orientation::Horizontal => (lo_px, hi_px),
            Orientation::Vertical => (hi_px, lo_px),
        };
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start, end, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start, end, axis.min, axis.max),
        }
    }

    /// Normalised position of `v` in the range, 0 at `vmin` and 1 at `vmax`.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(EPS);
            (v.max(EPS).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin).max(EPS)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px)
    }

    /// Like [`to_px`](Self::to_px) but pinned to the pixel span.
    #[inline]
    pub fn to_px_clamped(&self, v: f64) -> f32 {
        let (lo, hi) = if self.start_px <= self.end_px {
            (self.start_px, self.end_px)
        } else {
            (self.end_px, self.start_px)
        };
        clamp(self.to_px(v), lo, hi)
    }

    pub fn from_px(&self, px: f32) -> f64 {
        let span_px = (self.end_px - self.start_px) as f64;
        let frac = if span_px.abs() < EPS { 0.0 } else { (px - self.start_px) as f64 / span_px };
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min))
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        let f = self.fraction(v);
        (-1e-9..=1.0 + 1e-9).contains(&f)
    }
}
