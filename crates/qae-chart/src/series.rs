// File: crates/qae-chart/src/series.rs
// Summary: Series model (line traces and categorical bars) plus reference guide lines.

use crate::style::{Color, LineStyle, SeriesStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    /// Connected (x, y) points, optionally with markers.
    Line,
    /// Bars from y=0 centred on each x; `bar_width` is in data units.
    Bar,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    /// Legend entry; unlabeled series are left out of the legend.
    pub label: Option<String>,
    pub bar_width: f64,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, data_xy: data, style: SeriesStyle::default(), label: None, bar_width: 0.8 }
    }

    /// Line over consecutive integer x values starting at `start`.
    pub fn line_from(start: i64, ys: &[f64]) -> Self {
        let data = ys.iter().enumerate().map(|(i, &y)| (start as f64 + i as f64, y)).collect();
        Self::with_data(SeriesType::Line, data)
    }

    /// Bars at category positions 0, 1, 2, ...
    pub fn bars(heights: &[f64]) -> Self {
        let data = heights.iter().enumerate().map(|(i, &h)| (i as f64, h)).collect();
        Self::with_data(SeriesType::Bar, data)
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Data bounds `(x_min, x_max, y_min, y_max)`; bars include their width and the zero baseline.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
        for &(x, y) in it {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if self.series_type == SeriesType::Bar {
            let half = self.bar_width * 0.5;
            x_min -= half;
            x_max += half;
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        Some((x_min, x_max, y_min, y_max))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuidePosition {
    /// Vertical line at this x.
    X(f64),
    /// Horizontal line at this y.
    Y(f64),
}

/// Full-height or full-width reference line (segment separators, optimum markers, baselines).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guide {
    pub position: GuidePosition,
    pub color: Color,
    pub line_style: LineStyle,
    pub line_width: f32,
}

impl Guide {
    pub fn vertical(x: f64, color: Color, line_style: LineStyle) -> Self {
        Self { position: GuidePosition::X(x), color, line_style, line_width: 1.0 }
    }

    pub fn horizontal(y: f64, color: Color, line_style: LineStyle) -> Self {
        Self { position: GuidePosition::Y(y), color, line_style, line_width: 1.0 }
    }
}
