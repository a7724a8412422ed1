// File: crates/qae-chart/src/legend.rs
// Summary: Legend configuration, grid layout of entries, and "best" corner placement.

use crate::geometry::RectF;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    /// Corner covering the fewest data points.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendLocation {
    /// Candidate order when resolving `Best`; earlier wins ties.
    pub const CORNERS: [LegendLocation; 4] = [
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Legend {
    pub columns: usize,
    pub location: LegendLocation,
    pub font_size: f32,
}

impl Default for Legend {
    fn default() -> Self {
        Self { columns: 1, location: LegendLocation::Best, font_size: 11.0 }
    }
}

impl Legend {
    pub fn with_columns(columns: usize) -> Self {
        Self { columns: columns.max(1), ..Self::default() }
    }
}

/// Pixel layout of a legend box: entries fill rows left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub width: f32,
    pub height: f32,
    /// Top-left of each entry cell, relative to the box origin.
    pub cells: Vec<(f32, f32)>,
    pub column_widths: Vec<f32>,
    pub row_height: f32,
}

/// Width of the line sample drawn before each label.
pub const HANDLE_LEN: f32 = 28.0;
const PAD: f32 = 6.0;
const GAP: f32 = 8.0;

impl LegendLayout {
    /// Lay out entries whose label text widths are `label_widths`.
    pub fn compute(label_widths: &[f32], columns: usize, font_size: f32) -> Self {
        let n = label_widths.len();
        let cols = columns.max(1).min(n.max(1));
        let rows = if n == 0 { 0 } else { n.div_ceil(cols) };
        let row_height = font_size * 1.6;

        let mut column_widths = vec![0.0f32; cols];
        for (i, w) in label_widths.iter().enumerate() {
            let c = i % cols;
            column_widths[c] = column_widths[c].max(HANDLE_LEN + GAP + w);
        }

        let mut x_starts = Vec::with_capacity(cols);
        let mut x = PAD;
        for w in &column_widths {
            x_starts.push(x);
            x += w + GAP * 2.0;
        }
        let cells = (0..n)
            .map(|i| (x_starts[i % cols], PAD + (i / cols) as f32 * row_height))
            .collect();

        let width = if n == 0 { 0.0 } else { x - GAP * 2.0 + PAD };
        let height = if n == 0 { 0.0 } else { rows as f32 * row_height + PAD * 2.0 };
        Self { width, height, cells, column_widths, row_height }
    }

    /// Box rectangle for a concrete corner inside `plot`.
    pub fn placed(&self, plot: &RectF, location: LegendLocation) -> RectF {
        let m = PAD;
        let (left, top) = match location {
            LegendLocation::UpperLeft => (plot.left + m, plot.top + m),
            LegendLocation::LowerLeft => (plot.left + m, plot.bottom - m - self.height),
            LegendLocation::LowerRight => (plot.right - m - self.width, plot.bottom - m - self.height),
            LegendLocation::UpperRight | LegendLocation::Best => (plot.right - m - self.width, plot.top + m),
        };
        RectF::from_ltwh(left, top, self.width, self.height)
    }

    /// Resolve `Best` to the corner whose box covers the fewest of `points` (pixel coordinates).
    pub fn resolve(&self, plot: &RectF, location: LegendLocation, points: &[(f32, f32)]) -> LegendLocation {
        if location != LegendLocation::Best {
            return location;
        }
        let mut best = LegendLocation::UpperRight;
        let mut best_count = usize::MAX;
        for corner in LegendLocation::CORNERS {
            let r = self.placed(plot, corner);
            let count = points.iter().filter(|&&(x, y)| r.contains(x, y)).count();
            if count < best_count {
                best = corner;
                best_count = count;
            }
        }
        best
    }
}
