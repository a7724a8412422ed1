// File: crates/qae-utils/src/normalize.rs
// Summary: Resolves ragged per-series plot parameters into complete, length-matched lists.

use std::ops::Range;

use qae_chart::palette::{self, CAPACITY};
use qae_chart::{Color, LineStyle, Marker, SeriesStyle};

use crate::error::{Result, UtilsError};

/// Optional per-series attributes. Any list may be missing, empty, or
/// shorter than the number of series; gaps are filled with defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesParams {
    pub start_offsets: Option<Vec<i64>>,
    pub labels: Option<Vec<String>>,
    pub colors: Option<Vec<Color>>,
    pub line_styles: Option<Vec<LineStyle>>,
    pub markers: Option<Vec<Marker>>,
    pub marker_colors: Option<Vec<Color>>,
}

impl SeriesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_offsets(mut self, offsets: impl Into<Vec<i64>>) -> Self {
        self.start_offsets = Some(offsets.into());
        self
    }

    pub fn labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    pub fn line_styles(mut self, styles: impl Into<Vec<LineStyle>>) -> Self {
        self.line_styles = Some(styles.into());
        self
    }

    pub fn markers(mut self, markers: impl Into<Vec<Marker>>) -> Self {
        self.markers = Some(markers.into());
        self
    }

    pub fn marker_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.marker_colors = Some(colors.into());
        self
    }
}

/// Fully resolved attributes; every list has one entry per series.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSeriesSet {
    pub start_offsets: Vec<i64>,
    pub labels: Vec<String>,
    pub colors: Vec<Color>,
    pub line_styles: Vec<LineStyle>,
    pub markers: Vec<Marker>,
    pub marker_colors: Vec<Color>,
    /// Half-open x-range `[offset, offset + len)` of each series.
    pub x_ranges: Vec<Range<i64>>,
}

impl NormalizedSeriesSet {
    pub fn len(&self) -> usize {
        self.start_offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start_offsets.is_empty()
    }

    /// Drawing style of series `i`: line in the series color, marker edge in
    /// the series color and marker face in the marker color.
    pub fn style(&self, i: usize) -> SeriesStyle {
        SeriesStyle::solid(self.colors[i])
            .with_line_style(self.line_styles[i])
            .with_marker(self.markers[i], self.colors[i], self.marker_colors[i])
    }

    /// x positions of the segment separators, `offset - 0.5` for every series after the first.
    pub fn separators(&self) -> Vec<f64> {
        self.start_offsets.iter().skip(1).map(|&o| o as f64 - 0.5).collect()
    }
}

/// Default label of series `i`.
pub fn default_label(i: usize) -> String {
    format!("Plot {i:02}")
}

/// Resolve `params` against `series`. Explicit values are kept as given;
/// missing entries follow these rules:
///
/// * offsets start at 0 and place each series right after the previous one,
/// * labels are `Plot 00`, `Plot 01`, ...,
/// * colors come from the repeated Set1 palette by position,
/// * marker colors copy the series color,
/// * line styles are solid and markers are none.
pub fn normalize<S: AsRef<[f64]>>(series: &[S], params: &SeriesParams) -> Result<NormalizedSeriesSet> {
    if series.is_empty() {
        return Err(UtilsError::EmptyInput("list of series to plot"));
    }
    let lens: Vec<usize> = series.iter().map(|s| s.as_ref().len()).collect();
    let n = lens.len();

    let start_offsets = resolve_offsets(&lens, params.start_offsets.as_deref())?;
    let labels = fill("labels", params.labels.as_deref(), n, |i| Ok(default_label(i)))?;
    let colors = fill("colors", params.colors.as_deref(), n, |i| {
        palette::auto_color(i).ok_or(UtilsError::PaletteExhausted { index: i, capacity: CAPACITY })
    })?;
    let marker_colors = fill("marker colors", params.marker_colors.as_deref(), n, |i| Ok(colors[i]))?;
    let line_styles = fill("line styles", params.line_styles.as_deref(), n, |_| Ok(LineStyle::Solid))?;
    let markers = fill("markers", params.markers.as_deref(), n, |_| Ok(Marker::None))?;

    let x_ranges = start_offsets
        .iter()
        .zip(&lens)
        .enumerate()
        .map(|(index, (&offset, &len))| Ok(offset..segment_end(index, offset, len)?))
        .collect::<Result<Vec<_>>>()?;

    Ok(NormalizedSeriesSet { start_offsets, labels, colors, line_styles, markers, marker_colors, x_ranges })
}

const FIRST_OFFSET: [i64; 1] = [0];

fn segment_end(index: usize, offset: i64, len: usize) -> Result<i64> {
    i64::try_from(len)
        .ok()
        .and_then(|l| offset.checked_add(l))
        .ok_or(UtilsError::OffsetOverflow { index, offset, len })
}

fn resolve_offsets(lens: &[usize], given: Option<&[i64]>) -> Result<Vec<i64>> {
    let given: &[i64] = match given {
        Some(g) if !g.is_empty() => g,
        _ => &FIRST_OFFSET,
    };
    if given.len() > lens.len() {
        log::warn!("ignoring {} start offsets beyond the last series", given.len() - lens.len());
    }
    let mut out: Vec<i64> = Vec::with_capacity(lens.len());
    for i in 0..lens.len() {
        let offset = match given.get(i) {
            Some(&o) => o,
            // i > 0 here: index 0 is always present in `given`
            None => segment_end(i - 1, out[i - 1], lens[i - 1])?,
        };
        out.push(offset);
    }
    Ok(out)
}

fn fill<T: Clone>(
    what: &'static str,
    given: Option<&[T]>,
    n: usize,
    mut default: impl FnMut(usize) -> Result<T>,
) -> Result<Vec<T>> {
    let given = given.unwrap_or(&[]);
    if given.len() > n {
        log::warn!("ignoring {} {what} beyond the last series", given.len() - n);
    }
    if given.len() < n {
        log::debug!("defaulting {} of {n} {what}", n - given.len());
    }
    (0..n)
        .map(|i| match given.get(i) {
            Some(v) => Ok(v.clone()),
            None => default(i),
        })
        .collect()
}
