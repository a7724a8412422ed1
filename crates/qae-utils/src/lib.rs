// File: crates/qae-utils/src/lib.rs
// Summary: Library entry point; notebook helpers built on `qae-chart`.

pub mod bits;
pub mod smoothing;
pub mod normalize;
pub mod charts;
pub mod circuit;
pub mod timestamp;
pub mod error;

pub use bits::{binary_labels, bits_to_int, int_to_bits, min_bit_width, BitVector};
pub use smoothing::{smooth, ExponentialSmoother};
pub use normalize::{normalize, NormalizedSeriesSet, SeriesParams};
pub use charts::{
    meas_plot, multi_plot_flat_ts, plot_compare_hist, plot_hist, CompareHistOptions, HistOptions,
    MeasPlotOptions, MultiPlotOptions, Plot, Task,
};
pub use circuit::{draw_circuit, CircuitDiagram, CircuitDrawConfig, DrawLevel, DrawStyle};
pub use timestamp::{format_timestamp, timestamp_now};
pub use error::{Result, UtilsError};
