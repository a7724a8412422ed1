// File: crates/qae-chart/src/lib.rs
// Summary: Library entry point; exports the chart model and its Skia renderer.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod style;
pub mod palette;
pub mod legend;
pub mod figure;
pub mod export;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::{Guide, GuidePosition, Series, SeriesType};
pub use axis::{Axis, ScaleKind};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use style::{Color, LineStyle, Marker, SeriesStyle};
pub use legend::{Legend, LegendLocation};
pub use figure::Figure;
pub use export::ImageFormat;
pub use types::FigureSize;
pub use error::{ChartError, Result};
