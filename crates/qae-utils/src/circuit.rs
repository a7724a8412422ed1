// File: crates/qae-utils/src/circuit.rs
// Summary: Drawing configuration for circuit diagrams produced by an external drawer.

use std::fmt;
use std::str::FromStr;

use qae_chart::{theme, Figure, FigureSize, RenderOptions, Theme};

use crate::charts::Plot;
use crate::error::{Result, UtilsError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    BlackWhite,
    BlackWhiteDark,
    Sketch,
    #[default]
    Pennylane,
    PennylaneSketch,
    SketchDark,
    SolarizedLight,
    SolarizedDark,
    Default,
}

impl DrawStyle {
    pub const ALL: [DrawStyle; 9] = [
        DrawStyle::BlackWhite,
        DrawStyle::BlackWhiteDark,
        DrawStyle::Sketch,
        DrawStyle::Pennylane,
        DrawStyle::PennylaneSketch,
        DrawStyle::SketchDark,
        DrawStyle::SolarizedLight,
        DrawStyle::SolarizedDark,
        DrawStyle::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DrawStyle::BlackWhite => "black_white",
            DrawStyle::BlackWhiteDark => "black_white_dark",
            DrawStyle::Sketch => "sketch",
            DrawStyle::Pennylane => "pennylane",
            DrawStyle::PennylaneSketch => "pennylane_sketch",
            DrawStyle::SketchDark => "sketch_dark",
            DrawStyle::SolarizedLight => "solarized_light",
            DrawStyle::SolarizedDark => "solarized_dark",
            DrawStyle::Default => "default",
        }
    }

    /// Chart theme used for the figure surrounding the diagram.
    pub fn theme(self) -> Theme {
        match self {
            DrawStyle::BlackWhite | DrawStyle::SolarizedLight | DrawStyle::SolarizedDark => theme::find(self.name()),
            DrawStyle::BlackWhiteDark | DrawStyle::SketchDark => Theme::dark(),
            _ => Theme::classic(),
        }
    }
}

impl FromStr for DrawStyle {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        DrawStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| UtilsError::UnknownName { kind: "draw style", value: s.to_string() })
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which compilation stage of the circuit to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawLevel {
    User,
    Top,
    Device,
    Gradient,
    Index(usize),
}

impl FromStr for DrawLevel {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(DrawLevel::User),
            "top" => Ok(DrawLevel::Top),
            "device" => Ok(DrawLevel::Device),
            "gradient" => Ok(DrawLevel::Gradient),
            other => other
                .parse::<usize>()
                .map(DrawLevel::Index)
                .map_err(|_| UtilsError::UnknownName { kind: "draw level", value: s.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircuitDrawConfig {
    pub style: DrawStyle,
    /// Font size of the super-title.
    pub font_size: f32,
    /// Resolution multiplier.
    pub scale: Option<f32>,
    pub title: Option<String>,
    /// Decimal places for gate parameters.
    pub decimals: usize,
    pub level: Option<DrawLevel>,
}

impl Default for CircuitDrawConfig {
    fn default() -> Self {
        Self { style: DrawStyle::Pennylane, font_size: 20.0, scale: None, title: None, decimals: 2, level: None }
    }
}

/// A circuit that knows how to lay itself out as a figure.
pub trait CircuitDiagram {
    fn render_diagram(&self, style: DrawStyle, decimals: usize, level: Option<DrawLevel>) -> Result<Figure>;

    /// Physical size of the diagram before scaling.
    fn figure_size(&self) -> FigureSize {
        FigureSize::default()
    }
}

/// Render `circuit` once with `config`, scaling the resolution and adding the super-title.
pub fn draw_circuit<C: CircuitDiagram + ?Sized>(config: &CircuitDrawConfig, circuit: &C) -> Result<Plot<Figure>> {
    let mut figure = circuit.render_diagram(config.style, config.decimals, config.level)?;
    if let Some(title) = &config.title {
        figure.set_suptitle(title.clone(), config.font_size);
    }
    let size = circuit.figure_size().scaled(config.scale);
    log::debug!("drawing circuit in style {} at {:.0} dpi", config.style, size.dpi);

    let mut options = RenderOptions::from_figure(size);
    options.theme = config.style.theme();
    Ok(Plot { canvas: figure, options })
}
