// File: crates/qae-chart/src/style.rs
// Summary: Per-series visual style: colors, line styles and markers, parsed from
// the short matplotlib-like strings notebook callers are used to.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::ChartError;

/// Straight RGBA color, independent of the rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    /// Look up a named color. Accepts the CSS names used across the plotting
    /// helpers plus matplotlib's single-letter shorthands.
    pub fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "k" | "black" => Color::BLACK,
            "w" | "white" => Color::WHITE,
            "r" | "red" => Color::rgb(255, 0, 0),
            "g" => Color::rgb(0, 128, 0),
            "green" => Color::rgb(0, 128, 0),
            "b" | "blue" => Color::rgb(0, 0, 255),
            "c" | "cyan" => Color::rgb(0, 255, 255),
            "m" | "magenta" => Color::rgb(255, 0, 255),
            "y" | "yellow" => Color::rgb(255, 255, 0),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            "lightgray" | "lightgrey" => Color::LIGHT_GRAY,
            "lightblue" => Color::rgb(173, 216, 230),
            "navy" => Color::rgb(0, 0, 128),
            "pink" => Color::rgb(255, 192, 203),
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "brown" => Color::rgb(165, 42, 42),
            "olive" => Color::rgb(128, 128, 0),
            "teal" => Color::rgb(0, 128, 128),
            "linen" => Color::rgb(250, 240, 230),
            "salmon" => Color::rgb(250, 128, 114),
            "gold" => Color::rgb(255, 215, 0),
            _ => return None,
        };
        Some(c)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(digits.get(i..i + 1)?, 16).ok().map(|v| v * 17)
                };
                Some(Color::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Color::named(s)
            .or_else(|| Color::from_hex(s))
            .ok_or_else(|| ChartError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Markers only.
    None,
}

impl LineStyle {
    /// Dash intervals in pixels for a given stroke width, `None` for solid.
    pub fn intervals(self, width: f32) -> Option<Vec<f32>> {
        let w = width.max(1.0);
        match self {
            LineStyle::Solid | LineStyle::None => None,
            LineStyle::Dashed => Some(vec![3.7 * w, 1.6 * w]),
            LineStyle::Dotted => Some(vec![1.0 * w, 1.65 * w]),
            LineStyle::DashDot => Some(vec![6.4 * w, 1.6 * w, 1.0 * w, 1.6 * w]),
        }
    }
}

impl FromStr for LineStyle {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "solid" | "-" => Ok(LineStyle::Solid),
            "dashed" | "--" => Ok(LineStyle::Dashed),
            "dotted" | ":" => Ok(LineStyle::Dotted),
            "dashdot" | "-." => Ok(LineStyle::DashDot),
            "none" | "None" | "" | " " => Ok(LineStyle::None),
            other => Err(ChartError::InvalidStyle { kind: "line style", value: other.to_string() }),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::DashDot => "dashdot",
            LineStyle::None => "none",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    None,
    Point,
    Circle,
    Square,
    Triangle,
    Diamond,
    Plus,
    Cross,
}

impl FromStr for Marker {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" | "None" | "" => Ok(Marker::None),
            "." | "point" => Ok(Marker::Point),
            "o" | "circle" => Ok(Marker::Circle),
            "s" | "square" => Ok(Marker::Square),
            "^" | "triangle" => Ok(Marker::Triangle),
            "D" | "d" | "diamond" => Ok(Marker::Diamond),
            "+" | "plus" => Ok(Marker::Plus),
            "x" | "cross" => Ok(Marker::Cross),
            other => Err(ChartError::InvalidStyle { kind: "marker", value: other.to_string() }),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Marker::None => "none",
            Marker::Point => ".",
            Marker::Circle => "o",
            Marker::Square => "s",
            Marker::Triangle => "^",
            Marker::Diamond => "D",
            Marker::Plus => "+",
            Marker::Cross => "x",
        })
    }
}

/// Fully resolved drawing style of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    pub line_style: LineStyle,
    pub line_width: f32,
    pub marker: Marker,
    pub marker_size: f32,
    pub marker_edge_color: Color,
    pub marker_face_color: Color,
}

impl SeriesStyle {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            line_style: LineStyle::Solid,
            line_width: 1.5,
            marker: Marker::None,
            marker_size: 6.0,
            marker_edge_color: color,
            marker_face_color: color,
        }
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    pub fn with_marker(mut self, marker: Marker, edge: Color, face: Color) -> Self {
        self.marker = marker;
        self.marker_edge_color = edge;
        self.marker_face_color = face;
        self
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::solid(crate::palette::SET1[1])
    }
}
