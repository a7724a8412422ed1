// File: crates/qae-chart/src/types.rs
// Summary: Shared types and constants (figure sizes, paddings).

/// Default surface width in pixels (8in at 72dpi).
pub const WIDTH: i32 = 576;
/// Default surface height in pixels (6in at 72dpi).
pub const HEIGHT: i32 = 432;
/// Default resolution used to turn inches into pixels.
pub const DPI: f32 = 72.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Insets grown by `factor` (used when the dpi is scaled up).
    pub fn scaled(&self, factor: f32) -> Self {
        let s = |v: u32| ((v as f32) * factor.max(0.0)).round() as u32;
        Self::new(s(self.left), s(self.right), s(self.top), s(self.bottom))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 20, 36, 56)
    }
}

/// Physical figure size, mirroring the `figsize`/`dpi` pair notebook users pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Multiply the resolution, keeping the physical size.
    pub fn scaled(self, scale: Option<f32>) -> Self {
        match scale {
            Some(s) if s > 0.0 => Self { dpi: self.dpi * s, ..self },
            _ => self,
        }
    }

    /// Pixel dimensions, never smaller than 1x1.
    pub fn pixels(&self) -> (i32, i32) {
        let w = (self.width_in * self.dpi).round().max(1.0) as i32;
        let h = (self.height_in * self.dpi).round().max(1.0) as i32;
        (w, h)
    }

    /// Ratio of this resolution to the default one.
    pub fn dpi_factor(&self) -> f32 {
        self.dpi / DPI
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(8.0, 6.0, DPI)
    }
}
