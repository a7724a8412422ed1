// File: crates/qae-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Pixel rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Shrink by `insets`; a degenerate result collapses to a 1px rect.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left + 1.0);
        let bottom = (self.bottom - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Split horizontally into `n` equal columns.
    pub fn columns(&self, n: usize) -> Vec<RectF> {
        let n = n.max(1);
        let w = self.width() / n as f32;
        (0..n)
            .map(|i| RectF::from_ltwh(self.left + w * i as f32, self.top, w, self.height()))
            .collect()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
