// File: crates/qae-chart/src/figure.rs
// Summary: Row of charts sharing one canvas, with an optional super-title.

use std::path::Path;

use skia_safe as skia;

use crate::chart::{Chart, RenderOptions};
use crate::error::Result;
use crate::export::{self, ImageFormat, Paint};
use crate::geometry::RectF;
use crate::text::{Anchor, TextShaper};

pub struct Figure {
    pub panels: Vec<Chart>,
    pub suptitle: Option<String>,
    pub suptitle_size: f32,
}

impl Figure {
    pub fn new(panels: Vec<Chart>) -> Self {
        Self { panels, suptitle: None, suptitle_size: 14.0 }
    }

    pub fn single(chart: Chart) -> Self {
        Self::new(vec![chart])
    }

    pub fn set_suptitle(&mut self, title: impl Into<String>, size: f32) {
        self.suptitle = Some(title.into());
        self.suptitle_size = size;
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        export::encode(self, opts, ImageFormat::Png)
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        export::rgba8(self, opts)
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        export::write_file(self, opts, ImageFormat::Svg, path.as_ref())
    }

    /// Write to `path`, choosing the encoder from its extension and creating parent directories.
    pub fn save(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        export::save(self, opts, path.as_ref())
    }
}

impl Paint for Figure {
    fn paint(&self, canvas: &skia::Canvas, area: RectF, opts: &RenderOptions, shaper: &TextShaper) {
        let mut bg = skia::Paint::default();
        bg.set_color(opts.theme.background);
        canvas.draw_rect(area.to_skia(), &bg);

        let k = opts.text_scale.max(0.1);
        let mut body = area;
        if let (Some(title), true) = (&self.suptitle, opts.draw_labels) {
            let size = self.suptitle_size * k;
            let band = size * 1.8;
            shaper.draw(canvas, title, (area.left + area.right) * 0.5, area.top + size * 1.2, size, opts.theme.title, Anchor::Center, true);
            body = RectF::from_ltrb(area.left, area.top + band, area.right, area.bottom);
        }

        for (chart, cell) in self.panels.iter().zip(body.columns(self.panels.len())) {
            chart.paint(canvas, cell, opts, shaper);
        }
    }
}
