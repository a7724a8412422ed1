// File: crates/qae-chart/src/export.rs
// Summary: Raster/SVG surfaces and encoders shared by `Chart` and `Figure`.

use std::path::Path;

use skia_safe as skia;

use crate::chart::RenderOptions;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::text::TextShaper;

/// Something that can draw itself into a rectangle of a Skia canvas.
pub trait Paint {
    fn paint(&self, canvas: &skia::Canvas, area: RectF, opts: &RenderOptions, shaper: &TextShaper);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Svg,
}

impl ImageFormat {
    /// Infer the output format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(ChartError::UnsupportedFormat(ext)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
            ImageFormat::Svg => "svg",
        }
    }
}

fn full_area(opts: &RenderOptions) -> RectF {
    RectF::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32)
}

fn raster<P: Paint + ?Sized>(item: &P, opts: &RenderOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(ChartError::SurfaceCreation { width: opts.width, height: opts.height })?;
    let shaper = TextShaper::new();
    item.paint(surface.canvas(), full_area(opts), opts, &shaper);
    Ok(surface)
}

fn svg<P: Paint + ?Sized>(item: &P, opts: &RenderOptions) -> Vec<u8> {
    let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
    let canvas = skia::svg::Canvas::new(bounds, None);
    let shaper = TextShaper::new();
    item.paint(&canvas, full_area(opts), opts, &shaper);
    canvas.end().as_bytes().to_vec()
}

/// Encode `item` in memory.
pub fn encode<P: Paint + ?Sized>(item: &P, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>> {
    let skia_format = match format {
        ImageFormat::Svg => return Ok(svg(item, opts)),
        ImageFormat::Png => skia::EncodedImageFormat::PNG,
        ImageFormat::Jpeg => skia::EncodedImageFormat::JPEG,
        ImageFormat::Webp => skia::EncodedImageFormat::WEBP,
    };
    let mut surface = raster(item, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia_format)
        .ok_or(ChartError::Encode(format.name()))?;
    Ok(data.as_bytes().to_vec())
}

/// RGBA8 (unpremultiplied) pixels as `(pixels, width, height, stride)`.
pub fn rgba8<P: Paint + ?Sized>(item: &P, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster(item, opts)?;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::ReadPixels);
    }
    Ok((pixels, opts.width as u32, opts.height as u32, stride))
}

pub fn write_file<P: Paint + ?Sized>(item: &P, opts: &RenderOptions, format: ImageFormat, path: &Path) -> Result<()> {
    let bytes = encode(item, opts, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} ({})", path.display(), format.name());
    Ok(())
}

/// Write `item` to `path` in the format named by its extension.
pub fn save<P: Paint + ?Sized>(item: &P, opts: &RenderOptions, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    write_file(item, opts, format, path)
}
