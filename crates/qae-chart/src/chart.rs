// File: crates/qae-chart/src/chart.rs
// Summary: Chart struct (explicit canvas state) and its Skia drawing pipeline.

use skia_safe as skia;

use crate::export::{self, ImageFormat, Paint};
use crate::error::Result;
use crate::geometry::RectF;
use crate::grid::axis_ticks;
use crate::legend::{Legend, LegendLayout, HANDLE_LEN};
use crate::scale::{AxisScale, Orientation};
use crate::series::{Guide, GuidePosition, Series, SeriesType};
use crate::style::{Color, LineStyle, Marker, SeriesStyle};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{FigureSize, Insets, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Titles, tick labels and legend text; off for pixel-stable snapshots.
    pub draw_labels: bool,
    /// Multiplier for font sizes, stroke widths and insets.
    pub text_scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            text_scale: 1.0,
        }
    }
}

impl RenderOptions {
    /// Options sized from physical dimensions; fonts and insets follow the dpi.
    pub fn from_figure(figure: FigureSize) -> Self {
        let (width, height) = figure.pixels();
        let factor = figure.dpi_factor();
        Self {
            width,
            height,
            insets: Insets::default().scaled(factor),
            text_scale: factor,
            ..Self::default()
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub guides: Vec<Guide>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
    pub show_grid: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            guides: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
            show_grid: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_guide(&mut self, guide: Guide) {
        self.guides.push(guide);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        export::write_file(self, opts, ImageFormat::Png, output_png_path.as_ref())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        export::encode(self, opts, ImageFormat::Png)
    }

    /// Raw RGBA8 pixels as `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        export::rgba8(self, opts)
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        export::write_file(self, opts, ImageFormat::Svg, output_svg_path.as_ref())
    }

    /// Write to `path`, choosing the encoder from its extension and creating parent directories.
    pub fn save(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        export::save(self, opts, path.as_ref())
    }
}

impl Paint for Chart {
    fn paint(&self, canvas: &skia::Canvas, area: RectF, opts: &RenderOptions, shaper: &TextShaper) {
        let theme = &opts.theme;
        let k = opts.text_scale.max(0.1);
        fill_rect(canvas, area, theme.background);

        let mut insets = opts.insets;
        if self.title.is_some() && opts.draw_labels {
            insets.top += (14.0 * k) as u32;
        }
        if opts.draw_labels && self.x_axis.tick_rotation.abs() > 1.0 {
            insets.bottom += self.rotated_label_room(shaper, 10.0 * k);
        }
        let plot = area.inset(&insets);
        fill_rect(canvas, plot, theme.plot_background);

        let sx = AxisScale::for_axis(&self.x_axis, plot.left, plot.right, Orientation::Horizontal);
        let sy = AxisScale::for_axis(&self.y_axis, plot.top, plot.bottom, Orientation::Vertical);
        let target_x = ((plot.width() / (80.0 * k)) as usize).max(2);
        let target_y = ((plot.height() / (50.0 * k)) as usize).max(2);
        let x_ticks = visible(axis_ticks(&self.x_axis, target_x), &sx);
        let y_ticks = visible(axis_ticks(&self.y_axis, target_y), &sy);

        if self.show_grid {
            draw_grid(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme.grid);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, Some(true));
        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &sx, &sy, s, k),
                SeriesType::Bar => draw_bar_series(canvas, &sx, &sy, s),
            }
        }
        for g in &self.guides {
            draw_guide(canvas, plot, &sx, &sy, g, k);
        }
        canvas.restore();

        draw_frame(canvas, plot, theme.axis_line, k);
        draw_ticks(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme.tick, k);

        if opts.draw_labels {
            let tick_size = 10.0 * k;
            for (v, label) in &x_ticks {
                let x = sx.to_px(*v);
                if self.x_axis.tick_rotation.abs() > 1.0 {
                    shaper.draw_rotated(canvas, label, x, plot.bottom + 8.0 * k, self.x_axis.tick_rotation, tick_size, theme.tick, Anchor::Right);
                } else {
                    shaper.draw(canvas, label, x, plot.bottom + 18.0 * k, tick_size, theme.tick, Anchor::Center, false);
                }
            }
            for (v, label) in &y_ticks {
                shaper.draw(canvas, label, plot.left - 6.0 * k, sy.to_px(*v) + tick_size * 0.35, tick_size, theme.tick, Anchor::Right, false);
            }

            let label_size = 12.0 * k;
            if !self.x_axis.label.is_empty() {
                shaper.draw(canvas, &self.x_axis.label, (plot.left + plot.right) * 0.5, area.bottom - 8.0 * k, label_size, theme.axis_label, Anchor::Center, false);
            }
            if !self.y_axis.label.is_empty() {
                shaper.draw_rotated(canvas, &self.y_axis.label, area.left + 14.0 * k, (plot.top + plot.bottom) * 0.5, 90.0, label_size, theme.axis_label, Anchor::Center);
            }
            if let Some(title) = &self.title {
                shaper.draw(canvas, title, (plot.left + plot.right) * 0.5, plot.top - 10.0 * k, 13.0 * k, theme.title, Anchor::Center, false);
            }
            if let Some(legend) = &self.legend {
                draw_legend(canvas, plot, &sx, &sy, self, legend, theme, shaper, k);
            }
        }
    }
}

impl Chart {
    /// Extra bottom inset so rotated x tick labels stay on the canvas.
    fn rotated_label_room(&self, shaper: &TextShaper, size: f32) -> u32 {
        let longest = self
            .x_axis
            .tick_labels
            .iter()
            .flatten()
            .map(|(_, l)| shaper.measure_width(l, size))
            .fold(0.0f32, f32::max);
        (longest * self.x_axis.tick_rotation.to_radians().sin().abs()) as u32
    }
}

// ---- helpers ----------------------------------------------------------------

fn visible(ticks: Vec<(f64, String)>, scale: &AxisScale) -> Vec<(f64, String)> {
    ticks.into_iter().filter(|(v, _)| scale.contains(*v)).collect()
}

fn fill_rect(canvas: &skia::Canvas, r: RectF, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(r.to_skia(), &paint);
}

fn stroke_paint(color: Color, width: f32, line_style: LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color.to_skia());
    if let Some(intervals) = line_style.intervals(width) {
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: RectF, sx: &AxisScale, sy: &AxisScale, xt: &[(f64, String)], yt: &[(f64, String)], color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for (v, _) in xt {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for (v, _) in yt {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: RectF, color: skia::Color, k: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(0.8 * k);
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_ticks(canvas: &skia::Canvas, plot: RectF, sx: &AxisScale, sy: &AxisScale, xt: &[(f64, String)], yt: &[(f64, String)], color: skia::Color, k: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8 * k);
    let len = 3.5 * k;
    for (v, _) in xt {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + len), &paint);
    }
    for (v, _) in yt {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left - len, y), (plot.left, y), &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &AxisScale, sy: &AxisScale, series: &Series, k: f32) {
    let style = &series.style;
    let points: Vec<Option<(f32, f32)>> = series
        .data_xy
        .iter()
        .map(|&(x, y)| {
            let ok = x.is_finite() && y.is_finite() && !(sy.log && y <= 0.0) && !(sx.log && x <= 0.0);
            ok.then(|| (sx.to_px(x), sy.to_px(y)))
        })
        .collect();

    if style.line_style != LineStyle::None {
        // Non-finite samples break the polyline instead of bridging the gap
        let mut path = skia::Path::new();
        let mut pen_down = false;
        for p in &points {
            match p {
                Some(pt) if pen_down => { path.line_to(*pt); }
                Some(pt) => { path.move_to(*pt); pen_down = true; }
                None => pen_down = false,
            }
        }
        let stroke = stroke_paint(style.color, style.line_width * k, style.line_style);
        canvas.draw_path(&path, &stroke);
    }

    if style.marker != Marker::None {
        for &(x, y) in points.iter().flatten() {
            draw_marker(canvas, style, x, y, k);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, sx: &AxisScale, sy: &AxisScale, series: &Series) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(series.style.color.to_skia());

    let half = series.bar_width * 0.5;
    let base = if sy.log { sy.vmin } else { 0.0 };
    for &(x, h) in &series.data_xy {
        if !x.is_finite() || !h.is_finite() { continue; }
        let left = sx.to_px(x - half);
        let right = sx.to_px(x + half);
        let y0 = sy.to_px_clamped(base);
        let y1 = sy.to_px_clamped(h);
        let rect = skia::Rect::from_ltrb(left.min(right), y0.min(y1), left.max(right), y0.max(y1));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_guide(canvas: &skia::Canvas, plot: RectF, sx: &AxisScale, sy: &AxisScale, guide: &Guide, k: f32) {
    let paint = stroke_paint(guide.color, guide.line_width * k, guide.line_style);
    match guide.position {
        GuidePosition::X(x) => {
            let px = sx.to_px(x);
            canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
        }
        GuidePosition::Y(y) => {
            let py = sy.to_px(y);
            canvas.draw_line((plot.left, py), (plot.right, py), &paint);
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, style: &SeriesStyle, x: f32, y: f32, k: f32) {
    let r = style.marker_size * k * 0.5;
    let mut face = skia::Paint::default();
    face.set_anti_alias(true);
    face.set_style(skia::paint::Style::Fill);
    face.set_color(style.marker_face_color.to_skia());
    let edge = stroke_paint(style.marker_edge_color, 1.0 * k, LineStyle::Solid);

    match style.marker {
        Marker::None => {}
        Marker::Point => {
            canvas.draw_circle((x, y), r * 0.5, &face);
        }
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &face);
            canvas.draw_circle((x, y), r, &edge);
        }
        Marker::Square => {
            let rect = skia::Rect::from_ltrb(x - r, y - r, x + r, y + r);
            canvas.draw_rect(rect, &face);
            canvas.draw_rect(rect, &edge);
        }
        Marker::Triangle | Marker::Diamond => {
            let mut path = skia::Path::new();
            if style.marker == Marker::Triangle {
                path.move_to((x, y - r));
                path.line_to((x + r, y + r));
                path.line_to((x - r, y + r));
            } else {
                path.move_to((x, y - r));
                path.line_to((x + r, y));
                path.line_to((x, y + r));
                path.line_to((x - r, y));
            }
            path.close();
            canvas.draw_path(&path, &face);
            canvas.draw_path(&path, &edge);
        }
        Marker::Plus => {
            canvas.draw_line((x - r, y), (x + r, y), &edge);
            canvas.draw_line((x, y - r), (x, y + r), &edge);
        }
        Marker::Cross => {
            canvas.draw_line((x - r, y - r), (x + r, y + r), &edge);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &edge);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: RectF,
    sx: &AxisScale,
    sy: &AxisScale,
    chart: &Chart,
    legend: &Legend,
    theme: &Theme,
    shaper: &TextShaper,
    k: f32,
) {
    let entries: Vec<&Series> = chart.series.iter().filter(|s| s.label.is_some()).collect();
    if entries.is_empty() { return; }
    let size = legend.font_size * k;
    let widths: Vec<f32> = entries
        .iter()
        .map(|s| shaper.measure_width(s.label.as_deref().unwrap_or_default(), size))
        .collect();
    let layout = LegendLayout::compute(&widths, legend.columns, size);

    let data_px: Vec<(f32, f32)> = chart
        .series
        .iter()
        .flat_map(|s| s.data_xy.iter().map(|&(x, y)| (sx.to_px(x), sy.to_px(y))))
        .collect();
    let location = layout.resolve(&plot, legend.location, &data_px);
    let bx = layout.placed(&plot, location);

    fill_rect(canvas, bx, theme.legend_background);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(bx.to_skia(), &border);

    for (s, &(cx, cy)) in entries.iter().zip(&layout.cells) {
        let x0 = bx.left + cx;
        let mid = bx.top + cy + layout.row_height * 0.5;
        match s.series_type {
            SeriesType::Bar => {
                let rect = RectF::from_ltrb(x0, mid - size * 0.35, x0 + HANDLE_LEN, mid + size * 0.35);
                fill_rect(canvas, rect, s.style.color.to_skia());
            }
            SeriesType::Line => {
                if s.style.line_style != LineStyle::None {
                    let paint = stroke_paint(s.style.color, s.style.line_width * k, s.style.line_style);
                    canvas.draw_line((x0, mid), (x0 + HANDLE_LEN, mid), &paint);
                }
                if s.style.marker != Marker::None {
                    draw_marker(canvas, &s.style, x0 + HANDLE_LEN * 0.5, mid, k);
                }
            }
        }
        let label = s.label.as_deref().unwrap_or_default();
        shaper.draw(canvas, label, x0 + HANDLE_LEN + 8.0, mid + size * 0.35, size, theme.axis_label, Anchor::Left, false);
    }
}
