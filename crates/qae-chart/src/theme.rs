// File: crates/qae-chart/src/theme.rs
// Summary: Figure chrome colors (background, grid, axes, text, legend frame).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White figure with black text, the usual notebook look.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 235, 235),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            plot_background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            legend_background: skia::Color::from_argb(204, 0xee, 0xe8, 0xd5),
            legend_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            plot_background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            title: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
            legend_background: skia::Color::from_argb(204, 0x07, 0x36, 0x42),
            legend_border: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),
        }
    }

    pub fn black_white() -> Self {
        Self {
            name: "black-white",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(0, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(255, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0, 0, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
        Theme::black_white(),
    ]
}

/// Find a theme by its `name` (case-insensitive, `_` and `-` interchangeable), falling back to classic.
pub fn find(name: &str) -> Theme {
    let wanted = name.replace('_', "-");
    for t in presets() { if t.name.eq_ignore_ascii_case(&wanted) { return t; } }
    Theme::classic()
}
