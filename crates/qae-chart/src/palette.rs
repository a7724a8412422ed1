// File: crates/qae-chart/src/palette.rs
// Summary: Categorical palette used for automatic series coloring.

use crate::style::Color;

/// ColorBrewer "Set1" qualitative palette.
pub const SET1: [Color; 9] = [
    Color::rgb(228, 26, 28),   // red
    Color::rgb(55, 126, 184),  // blue
    Color::rgb(77, 175, 74),   // green
    Color::rgb(152, 78, 163),  // purple
    Color::rgb(255, 127, 0),   // orange
    Color::rgb(255, 255, 51),  // yellow
    Color::rgb(166, 86, 40),   // brown
    Color::rgb(247, 129, 191), // pink
    Color::rgb(153, 153, 153), // grey
];

/// Number of times the base palette is repeated for automatic coloring.
pub const REPEATS: usize = 3;

/// Number of series that can receive an automatic color.
pub const CAPACITY: usize = SET1.len() * REPEATS;

/// Automatic color for series `index`, or `None` past [`CAPACITY`].
pub fn auto_color(index: usize) -> Option<Color> {
    if index < CAPACITY {
        Some(SET1[index % SET1.len()])
    } else {
        None
    }
}
