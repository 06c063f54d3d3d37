//! Truecolor terminal preview of a built theme.
//!
//! Overlay colors are flattened onto the editor background so the swatch shows
//! what the editor would actually paint.

use owo_colors::OwoColorize;
use std::fmt::{Display, Write};

use crate::{colors::Color, compose::ThemeColorMap, palette::Palette};

const SWATCH: &str = "      ";

/// Extension trait for painting strings with theme colors
pub trait Swatch: OwoColorize {
    /// Paint the text with `color` as its foreground
    #[inline]
    fn painted(self, color: Color) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = color.rgb_components();
        format!("{}", self.truecolor(r, g, b))
    }

    /// Paint `color` behind the text
    #[inline]
    fn filled(self, color: Color) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = color.rgb_components();
        format!("{}", self.on_truecolor(r, g, b))
    }
}

impl<T: OwoColorize + Display> Swatch for T {}

/// One swatch row per palette tone and accent
pub fn render_palette(palette: &Palette) -> String {
    let a = &palette.accents;
    let accents = [
        a.red, a.green, a.yellow, a.blue, a.purple, a.aqua, a.orange, a.brown,
    ];

    let mut out = format!("{}\n", palette.name);
    for row in [palette.base.ordered(), accents] {
        for color in row {
            out.push_str(&SWATCH.filled(color));
        }
        out.push('\n');
    }
    out
}

/// One line per key: swatch, hex value and key name
pub fn render_swatches(map: &ThemeColorMap) -> String {
    let backdrop = map.get("editor.background").unwrap_or(Color::BLACK);
    let width = map.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (key, color) in map.iter() {
        let shown = color.composite(&backdrop);
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} {:<10} {:<width$}",
            SWATCH.filled(shown),
            color.to_hex(),
            key,
            width = width
        );
    }
    out
}
