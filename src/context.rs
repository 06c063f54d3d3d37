//! Working colors shared by every region builder.
//!
//! A [`PolarityContext`] is derived once per palette. Region builders read it
//! and never measure polarity on their own.

use crate::{
    colors::Color,
    palette::{Accents, Palette},
};

/// Lightness below which a background counts as dark
const DARK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityContext {
    pub bg: Color,
    pub panel: Color,
    pub selection: Color,
    pub fg: Color,
    pub dim: Color,
    pub accents: Accents,
    pub is_dark: bool,
    pub border: Color,
    pub hover_bg: Color,
    pub inactive_tab_bg: Color,
}

impl PolarityContext {
    pub fn new(palette: &Palette) -> Self {
        let base = &palette.base;
        let (bg, panel, selection) = (base.base3, base.base2, base.base1);
        let (fg, dim) = (base.base03, base.base02);

        let is_dark = bg.lightness() < DARK_THRESHOLD;

        let border = if is_dark {
            panel.lighten(0.12)
        } else {
            panel.darken(0.12)
        };
        // Hover lightens for both polarities
        let hover_bg = if is_dark {
            panel.lighten(0.06)
        } else {
            panel.lighten(0.03)
        };
        let inactive_tab_bg = if is_dark {
            panel.darken(0.02)
        } else {
            panel.lighten(0.02)
        };

        Self {
            bg,
            panel,
            selection,
            fg,
            dim,
            accents: palette.accents,
            is_dark,
            border,
            hover_bg,
            inactive_tab_bg,
        }
    }

    /// Text drawn on an accent-colored surface
    #[inline]
    pub fn contrast_text(&self) -> Color {
        if self.is_dark {
            Color::BLACK
        } else {
            self.bg
        }
    }

    /// `color` as a translucent overlay, with opacity picked by polarity
    #[inline]
    pub fn overlay(&self, color: Color, dark: f64, light: f64) -> Color {
        color.with_opacity(if self.is_dark { dark } else { light })
    }

    /// Move `color` away from the background: lighter on dark themes, darker on light ones
    pub fn emphasize(&self, color: Color, by: f64) -> Color {
        if self.is_dark {
            color.lighten(by)
        } else {
            color.darken(by)
        }
    }

    /// Move `color` toward the background
    pub fn recede(&self, color: Color, by: f64) -> Color {
        if self.is_dark {
            color.darken(by)
        } else {
            color.lighten(by)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{gruvalized_dark, gruvalized_light, Variant};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_polarity_detection() {
        let light = PolarityContext::new(&gruvalized_light());
        assert_eq!(light.bg.to_hex(), "#FAF5E7");
        assert!(!light.is_dark);

        let dark = PolarityContext::new(&gruvalized_dark());
        assert_eq!(dark.bg.to_hex(), "#1D2021");
        assert!(dark.is_dark);
    }

    #[test]
    fn test_polarity_ignores_author_tag() {
        let mut mislabeled = gruvalized_dark();
        mislabeled.variant = Variant::Light;
        assert!(PolarityContext::new(&mislabeled).is_dark);
    }

    #[test]
    fn test_slots_copy_base_tones() {
        let palette = gruvalized_dark();
        let ctx = PolarityContext::new(&palette);
        assert_eq!(ctx.panel, palette.base.base2);
        assert_eq!(ctx.selection, palette.base.base1);
        assert_eq!(ctx.fg, palette.base.base03);
        assert_eq!(ctx.dim, palette.base.base02);
        assert_eq!(ctx.accents, palette.accents);
    }

    #[test]
    fn test_border_follows_polarity() {
        let dark = PolarityContext::new(&gruvalized_dark());
        assert_eq!(dark.border, dark.panel.lighten(0.12));
        assert!(dark.border.lightness() > dark.panel.lightness());

        let light = PolarityContext::new(&gruvalized_light());
        assert_eq!(light.border, light.panel.darken(0.12));
        assert!(light.border.lightness() < light.panel.lightness());
    }

    #[test]
    fn test_hover_always_lightens() {
        let dark = PolarityContext::new(&gruvalized_dark());
        assert_eq!(dark.hover_bg, dark.panel.lighten(0.06));
        assert!(dark.hover_bg.lightness() > dark.panel.lightness());

        let light = PolarityContext::new(&gruvalized_light());
        assert_eq!(light.hover_bg, light.panel.lighten(0.03));
        assert!(light.hover_bg.lightness() > light.panel.lightness());
    }

    #[test]
    fn test_inactive_tab_recedes() {
        let dark = PolarityContext::new(&gruvalized_dark());
        assert_eq!(dark.inactive_tab_bg, dark.panel.darken(0.02));

        let light = PolarityContext::new(&gruvalized_light());
        assert_eq!(light.inactive_tab_bg, light.panel.lighten(0.02));
    }

    #[test]
    fn test_contrast_text() {
        let dark = PolarityContext::new(&gruvalized_dark());
        assert_eq!(dark.contrast_text().to_hex(), "#000000");

        let light = PolarityContext::new(&gruvalized_light());
        assert_eq!(light.contrast_text(), light.bg);
    }

    #[test]
    fn test_overlay_picks_polarity_opacity() {
        let dark = PolarityContext::new(&gruvalized_dark());
        let light = PolarityContext::new(&gruvalized_light());
        let blue = dark.accents.blue;

        assert_eq!(dark.overlay(blue, 0.5, 0.2).alpha(), Some(128));
        assert_eq!(light.overlay(blue, 0.5, 0.2).alpha(), Some(51));
    }

    #[test]
    fn test_emphasize_and_recede_are_mirrored() {
        let dark = PolarityContext::new(&gruvalized_dark());
        let light = PolarityContext::new(&gruvalized_light());
        let orange = dark.accents.orange;

        assert_eq!(dark.emphasize(orange, 0.06), orange.lighten(0.06));
        assert_eq!(light.emphasize(orange, 0.06), orange.darken(0.06));
        assert_eq!(dark.recede(orange, 0.04), orange.darken(0.04));
        assert_eq!(light.recede(orange, 0.04), orange.lighten(0.04));
    }
}
