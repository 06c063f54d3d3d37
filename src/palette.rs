//! Input palettes: eight neutral tones and eight accents per theme variant.
//!
//! The two built-in palettes are compile-time constants. Additional palettes can
//! be decoded from JSON, where every color must be a valid hex string.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    colors::Color,
    error::{ThemeError, ThemeResult},
};

/// The author's light/dark tag. Advisory only; derivation measures the
/// background instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

/// Neutral tones, from most background-like (`base3`) to most
/// foreground-like (`base03`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BaseTones {
    pub base3: Color,
    pub base2: Color,
    pub base1: Color,
    pub base0: Color,
    pub base00: Color,
    pub base01: Color,
    pub base02: Color,
    pub base03: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Accents {
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
    pub aqua: Color,
    pub orange: Color,
    pub brown: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub name: String,
    #[serde(rename = "type")]
    pub variant: Variant,
    pub base: BaseTones,
    pub accents: Accents,
}

impl BaseTones {
    /// Tones in conventional order, background end first
    pub fn ordered(&self) -> [Color; 8] {
        [
            self.base3,
            self.base2,
            self.base1,
            self.base0,
            self.base00,
            self.base01,
            self.base02,
            self.base03,
        ]
    }
}

impl Palette {
    /// Decode a palette from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and decode a palette file
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        Self::from_json(&json).map_err(|e| ThemeError::palette(path, e))
    }

    /// Both built-in variants, light first
    pub fn builtin() -> [Palette; 2] {
        [gruvalized_light(), gruvalized_dark()]
    }
}

pub mod gruvalized {
    //! Raw values for the built-in Gruvalized palettes

    use super::{Accents, BaseTones};
    use crate::colors::Color;

    pub const LIGHT_BASE: BaseTones = BaseTones {
        base3: Color::rgb(250, 245, 231),  // #FAF5E7
        base2: Color::rgb(247, 241, 223),  // #F7F1DF
        base1: Color::rgb(233, 225, 191),  // #E9E1BF
        base0: Color::rgb(217, 208, 174),  // #D9D0AE
        base00: Color::rgb(184, 174, 142), // #B8AE8E
        base01: Color::rgb(138, 128, 98),  // #8A8062
        base02: Color::rgb(106, 106, 106), // #6A6A6A
        base03: Color::rgb(26, 26, 26),    // #1A1A1A
    };

    pub const LIGHT_ACCENTS: Accents = Accents {
        red: Color::rgb(204, 36, 29),     // #CC241D
        green: Color::rgb(68, 140, 39),   // #448C27
        yellow: Color::rgb(215, 153, 33), // #D79921
        blue: Color::rgb(75, 131, 205),   // #4B83CD
        purple: Color::rgb(122, 62, 157), // #7A3E9D
        aqua: Color::rgb(104, 157, 106),  // #689D6A
        orange: Color::rgb(214, 93, 14),  // #D65D0E
        brown: Color::rgb(111, 47, 0),    // #6F2F00
    };

    pub const DARK_BASE: BaseTones = BaseTones {
        base3: Color::rgb(29, 32, 33),     // #1D2021 editor background
        base2: Color::rgb(40, 40, 40),     // #282828 panels and tabs
        base1: Color::rgb(60, 56, 54),     // #3C3836 selection
        base0: Color::rgb(80, 73, 69),     // #504945
        base00: Color::rgb(102, 92, 84),   // #665C54
        base01: Color::rgb(124, 111, 100), // #7C6F64
        base02: Color::rgb(146, 131, 116), // #928374
        base03: Color::rgb(251, 241, 199), // #FBF1C7 strong foreground
    };

    pub const DARK_ACCENTS: Accents = Accents {
        red: Color::rgb(204, 36, 29),      // #CC241D
        green: Color::rgb(152, 151, 26),   // #98971A
        yellow: Color::rgb(215, 153, 33),  // #D79921
        blue: Color::rgb(69, 133, 136),    // #458588
        purple: Color::rgb(177, 98, 134),  // #B16286
        aqua: Color::rgb(104, 157, 106),   // #689D6A
        orange: Color::rgb(214, 93, 14),   // #D65D0E
        brown: Color::rgb(168, 153, 132),  // #A89984
    };
}

pub fn gruvalized_light() -> Palette {
    Palette {
        name: "Gruvalized Light".to_string(),
        variant: Variant::Light,
        base: gruvalized::LIGHT_BASE,
        accents: gruvalized::LIGHT_ACCENTS,
    }
}

pub fn gruvalized_dark() -> Palette {
    Palette {
        name: "Gruvalized Dark".to_string(),
        variant: Variant::Dark,
        base: gruvalized::DARK_BASE,
        accents: gruvalized::DARK_ACCENTS,
    }
}
