//! Color math for theme derivation.
//!
//! Provides the primitives every region builder leans on:
//! - RGB color representation with an optional alpha byte
//! - Hex parsing and formatting (`#RGB`, `#RRGGBB`, `#RRGGBBAA` output)
//! - HSL conversion with hue expressed as a fraction of a turn
//! - Tonal transforms (lighten, darken) and alpha overlays
//! - Integration with owo-colors and ratatui
//!
//! Channels are rounded with [`f64::round`] (ties away from zero). Every value
//! that reaches rounding is already clamped to `[0, 1]` and non-negative, so
//! the rule behaves like round-half-up.

use ratatui::style::Color as RatatuiColor;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::{ThemeError, ThemeResult};

/// Lightness offset used for one "step" of lightening or darkening.
pub const TONAL_STEP: f64 = 0.06;

/// Opacity applied by [`alpha`] when no specific overlay strength is wanted.
pub const DEFAULT_ALPHA: f64 = 0.15;

#[inline]
fn clamp_unit(n: f64) -> f64 {
    n.clamp(0.0, 1.0)
}

#[inline]
fn to_byte(n: f64) -> u8 {
    (clamp_unit(n) * 255.0).round() as u8
}

/// An RGB color, optionally carrying an alpha byte for overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: Option<u8>,
}

/// Hue, saturation and lightness, each in `[0, 1]` (hue is `[0, 1)`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque RGB color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional, case is ignored)
    pub fn from_hex(hex: &str) -> ThemeResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let offset = hex.len() - digits.len();

        if let Some((pos, bad)) = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ThemeError::invalid_format(
                hex,
                (offset + pos, bad.len_utf8()),
                format!("non-hex character {:?}", bad),
            ));
        }

        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|e| {
                ThemeError::invalid_format(hex, (0, hex.len()), e.to_string())
            })
        };

        match digits.len() {
            3 => Ok(Self::rgb(
                byte(&digits[0..1])? * 17,
                byte(&digits[1..2])? * 17,
                byte(&digits[2..3])? * 17,
            )),
            6 => Ok(Self::rgb(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            n => Err(ThemeError::invalid_format(
                hex,
                (0, hex.len()),
                format!("expected 3 or 6 hex digits, found {}", n),
            )),
        }
    }

    /// Uppercase `#RRGGBB`, or `#RRGGBBAA` when an alpha byte is present
    pub fn to_hex(&self) -> String {
        match self.alpha {
            None => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            Some(a) => format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, a),
        }
    }

    /// Convert to HSL. Achromatic colors report hue and saturation of zero.
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }

    /// Create an opaque color from HSL components
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        if s == 0.0 {
            let v = to_byte(l);
            return Self::rgb(v, v, v);
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Self::rgb(
            to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_byte(hue_to_channel(p, q, h)),
            to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Raise HSL lightness by `by` (clamped to `[0, 1]`)
    pub fn lighten(&self, by: f64) -> Self {
        self.shift_lightness(clamp_unit(by))
    }

    /// Lower HSL lightness by `by` (clamped to `[0, 1]`)
    pub fn darken(&self, by: f64) -> Self {
        self.shift_lightness(-clamp_unit(by))
    }

    fn shift_lightness(&self, delta: f64) -> Self {
        let hsl = self.to_hsl();
        let shifted = Self::from_hsl(Hsl {
            l: clamp_unit(hsl.l + delta),
            ..hsl
        });
        Self {
            alpha: self.alpha,
            ..shifted
        }
    }

    /// Attach an alpha byte of `round(clamp(amount) * 255)`
    pub fn with_opacity(&self, amount: f64) -> Self {
        Self {
            alpha: Some(to_byte(amount)),
            ..*self
        }
    }

    /// Get the RGB components
    pub fn rgb_components(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The alpha byte, if this is an overlay color
    pub fn alpha(&self) -> Option<u8> {
        self.alpha
    }

    /// Perceived lightness, the `l` of [`Color::to_hsl`]
    pub fn lightness(&self) -> f64 {
        self.to_hsl().l
    }

    /// Flatten an overlay onto an opaque backdrop. Opaque colors are returned as-is.
    pub fn composite(&self, backdrop: &Color) -> Self {
        let Some(a) = self.alpha else {
            return *self;
        };
        let amount = f64::from(a) / 255.0;
        let blend = |top: u8, bottom: u8| {
            (f64::from(bottom) * (1.0 - amount) + f64::from(top) * amount).round() as u8
        };
        Self::rgb(
            blend(self.r, backdrop.r),
            blend(self.g, backdrop.g),
            blend(self.b, backdrop.b),
        )
    }

    /// Convert to owo-colors RGB type
    pub fn to_owo_rgb(&self) -> owo_colors::Rgb {
        owo_colors::Rgb(self.r, self.g, self.b)
    }

    /// Convert to ratatui Color
    pub fn to_ratatui(&self) -> RatatuiColor {
        RatatuiColor::Rgb(self.r, self.g, self.b)
    }
}

impl From<Color> for owo_colors::Rgb {
    fn from(color: Color) -> Self {
        color.to_owo_rgb()
    }
}

impl From<Color> for RatatuiColor {
    fn from(color: Color) -> Self {
        color.to_ratatui()
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Parse a hex color string. See [`Color::from_hex`].
pub fn hex_to_rgb(hex: &str) -> ThemeResult<Color> {
    Color::from_hex(hex)
}

/// Format the RGB channels as uppercase `#RRGGBB`, ignoring any alpha
pub fn rgb_to_hex(color: Color) -> String {
    let (r, g, b) = color.rgb_components();
    Color::rgb(r, g, b).to_hex()
}

pub fn rgb_to_hsl(color: Color) -> Hsl {
    color.to_hsl()
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    Color::from_hsl(Hsl { h, s, l })
}

/// Lighten a hex color; [`TONAL_STEP`] is the conventional amount
pub fn lighten(hex: &str, by: f64) -> ThemeResult<String> {
    Ok(rgb_to_hex(hex_to_rgb(hex)?.lighten(by)))
}

/// Darken a hex color; [`TONAL_STEP`] is the conventional amount
pub fn darken(hex: &str, by: f64) -> ThemeResult<String> {
    Ok(rgb_to_hex(hex_to_rgb(hex)?.darken(by)))
}

/// Append an alpha byte to a hex color, producing `#RRGGBBAA`.
/// [`DEFAULT_ALPHA`] is the conventional amount.
pub fn alpha(hex: &str, amount: f64) -> ThemeResult<String> {
    Ok(hex_to_rgb(hex)?.with_opacity(amount).to_hex())
}
