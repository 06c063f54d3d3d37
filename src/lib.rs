#![forbid(unsafe_code)]

//! # Gruvalized
//!
//! Derives complete editor color themes from a small hand-authored palette.
//!
//! ## Overview
//!
//! A [`Palette`] holds eight neutral tones and eight accents. From it the crate
//! derives several hundred uniquely keyed workbench colors:
//!
//! - **Color math**: hex, RGB and HSL conversion plus lighten, darken and alpha
//! - **Polarity**: light or dark is measured from the background, never trusted
//!   from the palette's tag, and flips the direction of tonal shifts everywhere
//! - **Regions**: independent builders for each workbench area, each owning a
//!   disjoint set of key namespaces
//! - **Composition**: one flat [`ThemeColorMap`]; a key emitted twice is a
//!   [`ThemeError::StructuralCollision`]
//!
//! ## Core Components
//!
//! - [`Color`]: RGB color with optional alpha, and the [`Hsl`] intermediate
//! - [`PolarityContext`]: the working colors every region reads
//! - [`Region`]: the closed set of region builders
//! - [`ThemeColorMap`]: the composed, ordered color map
//! - [`ThemeDocument`]: colors plus token rules, ready to serialize
//!
//! ## Example Usage
//!
//! ```rust
//! use gruvalized::{build_workbench, palette::gruvalized_dark};
//!
//! fn main() -> gruvalized::ThemeResult<()> {
//!     let colors = build_workbench(&gruvalized_dark())?;
//!     assert_eq!(
//!         colors.get("editor.background").map(|c| c.to_hex()),
//!         Some("#1D2021".to_string())
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `colors`: color math
//! - `context`: polarity detection and shared builder conventions
//! - `regions`: per-area builders
//! - `compose`: merging fragments into one map
//! - `tokens`: syntax and semantic token rules
//! - `theme`: the full theme document
//! - `emit`: writing documents to disk
//! - `preview`: terminal swatches
//! - `error`: error types and handling
//!
//! ## Error Handling
//!
//! Fallible operations return [`ThemeResult`]. [`ThemeError`] implements
//! `miette::Diagnostic`, so malformed hex strings render with the offending
//! character highlighted.

/// Re-exports of core components
pub use colors::{Color, Hsl, DEFAULT_ALPHA, TONAL_STEP};
pub use compose::{build_workbench, compose, ThemeColorMap};
pub use context::PolarityContext;
pub use error::{ThemeError, ThemeResult};
pub use palette::{Palette, Variant};
pub use regions::Region;
pub use theme::ThemeDocument;

/// Color math and conversions
pub mod colors;
/// Fragment merging and the composed color map
pub mod compose;
/// Polarity detection and shared working colors
pub mod context;
/// Writing theme files
pub mod emit;
/// Error types and handling
pub mod error;
/// Input palettes
pub mod palette;
/// Terminal preview
pub mod preview;
/// Region builders
pub mod regions;
/// Complete theme documents
pub mod theme;
/// Syntax token rules
pub mod tokens;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_both_builtin_themes_compose_without_collisions() {
        for palette in Palette::builtin() {
            let map = build_workbench(&palette).unwrap();
            let keys: HashSet<_> = map.iter().map(|(key, _)| key).collect();
            assert_eq!(keys.len(), map.len());
            assert!(map.len() > 150, "only {} keys", map.len());
        }
    }

    #[test]
    fn test_light_and_dark_share_a_key_set() {
        let [light, dark] = Palette::builtin();
        let light: Vec<_> = build_workbench(&light)
            .unwrap()
            .iter()
            .map(|(k, _)| k)
            .collect();
        let dark: Vec<_> = build_workbench(&dark)
            .unwrap()
            .iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn test_every_value_is_six_or_eight_digit_hex() {
        for palette in Palette::builtin() {
            for (key, color) in build_workbench(&palette).unwrap().iter() {
                let hex = color.to_hex();
                assert!(
                    hex.len() == 7 || hex.len() == 9,
                    "{} has malformed value {}",
                    key,
                    hex
                );
                assert!(hex[1..]
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
            }
        }
    }
}
