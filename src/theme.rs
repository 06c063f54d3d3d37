//! The complete theme document: workbench colors plus token rules.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    compose::{compose, ThemeColorMap},
    context::PolarityContext,
    error::ThemeResult,
    palette::{Palette, Variant},
    tokens::{build_tokens, Tokens},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub variant: Variant,
    pub colors: ThemeColorMap,
    #[serde(flatten)]
    pub tokens: Tokens,
}

impl ThemeDocument {
    pub fn build(palette: &Palette) -> ThemeResult<Self> {
        let ctx = PolarityContext::new(palette);

        let measured = if ctx.is_dark {
            Variant::Dark
        } else {
            Variant::Light
        };
        if measured != palette.variant {
            warn!(
                palette = %palette.name,
                tagged = ?palette.variant,
                ?measured,
                "palette tag disagrees with measured background; deriving as {:?}",
                measured
            );
        }

        let colors = compose(&ctx)?;
        let tokens = build_tokens(palette);
        debug!(
            palette = %palette.name,
            colors = colors.len(),
            token_rules = tokens.token_colors.len(),
            "built theme"
        );

        Ok(Self {
            name: palette.name.clone(),
            variant: palette.variant,
            colors,
            tokens,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{gruvalized_dark, gruvalized_light};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_document_layout() {
        let doc = ThemeDocument::build(&gruvalized_dark()).unwrap();
        let value: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(value["name"], "Gruvalized Dark");
        assert_eq!(value["type"], "dark");
        assert_eq!(value["colors"]["editor.background"], "#1D2021");
        assert_eq!(value["semanticHighlighting"], true);
        assert!(value["tokenColors"].is_array());
        assert!(value["semanticTokenColors"].is_object());
    }

    #[test]
    fn test_colors_and_tokens_do_not_overlap() {
        let doc = ThemeDocument::build(&gruvalized_light()).unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        let mut top: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        top.sort();
        assert_eq!(
            top,
            vec![
                "colors",
                "name",
                "semanticHighlighting",
                "semanticTokenColors",
                "tokenColors",
                "type",
            ]
        );
    }

    #[test]
    fn test_mislabeled_palette_keeps_tag_but_derives_measured() {
        let mut palette = gruvalized_dark();
        palette.variant = Variant::Light;
        let doc = ThemeDocument::build(&palette).unwrap();
        assert_eq!(doc.variant, Variant::Light);
        assert_eq!(
            doc.colors.get("button.foreground").map(|c| c.to_hex()),
            Some("#000000".to_string())
        );
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let doc = ThemeDocument::build(&gruvalized_light()).unwrap();
        let json = doc.to_json().unwrap();
        assert!(json.starts_with("{\n  \"name\": \"Gruvalized Light\""));
    }
}
