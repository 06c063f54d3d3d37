//! Syntax token colors: TextMate scope rules and semantic token styles.
//!
//! Most entries come straight from the palette accents. A handful of fixed
//! colors stay the same across variants.

use serde::{Serialize, Serializer};

use crate::{colors::Color, palette::Palette};

pub const COMMENT: Color = Color::rgb(170, 170, 170); // #AAAAAA
pub const ILLEGAL: Color = Color::rgb(102, 0, 0); // #660000
pub const OPERATOR: Color = Color::rgb(119, 119, 119); // #777777
pub const CONSTANT: Color = Color::rgb(171, 101, 38); // #AB6526
pub const FUNCTION: Color = Color::rgb(170, 55, 49); // #AA3731

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scope {
    One(&'static str),
    Many(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenColor {
    pub name: &'static str,
    pub scope: Scope,
    pub settings: TokenSettings,
}

impl TokenColor {
    fn new(name: &'static str, scope: Scope, foreground: Color) -> Self {
        Self {
            name,
            scope,
            settings: TokenSettings {
                font_style: None,
                foreground,
            },
        }
    }

    fn font_style(mut self, style: &'static str) -> Self {
        self.settings.font_style = Some(style);
        self
    }
}

/// A semantic token rule: either a bare color or a styled entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SemanticStyle {
    Color(Color),
    Styled {
        #[serde(skip_serializing_if = "Option::is_none")]
        foreground: Option<Color>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        bold: bool,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        strikethrough: bool,
    },
}

impl SemanticStyle {
    fn bold(color: Color) -> Self {
        Self::Styled {
            foreground: Some(color),
            bold: true,
            strikethrough: false,
        }
    }

    fn plain(color: Color) -> Self {
        Self::Styled {
            foreground: Some(color),
            bold: false,
            strikethrough: false,
        }
    }
}

/// Semantic token rules in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticTokenColors(Vec<(&'static str, SemanticStyle)>);

impl SemanticTokenColors {
    pub fn get(&self, token: &str) -> Option<&SemanticStyle> {
        self.0.iter().find(|(t, _)| *t == token).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SemanticTokenColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(token, style)| (token, style)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    pub token_colors: Vec<TokenColor>,
    pub semantic_highlighting: bool,
    pub semantic_token_colors: SemanticTokenColors,
}

pub fn build_tokens(palette: &Palette) -> Tokens {
    use Scope::{Many, One};
    use SemanticStyle::Color as Bare;

    let a = &palette.accents;

    let token_colors = vec![
        TokenColor::new(
            "Comments",
            Many(vec!["comment", "punctuation.definition.comment"]),
            COMMENT,
        )
        .font_style("italic"),
        TokenColor::new(
            "Doc Comments",
            Many(vec!["comment.documentation", "comment.block.documentation"]),
            a.green,
        ),
        TokenColor::new("Invalid - Illegal", One("invalid.illegal"), ILLEGAL),
        TokenColor::new("Operators", One("keyword.operator"), OPERATOR),
        TokenColor::new("Keywords", Many(vec!["keyword", "storage"]), a.blue),
        TokenColor::new(
            "Types",
            Many(vec!["storage.type", "support.type"]),
            a.purple,
        ),
        TokenColor::new(
            "Language Constants",
            Many(vec!["constant.language", "support.constant", "variable.language"]),
            CONSTANT,
        ),
        TokenColor::new(
            "Variables",
            Many(vec!["variable", "support.variable"]),
            a.purple,
        ),
        TokenColor::new(
            "Functions",
            Many(vec!["entity.name.function", "support.function"]),
            FUNCTION,
        )
        .font_style("bold"),
        TokenColor::new("Strings", One("string"), a.green),
        TokenColor::new(
            "Numbers",
            Many(vec!["constant.numeric", "constant.character", "constant"]),
            CONSTANT,
        ),
    ];

    let semantic_token_colors = SemanticTokenColors(vec![
        ("namespace", Bare(a.purple)),
        ("class", SemanticStyle::bold(a.purple)),
        ("interface", SemanticStyle::bold(a.purple)),
        ("enum", SemanticStyle::plain(CONSTANT)),
        ("typeParameter", Bare(a.purple)),
        ("parameter", Bare(a.purple)),
        ("variable", Bare(a.purple)),
        ("property", Bare(a.purple)),
        ("function", SemanticStyle::bold(FUNCTION)),
        ("method", SemanticStyle::bold(FUNCTION)),
        ("string", Bare(a.green)),
        ("number", Bare(CONSTANT)),
        ("regexp", Bare(a.blue)),
        ("comment", Bare(COMMENT)),
        ("keyword", Bare(a.blue)),
        ("operator", Bare(OPERATOR)),
        ("modifier", Bare(a.blue)),
        (
            "deprecated",
            SemanticStyle::Styled {
                foreground: None,
                bold: false,
                strikethrough: true,
            },
        ),
    ]);

    Tokens {
        token_colors,
        semantic_highlighting: true,
        semantic_token_colors,
    }
}
