use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

#[derive(Debug, Diagnostic)]
pub enum ThemeError {
    #[diagnostic(
        code(gruvalized::invalid_format),
        url(docsrs),
        help("expected 3 or 6 hex digits, optionally prefixed with '#'")
    )]
    InvalidFormat {
        #[source_code]
        src: String,
        #[label("invalid hex color here")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(code(gruvalized::collision), url(docsrs))]
    StructuralCollision {
        key: String,
        first: &'static str,
        second: &'static str,
    },

    #[diagnostic(code(gruvalized::io), url(docsrs))]
    Io { path: PathBuf, msg: String },

    #[diagnostic(code(gruvalized::palette), url(docsrs))]
    Palette { path: PathBuf, msg: String },

    #[diagnostic(
        code(gruvalized::duplicate_output),
        url(docsrs),
        help("give each palette a distinct name")
    )]
    DuplicateOutput {
        file: String,
        first: String,
        second: String,
    },
}

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ThemeError::InvalidFormat { src, msg, .. } => {
                write!(f, "Invalid hex color {:?}: {}", src, msg)
            }
            ThemeError::StructuralCollision { key, first, second } => write!(
                f,
                "Key {:?} emitted by both the {} and {} regions",
                key, first, second
            ),
            ThemeError::Io { path, msg } => write!(f, "IO error at {}: {}", path.display(), msg),
            ThemeError::Palette { path, msg } => {
                write!(f, "Unreadable palette {}: {}", path.display(), msg)
            }
            ThemeError::DuplicateOutput {
                file,
                first,
                second,
            } => write!(
                f,
                "Themes {:?} and {:?} would both be written to {}",
                first, second, file
            ),
        }
    }
}

impl Error for ThemeError {}

impl ThemeError {
    pub fn invalid_format(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    pub fn collision(key: impl Into<String>, first: &'static str, second: &'static str) -> Self {
        Self::StructuralCollision {
            key: key.into(),
            first,
            second,
        }
    }

    pub fn io(path: impl Into<PathBuf>, err: impl Display) -> Self {
        Self::Io {
            path: path.into(),
            msg: err.to_string(),
        }
    }

    pub fn palette(path: impl Into<PathBuf>, err: impl Display) -> Self {
        Self::Palette {
            path: path.into(),
            msg: err.to_string(),
        }
    }

    pub fn duplicate_output(
        file: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateOutput {
            file: file.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_creation() {
        let err = ThemeError::invalid_format("#12G456", (3, 1), "non-hex character 'G'");

        match err {
            ThemeError::InvalidFormat { src, err_span, msg } => {
                assert_eq!(src, "#12G456");
                assert_eq!(err_span, (3, 1).into());
                assert_eq!(msg, "non-hex character 'G'");
            }
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_collision_display_names_both_regions() {
        let err = ThemeError::collision("widget.shadow", "Lists", "Notifications");
        assert_eq!(
            err.to_string(),
            "Key \"widget.shadow\" emitted by both the Lists and Notifications regions"
        );
    }

    #[test]
    fn test_duplicate_output_display() {
        let err = ThemeError::duplicate_output(
            "gruvalized-dark-color-theme.json",
            "Gruvalized Dark",
            "gruvalized dark",
        );
        assert_eq!(
            err.to_string(),
            "Themes \"Gruvalized Dark\" and \"gruvalized dark\" would both be written to \
             gruvalized-dark-color-theme.json"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = ThemeError::io("themes/x.json", "permission denied");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("gruvalized::io".to_string())
        );
    }
}
