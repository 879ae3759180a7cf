//! Styled text runs
//!
//! A paragraph is rendered as an ordered sequence of runs. Concatenating the
//! text of every run reproduces the source paragraph exactly; styling never
//! adds or drops characters.

use serde::{Deserialize, Serialize};

/// Emphasis applied to a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStyle {
    Plain,
    Bold,
    /// Raised ordinal suffix, bold when it sits inside a bold phrase
    Superscript { bold: bool },
}

/// A fragment of a paragraph with uniform styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Bold,
        }
    }

    pub fn superscript(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Superscript { bold },
        }
    }

    /// Plain or bold run depending on the surrounding emphasis
    pub fn emphasized(text: impl Into<String>, bold: bool) -> Self {
        if bold {
            Self::bold(text)
        } else {
            Self::plain(text)
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self.style,
            RunStyle::Bold | RunStyle::Superscript { bold: true }
        )
    }

    pub fn is_superscript(&self) -> bool {
        matches!(self.style, RunStyle::Superscript { .. })
    }
}

/// Concatenate the text of a run sequence
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert!(StyledRun::bold("x").is_bold());
        assert!(!StyledRun::plain("x").is_bold());
        assert!(StyledRun::superscript("st", true).is_bold());
        assert!(StyledRun::superscript("st", false).is_superscript());
        assert!(!StyledRun::superscript("st", false).is_bold());
    }

    #[test]
    fn test_plain_text() {
        let runs = vec![
            StyledRun::plain("on the "),
            StyledRun::bold("21"),
            StyledRun::superscript("st", true),
        ];
        assert_eq!(plain_text(&runs), "on the 21st");
    }
}
