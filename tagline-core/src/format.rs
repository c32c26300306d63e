//! Per-line output format shared by every sink

use crate::error::{OutputError, Result};
use serde::{Deserialize, Serialize};

/// Character placed between a word and its tag
pub const DEFAULT_TAG_DELIMITER: char = '/';

/// Separator between tokens of one output line
pub const WORD_SEPARATOR: char = ' ';

/// Line terminator written at every line end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    /// The terminator text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Formatting constants of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineFormat {
    /// Delimiter between word and tag in tagged mode
    pub tag_delimiter: char,
    /// Terminator emitted at each line end
    pub line_terminator: LineTerminator,
}

impl LineFormat {
    /// Check that the tag delimiter is a visible character
    ///
    /// A whitespace or control delimiter would be indistinguishable from
    /// the word separator or the line terminator.
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.tag_delimiter;
        if delimiter.is_whitespace() || delimiter.is_control() {
            return Err(OutputError::Config(format!(
                "tag delimiter must be a visible character, got {delimiter:?}"
            )));
        }
        Ok(())
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            tag_delimiter: DEFAULT_TAG_DELIMITER,
            line_terminator: LineTerminator::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = LineFormat::default();
        assert_eq!(format.tag_delimiter, '/');
        assert_eq!(format.line_terminator.as_str(), "\n");
    }

    #[test]
    fn test_validate_delimiter() {
        assert!(LineFormat::default().validate().is_ok());
        for delimiter in [' ', '\t', '\n', '\u{3000}', '\0'] {
            let format = LineFormat {
                tag_delimiter: delimiter,
                ..LineFormat::default()
            };
            assert!(matches!(format.validate(), Err(OutputError::Config(_))));
        }
    }

    #[test]
    fn test_crlf_terminator() {
        assert_eq!(LineTerminator::CrLf.as_str(), "\r\n");
    }
}
