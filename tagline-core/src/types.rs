//! Values produced by the segmenter and consumed by output handlers

use std::fmt;

/// One segmented token together with its linguistic tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedWord {
    /// The token text
    pub word: String,
    /// The part-of-speech (or other) tag
    pub tag: String,
}

impl TaggedWord {
    /// Create a new tagged word
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Append the rendered form of this word to `out`
    ///
    /// Renders `word` alone when `seg_only` is set, otherwise
    /// `word<delimiter>tag`.
    pub fn render_into(&self, out: &mut String, delimiter: char, seg_only: bool) {
        out.push_str(&self.word);
        if !seg_only {
            out.push(delimiter);
            out.push_str(&self.tag);
        }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.word, crate::format::DEFAULT_TAG_DELIMITER, self.tag)
    }
}

impl<W: Into<String>, T: Into<String>> From<(W, T)> for TaggedWord {
    fn from((word, tag): (W, T)) -> Self {
        Self::new(word, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_tag() {
        let word = TaggedWord::new("北京", "ns");
        let mut out = String::new();
        word.render_into(&mut out, '/', false);
        assert_eq!(out, "北京/ns");
    }

    #[test]
    fn test_render_seg_only() {
        let word = TaggedWord::new("北京", "ns");
        let mut out = String::from("x ");
        word.render_into(&mut out, '_', true);
        assert_eq!(out, "x 北京");
    }

    #[test]
    fn test_display_uses_default_delimiter() {
        let word: TaggedWord = ("欢迎", "v").into();
        assert_eq!(word.to_string(), "欢迎/v");
    }
}
