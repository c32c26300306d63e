//! The seam where a segmentation algorithm plugs into the pipeline

use crate::error::Result;
use tagline_core::{TaggedWord, DEFAULT_TAG_DELIMITER};

/// Turns a piece of text into tagged words
pub trait Segmenter {
    /// Segment and tag `text`
    fn segment(&mut self, text: &str) -> Result<Vec<TaggedWord>>;
}

impl<F> Segmenter for F
where
    F: FnMut(&str) -> Result<Vec<TaggedWord>>,
{
    fn segment(&mut self, text: &str) -> Result<Vec<TaggedWord>> {
        self(text)
    }
}

/// Tag given to tokens that carry none
pub const DEFAULT_TAG: &str = "x";

/// Segmenter for text that is already tokenized
///
/// Each whitespace-separated token becomes one word. A token of the form
/// `word<delimiter>tag` keeps its tag (split at the last delimiter); other
/// tokens get [`DEFAULT_TAG`].
#[derive(Debug, Clone)]
pub struct WhitespaceSegmenter {
    delimiter: char,
}

impl WhitespaceSegmenter {
    /// Create a segmenter reading tags after `delimiter`
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for WhitespaceSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_DELIMITER)
    }
}

impl Segmenter for WhitespaceSegmenter {
    fn segment(&mut self, text: &str) -> Result<Vec<TaggedWord>> {
        Ok(text
            .split_whitespace()
            .map(|token| match token.rsplit_once(self.delimiter) {
                Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                    TaggedWord::new(word, tag)
                }
                _ => TaggedWord::new(token, DEFAULT_TAG),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretagged_tokens() {
        let mut segmenter = WhitespaceSegmenter::default();
        let words = segmenter.segment("我/r  爱/v\t北京/ns").unwrap();
        assert_eq!(
            words,
            vec![
                TaggedWord::new("我", "r"),
                TaggedWord::new("爱", "v"),
                TaggedWord::new("北京", "ns"),
            ]
        );
    }

    #[test]
    fn test_untagged_tokens_get_default_tag() {
        let mut segmenter = WhitespaceSegmenter::default();
        let words = segmenter.segment("hello / a/").unwrap();
        assert_eq!(
            words,
            vec![
                TaggedWord::new("hello", DEFAULT_TAG),
                TaggedWord::new("/", DEFAULT_TAG),
                TaggedWord::new("a/", DEFAULT_TAG),
            ]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let mut segmenter = WhitespaceSegmenter::new('_');
        let words = segmenter.segment("a/b_c").unwrap();
        assert_eq!(words, vec![TaggedWord::new("a/b", "c")]);
    }

    #[test]
    fn test_closure_segmenter() {
        let mut segmenter = |text: &str| -> Result<Vec<TaggedWord>> {
            Ok(text.chars().map(|c| TaggedWord::new(c, "w")).collect())
        };
        let words = Segmenter::segment(&mut segmenter, "ab").unwrap();
        assert_eq!(words.len(), 2);
    }
}
