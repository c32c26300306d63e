//! Splitting of over-long input lines

use crate::error::{EngineError, Result};

/// Default upper bound on the characters handed to the segmenter at once
pub const DEFAULT_MAX_SEGMENT_CHARS: usize = 20_000;

/// Splits a line into pieces of bounded length
///
/// A cut is placed right after the last whitespace or punctuation mark that
/// fits in the window; when there is none the line is cut at exactly
/// `max_chars` characters. Cuts always fall on character boundaries and no
/// input character is dropped.
#[derive(Debug, Clone, Copy)]
pub struct LineSplitter {
    max_chars: usize,
}

impl LineSplitter {
    /// Create a splitter; `max_chars` must be positive
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(EngineError::Config(
                "max segment length must be greater than 0".into(),
            ));
        }
        Ok(Self { max_chars })
    }

    /// Maximum characters per piece
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split `line` into pieces
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut rest = line;
        while !rest.is_empty() {
            let (piece, tail) = rest.split_at(self.cut_point(rest));
            pieces.push(piece);
            rest = tail;
        }
        pieces
    }

    fn cut_point(&self, text: &str) -> usize {
        let mut last_break = None;
        for (count, (idx, ch)) in text.char_indices().enumerate() {
            if count == self.max_chars {
                return last_break.unwrap_or(idx);
            }
            if is_break_after(ch) {
                last_break = Some(idx + ch.len_utf8());
            }
        }
        text.len()
    }
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_SEGMENT_CHARS,
        }
    }
}

fn is_break_after(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '。' | '！' | '？' | '；' | '，' | '、' | '.' | '!' | '?' | ';' | ','
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_is_one_piece() {
        let splitter = LineSplitter::default();
        assert_eq!(splitter.split("我爱北京"), vec!["我爱北京"]);
        assert!(splitter.split("").is_empty());
    }

    #[test]
    fn test_prefers_punctuation_cut() {
        let splitter = LineSplitter::new(5).unwrap();
        assert_eq!(splitter.split("我爱北京。天安门"), vec!["我爱北京。", "天安门"]);
    }

    #[test]
    fn test_hard_cut_without_break() {
        let splitter = LineSplitter::new(3).unwrap();
        assert_eq!(splitter.split("一二三四五六七"), vec!["一二三", "四五六", "七"]);
    }

    #[test]
    fn test_cut_after_last_break_in_window() {
        let splitter = LineSplitter::new(6).unwrap();
        assert_eq!(splitter.split("ab cd efgh"), vec!["ab cd ", "efgh"]);
    }

    #[test]
    fn test_pieces_cover_input() {
        let splitter = LineSplitter::new(4).unwrap();
        let line = "今天，天气很好。我们去公园 散步吧！";
        let pieces = splitter.split(line);
        assert_eq!(pieces.concat(), line);
        assert!(pieces.iter().all(|p| p.chars().count() <= 4));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(LineSplitter::new(0), Err(EngineError::Config(_))));
    }
}
