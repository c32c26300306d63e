//! Charset selection for file-backed sinks
//!
//! Names are resolved through the WHATWG label table of `encoding_rs`, so
//! `"utf8"`, `"UTF-8"`, `"gb2312"` and `" Shift_JIS "` all resolve. Only
//! selection happens here; nothing tries to detect the charset of existing
//! text.

use crate::error::{OutputError, Result};
use encoding_rs::{Encoder, EncoderResult, Encoding};
use std::fmt;
use std::str::FromStr;

/// Byte emitted in place of characters the target encoding cannot represent
const REPLACEMENT: &str = "?";

/// An output encoding resolved at handler construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// UTF-8, the default for every sink
    pub fn utf8() -> Self {
        Charset(encoding_rs::UTF_8)
    }

    /// Wrap an `encoding_rs` encoding
    pub fn from_encoding(encoding: &'static Encoding) -> Self {
        Charset(encoding)
    }

    /// Resolve a charset by name
    ///
    /// Labels mapping to the WHATWG "replacement" encoding are rejected
    /// along with unknown names, since nothing useful can be written in it.
    pub fn for_name(name: &str) -> Result<Self> {
        Encoding::for_label_no_replacement(name.as_bytes())
            .map(Charset)
            .ok_or_else(|| OutputError::UnknownEncoding(name.to_string()))
    }

    /// Resolve with precedence: typed charset, then name, then UTF-8
    pub fn resolve(charset: Option<Charset>, charset_name: Option<&str>) -> Result<Self> {
        match (charset, charset_name) {
            (Some(charset), _) => Ok(charset),
            (None, Some(name)) => Self::for_name(name),
            (None, None) => Ok(Self::utf8()),
        }
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// The underlying `encoding_rs` encoding
    pub fn encoding(&self) -> &'static Encoding {
        self.0
    }

    /// Create a streaming encoder for this charset
    pub fn new_encoder(&self) -> TextEncoder {
        if self.0 == encoding_rs::UTF_8 {
            TextEncoder::Utf8
        } else if self.0 == encoding_rs::UTF_16LE {
            TextEncoder::Utf16 { big_endian: false }
        } else if self.0 == encoding_rs::UTF_16BE {
            TextEncoder::Utf16 { big_endian: true }
        } else {
            TextEncoder::Legacy(self.0.new_encoder())
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::for_name(s)
    }
}

/// Streaming UTF-8 to charset encoder
///
/// `encoding_rs` only encodes into ASCII-compatible encodings (its UTF-16
/// encoders produce UTF-8), so UTF-16 is handled separately. No byte order
/// mark is written.
pub enum TextEncoder {
    /// Pass-through
    Utf8,
    /// UTF-16 in the given byte order
    Utf16 {
        /// Big-endian when set, little-endian otherwise
        big_endian: bool,
    },
    /// Any other encoding supported by `encoding_rs`
    Legacy(Encoder),
}

impl fmt::Debug for TextEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoder::Utf8 => f.write_str("Utf8"),
            TextEncoder::Utf16 { big_endian } => f
                .debug_struct("Utf16")
                .field("big_endian", big_endian)
                .finish(),
            TextEncoder::Legacy(encoder) => f
                .debug_tuple("Legacy")
                .field(&encoder.encoding().name())
                .finish(),
        }
    }
}

impl TextEncoder {
    /// Encode `text`, appending the bytes to `out`
    ///
    /// `last` must be set on the final call so that stateful encodings
    /// (ISO-2022-JP) return to their initial state. Unmappable characters
    /// become `?`.
    pub fn encode_into(&mut self, text: &str, out: &mut Vec<u8>, last: bool) {
        match self {
            TextEncoder::Utf8 => out.extend_from_slice(text.as_bytes()),
            TextEncoder::Utf16 { big_endian } => {
                out.reserve(text.len() * 2);
                for unit in text.encode_utf16() {
                    let bytes = if *big_endian {
                        unit.to_be_bytes()
                    } else {
                        unit.to_le_bytes()
                    };
                    out.extend_from_slice(&bytes);
                }
            }
            TextEncoder::Legacy(encoder) => encode_legacy(encoder, text, out, last),
        }
    }
}

fn encode_legacy(encoder: &mut Encoder, text: &str, out: &mut Vec<u8>, last: bool) {
    let mut remaining = text;
    out.reserve(remaining.len() + 16);
    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, out, last);
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => out.reserve(remaining.len() * 2 + 64),
            EncoderResult::Unmappable(_) => encode_legacy(encoder, REPLACEMENT, out, false),
        }
    }
}
