//! Output configuration
//!
//! One structure carries every construction option of the file handler,
//! replacing overloaded entry points. The charset may be given as a typed
//! [`Charset`] or by name; the typed value takes precedence, and the default
//! is UTF-8.

use crate::charset::Charset;
use crate::error::{OutputError, Result};
use crate::format::{LineFormat, LineTerminator};
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration of an output handler
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination file; `None` means no output is requested
    pub path: Option<PathBuf>,
    /// Charset name, resolved when the handler is created
    pub charset_name: Option<String>,
    /// Typed charset, overrides `charset_name`
    #[serde(skip)]
    pub charset: Option<Charset>,
    /// Line format constants
    pub format: LineFormat,
    /// Flush the sink at every line end
    pub flush_each_line: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            charset_name: None,
            charset: None,
            format: LineFormat::default(),
            flush_each_line: true,
        }
    }
}

impl OutputConfig {
    /// Create a configuration builder
    pub fn builder() -> OutputConfigBuilder {
        OutputConfigBuilder::default()
    }

    /// Parse a configuration from TOML
    ///
    /// ```toml
    /// path = "out.txt"
    /// charset_name = "gbk"
    /// flush_each_line = false
    ///
    /// [format]
    /// tag_delimiter = "_"
    /// line_terminator = "crlf"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: OutputConfig =
            toml::from_str(text).map_err(|e| OutputError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the charset with precedence: typed, then name, then UTF-8
    pub fn resolve_charset(&self) -> Result<Charset> {
        Charset::resolve(self.charset, self.charset_name.as_deref())
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        self.format.validate()
    }
}

/// Fluent builder for [`OutputConfig`]
#[derive(Debug, Default)]
pub struct OutputConfigBuilder {
    config: OutputConfig,
}

impl OutputConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Set the charset by name
    pub fn charset_name(mut self, name: impl Into<String>) -> Self {
        self.config.charset_name = Some(name.into());
        self
    }

    /// Set the typed charset
    pub fn charset(mut self, charset: Charset) -> Self {
        self.config.charset = Some(charset);
        self
    }

    /// Set the word/tag delimiter
    pub fn tag_delimiter(mut self, delimiter: char) -> Self {
        self.config.format.tag_delimiter = delimiter;
        self
    }

    /// Set the line terminator
    pub fn line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.config.format.line_terminator = terminator;
        self
    }

    /// Set whether every line end flushes the sink
    pub fn flush_each_line(mut self, flush: bool) -> Self {
        self.config.flush_each_line = flush;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<OutputConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
