//! Constructors for the standard output handlers
//!
//! A `None` path is not an error: the file constructors return `Ok(None)`
//! to signal that no output was requested, and callers check for it before
//! driving a run.

use crate::charset::Charset;
use crate::config::OutputConfig;
use crate::error::Result;
use crate::handler::{
    ConsoleOutputHandler, FileOutputHandler, LineOutputHandler, OutputHandler,
    StringOutputHandler,
};
use crate::sink::{BufferSink, ConsoleSink, FileSink};
use std::path::Path;

/// Handler writing to standard output in UTF-8
///
/// Standard output is flushed at run termination but never closed.
pub fn create_default() -> ConsoleOutputHandler {
    LineOutputHandler::new(ConsoleSink::new())
}

/// Handler writing UTF-8 to `path`, creating or truncating it
pub fn create_from_file<P: AsRef<Path>>(path: Option<P>) -> Result<Option<FileOutputHandler>> {
    create_from_file_with_charset(path, None)
}

/// Handler writing to `path` in the charset called `charset_name`
///
/// The name is resolved before the file is touched, so an unknown charset
/// leaves no file behind.
pub fn create_from_file_with_charset_name<P: AsRef<Path>>(
    path: Option<P>,
    charset_name: Option<&str>,
) -> Result<Option<FileOutputHandler>> {
    let charset = Charset::resolve(None, charset_name)?;
    create_from_file_with_charset(path, Some(charset))
}

/// Handler writing to `path` in `charset`, UTF-8 when `None`
pub fn create_from_file_with_charset<P: AsRef<Path>>(
    path: Option<P>,
    charset: Option<Charset>,
) -> Result<Option<FileOutputHandler>> {
    let Some(path) = path else {
        log::debug!("no output path given; no handler created");
        return Ok(None);
    };
    let sink = FileSink::create(path, charset.unwrap_or_default())?;
    Ok(Some(LineOutputHandler::new(sink)))
}

/// Handler accumulating output in memory
///
/// ```rust
/// use tagline_core::{create_output_to_string, OutputHandler, TaggedWord};
///
/// let mut output = create_output_to_string();
/// output.handle_line_start().unwrap();
/// output
///     .handle_line_segment(&[TaggedWord::new("北京", "n")], false)
///     .unwrap();
/// output.handle_line_end().unwrap();
/// assert_eq!(output.as_str(), "北京/n\n");
/// ```
pub fn create_output_to_string() -> StringOutputHandler {
    LineOutputHandler::new(BufferSink::new())
}

/// Handler described by `config`
///
/// Returns `Ok(None)` when the configuration names no path.
pub fn create(config: &OutputConfig) -> Result<Option<Box<dyn OutputHandler>>> {
    config.validate()?;
    let charset = config.resolve_charset()?;
    let Some(path) = config.path.as_deref() else {
        log::debug!("no output path configured; no handler created");
        return Ok(None);
    };
    let sink = FileSink::create(path, charset)?;
    let handler = LineOutputHandler::with_format(sink, config.format)?
        .flush_each_line(config.flush_each_line);
    Ok(Some(Box::new(handler)))
}
