//! Standard output sink

use super::Sink;
use crate::error::Result;
use std::io::{self, BufWriter, Write};

/// Sink writing UTF-8 text to the process's standard output
///
/// Standard output is shared with the rest of the process, so closing this
/// sink only flushes it.
#[derive(Debug)]
pub struct ConsoleSink {
    writer: BufWriter<io::Stdout>,
}

impl ConsoleSink {
    /// Create a sink bound to standard output
    pub fn new() -> Self {
        Self {
            writer: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    /// Always `false`: standard output is never closed
    fn is_closed(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
