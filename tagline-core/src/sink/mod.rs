//! Writable destinations bound to output handlers

use crate::error::Result;

pub mod buffer;
pub mod console;
pub mod file;

pub use buffer::BufferSink;
pub use console::ConsoleSink;
pub use file::FileSink;

/// A writable text destination
///
/// A sink is owned by exactly one handler. `close` is called once, at run
/// termination; sinks that do not own their resource only flush there.
pub trait Sink: Send {
    /// Write text to the sink
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Push buffered output to the underlying resource
    fn flush(&mut self) -> Result<()>;

    /// Flush and release the underlying resource
    fn close(&mut self) -> Result<()>;

    /// Whether the sink has released its resource
    fn is_closed(&self) -> bool;

    /// Short description used in log messages
    fn describe(&self) -> String;
}
