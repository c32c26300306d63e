//! In-memory sink

use super::Sink;
use crate::error::Result;

/// Sink accumulating text in a growable `String`
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    /// Create an empty buffer sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated text
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Take the accumulated text
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Sink for BufferSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Always `false`: the buffer stays readable after the run
    fn is_closed(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "memory buffer".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_accumulates() {
        let mut sink = BufferSink::new();
        sink.write_str("北京").unwrap();
        sink.write_str("/ns\n").unwrap();
        sink.close().unwrap();
        assert_eq!(sink.as_str(), "北京/ns\n");
        assert_eq!(sink.into_string(), "北京/ns\n");
    }
}
