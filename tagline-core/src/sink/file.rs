//! File sink with charset conversion

use super::Sink;
use crate::charset::{Charset, TextEncoder};
use crate::error::{OutputError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink writing encoded text to a file it exclusively owns
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    charset: Charset,
    encoder: TextEncoder,
    writer: Option<BufWriter<File>>,
    scratch: Vec<u8>,
}

impl FileSink {
    /// Create or truncate `path` and bind a buffered writer to it
    pub fn create(path: impl AsRef<Path>, charset: Charset) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| OutputError::ResourceUnavailable {
            path: path.clone(),
            source,
        })?;
        log::info!("writing output to {} ({})", path.display(), charset);

        Ok(Self {
            path,
            charset,
            encoder: charset.new_encoder(),
            writer: Some(BufWriter::new(file)),
            scratch: Vec::new(),
        })
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Charset the file is written in
    pub fn charset(&self) -> Charset {
        self.charset
    }

    fn encode_and_write(&mut self, text: &str, last: bool) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(OutputError::Closed)?;
        self.scratch.clear();
        self.encoder.encode_into(text, &mut self.scratch, last);
        writer.write_all(&self.scratch)?;
        Ok(())
    }
}

impl Sink for FileSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.encode_and_write(text, false)
    }

    fn flush(&mut self) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(OutputError::Closed)?;
        writer.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.writer.is_none() {
            return Ok(());
        }
        self.encode_and_write("", true)?;
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        log::debug!("closed {}", self.path.display());
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
