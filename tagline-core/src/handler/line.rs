//! Output handler writing one physical line per logical line

use super::{OutputHandler, ProgramStateListener};
use crate::error::{OutputError, Result};
use crate::format::{LineFormat, WORD_SEPARATOR};
use crate::sink::{BufferSink, ConsoleSink, FileSink, Sink};
use crate::types::TaggedWord;

/// Handler bound to standard output
pub type ConsoleOutputHandler = LineOutputHandler<ConsoleSink>;

/// Handler bound to a file
pub type FileOutputHandler = LineOutputHandler<FileSink>;

/// Handler accumulating output in memory
pub type StringOutputHandler = LineOutputHandler<BufferSink>;

/// Run-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// `on_program_start` has not been called yet
    Unstarted,
    /// Between program start and program end
    Running,
    /// The sink has been released
    Terminated,
}

/// Line-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// No line is open
    Idle,
    /// A line is open and `words` tokens have been written to it
    Open {
        /// Tokens written to the open line so far
        words: usize,
    },
}

/// Handler formatting tagged words line by line onto a [`Sink`]
///
/// Tokens are separated by a single space, tagged tokens render as
/// `word<delimiter>tag` and every line end writes the configured
/// terminator.
///
/// Contract violations are logged at warn level and handled as follows:
///
/// - a segment delivered with no open line opens one implicitly
/// - a line start while a line is open terminates the open line first
/// - a line end with no open line writes an empty line
/// - program end while a line is open terminates that line before closing
/// - line operations before program start are accepted
/// - any line operation after program end fails with [`OutputError::Closed`]
#[derive(Debug)]
pub struct LineOutputHandler<S: Sink> {
    sink: S,
    format: LineFormat,
    flush_each_line: bool,
    run: RunState,
    line: LineState,
    lines_written: usize,
    scratch: String,
}

impl<S: Sink> LineOutputHandler<S> {
    /// Create a handler over `sink` using the default line format
    pub fn new(sink: S) -> Self {
        Self::from_parts(sink, LineFormat::default())
    }

    /// Create a handler over `sink` with an explicit line format
    ///
    /// Fails with [`OutputError::Config`] when the tag delimiter is
    /// whitespace or a control character.
    pub fn with_format(sink: S, format: LineFormat) -> Result<Self> {
        format.validate()?;
        Ok(Self::from_parts(sink, format))
    }

    fn from_parts(sink: S, format: LineFormat) -> Self {
        Self {
            sink,
            format,
            flush_each_line: true,
            run: RunState::Unstarted,
            line: LineState::Idle,
            lines_written: 0,
            scratch: String::new(),
        }
    }

    /// Set whether the sink is flushed at every line end
    pub fn flush_each_line(mut self, flush: bool) -> Self {
        self.flush_each_line = flush;
        self
    }

    /// The bound sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Line format in use
    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Current run-level state
    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Current line-level state
    pub fn line_state(&self) -> LineState {
        self.line
    }

    /// Number of line terminators written so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    fn ensure_not_terminated(&self) -> Result<()> {
        if self.run == RunState::Terminated {
            return Err(OutputError::Closed);
        }
        Ok(())
    }

    fn terminate_line(&mut self) -> Result<()> {
        self.sink.write_str(self.format.line_terminator.as_str())?;
        self.line = LineState::Idle;
        self.lines_written += 1;
        if self.flush_each_line {
            self.sink.flush()?;
        }
        Ok(())
    }
}

impl LineOutputHandler<BufferSink> {
    /// Text accumulated so far
    pub fn as_str(&self) -> &str {
        self.sink.as_str()
    }

    /// Take the accumulated text
    pub fn into_string(self) -> String {
        self.sink.into_string()
    }
}

impl<S: Sink> ProgramStateListener for LineOutputHandler<S> {
    fn on_program_start(&mut self) -> Result<()> {
        match self.run {
            RunState::Unstarted => {
                log::debug!("output run started on {}", self.sink.describe());
                self.run = RunState::Running;
                Ok(())
            }
            RunState::Running => {
                log::warn!("program start notified twice; ignoring");
                Ok(())
            }
            RunState::Terminated => Err(OutputError::Closed),
        }
    }

    fn on_program_end(&mut self) -> Result<()> {
        if self.run == RunState::Terminated {
            return Ok(());
        }
        let pending = if let LineState::Open { .. } = self.line {
            log::warn!("program ended with an open line; terminating it");
            self.terminate_line()
        } else {
            Ok(())
        };
        // The sink is released exactly once, even when the last line failed
        self.run = RunState::Terminated;
        let closed = self.sink.close();
        log::debug!(
            "output run on {} finished after {} lines",
            self.sink.describe(),
            self.lines_written
        );
        pending.and(closed)
    }
}

impl<S: Sink> OutputHandler for LineOutputHandler<S> {
    fn handle_line_segment(&mut self, words: &[TaggedWord], seg_only: bool) -> Result<()> {
        self.ensure_not_terminated()?;
        let mut count = match self.line {
            LineState::Open { words } => words,
            LineState::Idle => {
                log::warn!("line segment delivered outside an open line; opening one");
                0
            }
        };
        self.line = LineState::Open { words: count };
        if words.is_empty() {
            return Ok(());
        }

        self.scratch.clear();
        for word in words {
            if count > 0 {
                self.scratch.push(WORD_SEPARATOR);
            }
            word.render_into(&mut self.scratch, self.format.tag_delimiter, seg_only);
            count += 1;
        }
        self.sink.write_str(&self.scratch)?;
        self.line = LineState::Open { words: count };
        Ok(())
    }

    fn handle_line_start(&mut self) -> Result<()> {
        self.ensure_not_terminated()?;
        if let LineState::Open { .. } = self.line {
            log::warn!("line start while a line is open; terminating the open line");
            self.terminate_line()?;
        }
        self.line = LineState::Open { words: 0 };
        Ok(())
    }

    fn handle_line_end(&mut self) -> Result<()> {
        self.ensure_not_terminated()?;
        if self.line == LineState::Idle {
            log::warn!("line end without an open line; writing an empty line");
        }
        self.terminate_line()
    }
}
