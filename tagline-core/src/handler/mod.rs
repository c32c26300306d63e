//! The line-oriented output handler contract
//!
//! A driver talks to a handler in a fixed order:
//!
//! ```text
//! on_program_start
//!   handle_line_start
//!     handle_line_segment   (zero or more times)
//!   handle_line_end
//!   ...                     (one start/end pair per input line)
//! on_program_end
//! ```
//!
//! Calls outside this order are contract violations. [`LineOutputHandler`]
//! does not reject them; it logs a warning and applies the documented
//! behavior listed on its type.

use crate::error::Result;
use crate::types::TaggedWord;

mod line;
mod listener;

pub use line::{
    ConsoleOutputHandler, FileOutputHandler, LineOutputHandler, LineState, RunState,
    StringOutputHandler,
};
pub use listener::ProgramStateListener;

/// Consumer of segmented lines
pub trait OutputHandler: ProgramStateListener + Send {
    /// Append one batch of tagged words to the open line
    ///
    /// One input line may be split into several batches by the segmenter;
    /// all batches between a line start and a line end belong to the same
    /// output line.
    fn handle_line_segment(&mut self, words: &[TaggedWord], seg_only: bool) -> Result<()>;

    /// Begin a new logical line
    fn handle_line_start(&mut self) -> Result<()>;

    /// Finish the current logical line
    fn handle_line_end(&mut self) -> Result<()>;
}

impl<H: OutputHandler + ?Sized> ProgramStateListener for Box<H> {
    fn on_program_start(&mut self) -> Result<()> {
        (**self).on_program_start()
    }

    fn on_program_end(&mut self) -> Result<()> {
        (**self).on_program_end()
    }
}

impl<H: OutputHandler + ?Sized> OutputHandler for Box<H> {
    fn handle_line_segment(&mut self, words: &[TaggedWord], seg_only: bool) -> Result<()> {
        (**self).handle_line_segment(words, seg_only)
    }

    fn handle_line_start(&mut self) -> Result<()> {
        (**self).handle_line_start()
    }

    fn handle_line_end(&mut self) -> Result<()> {
        (**self).handle_line_end()
    }
}
