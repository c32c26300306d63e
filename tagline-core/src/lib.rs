//! Line-oriented output stage for tagged word segmentation
//!
//! A segmenter produces batches of [`TaggedWord`]s per input line. An
//! [`OutputHandler`] receives them through a fixed lifecycle (line start,
//! zero or more segment batches, line end, framed by program start and end)
//! and writes one physical line per logical line to its sink.
//!
//! # Sinks
//!
//! - standard output: [`create_default`]
//! - a file in a selectable charset: [`create_from_file`],
//!   [`create_from_file_with_charset_name`], [`create_from_file_with_charset`]
//! - an in-memory string: [`create_output_to_string`]
//! - any of the above from one [`OutputConfig`]: [`create`]
//!
//! # Example
//!
//! ```rust
//! use tagline_core::{create_output_to_string, OutputHandler, ProgramStateListener, TaggedWord};
//!
//! let mut output = create_output_to_string();
//! output.on_program_start().unwrap();
//! output.handle_line_start().unwrap();
//! output
//!     .handle_line_segment(&[TaggedWord::new("我", "r"), TaggedWord::new("爱", "v")], false)
//!     .unwrap();
//! output
//!     .handle_line_segment(&[TaggedWord::new("北京", "ns")], false)
//!     .unwrap();
//! output.handle_line_end().unwrap();
//! output.on_program_end().unwrap();
//!
//! assert_eq!(output.as_str(), "我/r 爱/v 北京/ns\n");
//! ```

#![warn(missing_docs)]

pub mod charset;
pub mod config;
pub mod error;
pub mod factory;
pub mod format;
pub mod handler;
pub mod sink;
pub mod types;

pub use charset::Charset;
pub use config::{OutputConfig, OutputConfigBuilder};
pub use error::{OutputError, Result};
pub use factory::{
    create, create_default, create_from_file, create_from_file_with_charset,
    create_from_file_with_charset_name, create_output_to_string,
};
pub use format::{LineFormat, LineTerminator, DEFAULT_TAG_DELIMITER};
pub use handler::{
    ConsoleOutputHandler, FileOutputHandler, LineOutputHandler, LineState, OutputHandler,
    ProgramStateListener, RunState, StringOutputHandler,
};
pub use sink::Sink;
pub use types::TaggedWord;
