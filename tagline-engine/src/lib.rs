//! Pipeline driver for tagged word segmentation output
//!
//! Reads lines from any iterator, splits over-long lines into pieces, asks a
//! [`Segmenter`] for the tagged words of each piece and feeds them to a
//! `tagline_core` output handler, honoring its line lifecycle.
//!
//! ```rust
//! use tagline_core::create_output_to_string;
//! use tagline_engine::{Pipeline, WhitespaceSegmenter};
//!
//! let pipeline = Pipeline::builder().seg_only(true).build().unwrap();
//! let mut output = create_output_to_string();
//! pipeline
//!     .run(["我/r 爱/v 北京/ns"], &mut WhitespaceSegmenter::default(), &mut output)
//!     .unwrap();
//! assert_eq!(output.as_str(), "我 爱 北京\n");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod pipeline;
pub mod segmenter;
pub mod splitter;

pub use error::{EngineError, Result};
pub use pipeline::{Pipeline, PipelineBuilder, RunStats};
pub use segmenter::{Segmenter, WhitespaceSegmenter, DEFAULT_TAG};
pub use splitter::{LineSplitter, DEFAULT_MAX_SEGMENT_CHARS};
