//! Pipeline driver honoring the output handler lifecycle

use crate::error::Result;
use crate::segmenter::Segmenter;
use crate::splitter::{LineSplitter, DEFAULT_MAX_SEGMENT_CHARS};
use tagline_core::OutputHandler;

/// Counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input lines processed
    pub lines: usize,
    /// Segment batches delivered to the handler
    pub segments: usize,
    /// Tagged words delivered to the handler
    pub words: usize,
}

/// Drives lines through a segmenter into an output handler
///
/// For every input line the handler sees a line start, one segment batch per
/// piece produced by the [`LineSplitter`], and a line end. The whole run is
/// framed by program start and program end. The first error aborts the run
/// and is returned as is; the handler gets no further calls.
#[derive(Debug, Clone)]
pub struct Pipeline {
    seg_only: bool,
    splitter: LineSplitter,
}

impl Pipeline {
    /// Create a pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Whether tags are suppressed in the output
    pub fn seg_only(&self) -> bool {
        self.seg_only
    }

    /// Run over `lines`
    ///
    /// Trailing `\n` and `\r` are stripped from each line; an empty line
    /// still produces an (empty) output line.
    pub fn run<I, L, G, H>(&self, lines: I, segmenter: &mut G, handler: &mut H) -> Result<RunStats>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
        G: Segmenter + ?Sized,
        H: OutputHandler + ?Sized,
    {
        let mut stats = RunStats::default();
        handler.on_program_start()?;
        for line in lines {
            self.process_line(line.as_ref(), segmenter, handler, &mut stats)?;
        }
        handler.on_program_end()?;

        log::info!(
            "processed {} lines ({} segments, {} words)",
            stats.lines,
            stats.segments,
            stats.words
        );
        Ok(stats)
    }

    fn process_line<G, H>(
        &self,
        line: &str,
        segmenter: &mut G,
        handler: &mut H,
        stats: &mut RunStats,
    ) -> Result<()>
    where
        G: Segmenter + ?Sized,
        H: OutputHandler + ?Sized,
    {
        let line = line.trim_end_matches(['\n', '\r']);
        handler.handle_line_start()?;
        for piece in self.splitter.split(line) {
            let words = segmenter.segment(piece)?;
            handler.handle_line_segment(&words, self.seg_only)?;
            stats.segments += 1;
            stats.words += words.len();
        }
        handler.handle_line_end()?;
        stats.lines += 1;
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            seg_only: false,
            splitter: LineSplitter::default(),
        }
    }
}

/// Builder for [`Pipeline`]
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    seg_only: bool,
    max_segment_chars: usize,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            seg_only: false,
            max_segment_chars: DEFAULT_MAX_SEGMENT_CHARS,
        }
    }
}

impl PipelineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress tags in the output
    pub fn seg_only(mut self, seg_only: bool) -> Self {
        self.seg_only = seg_only;
        self
    }

    /// Maximum characters handed to the segmenter at once
    pub fn max_segment_chars(mut self, max_chars: usize) -> Self {
        self.max_segment_chars = max_chars;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        Ok(Pipeline {
            seg_only: self.seg_only,
            splitter: LineSplitter::new(self.max_segment_chars)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::WhitespaceSegmenter;
    use tagline_core::create_output_to_string;

    #[test]
    fn test_run_counts() {
        let pipeline = Pipeline::default();
        let mut output = create_output_to_string();
        let stats = pipeline
            .run(
                ["我/r 爱/v", "", "北京/ns\n"],
                &mut WhitespaceSegmenter::default(),
                &mut output,
            )
            .unwrap();

        assert_eq!(
            stats,
            RunStats {
                lines: 3,
                segments: 2,
                words: 3
            }
        );
        assert_eq!(output.as_str(), "我/r 爱/v\n\n北京/ns\n");
    }

    #[test]
    fn test_builder_rejects_zero_segment_length() {
        assert!(Pipeline::builder().max_segment_chars(0).build().is_err());
    }

    #[test]
    fn test_builder_seg_only() {
        let pipeline = Pipeline::builder().seg_only(true).build().unwrap();
        assert!(pipeline.seg_only());
    }
}
