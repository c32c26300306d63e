//! Integration tests for the pipeline driver

use std::fs;
use tagline_core::{
    create, create_from_file, create_output_to_string, OutputConfig, OutputError, OutputHandler,
    ProgramStateListener, RunState, TaggedWord,
};
use tagline_engine::*;
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Tags every character on its own
fn per_char(text: &str) -> Result<Vec<TaggedWord>> {
    Ok(text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| TaggedWord::new(c, "w"))
        .collect())
}

#[test]
fn test_long_line_stays_on_one_output_line() {
    init_logging();
    let pipeline = Pipeline::builder().max_segment_chars(3).build().unwrap();
    let mut output = create_output_to_string();

    let stats = pipeline
        .run(["一二三四五六七", "八"], &mut per_char, &mut output)
        .unwrap();

    assert_eq!(stats.lines, 2);
    assert_eq!(stats.segments, 4);
    assert_eq!(stats.words, 8);
    assert_eq!(
        output.as_str(),
        "一/w 二/w 三/w 四/w 五/w 六/w 七/w\n八/w\n"
    );
}

#[test]
fn test_seg_only_run_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seg.txt");
    let mut handler = create_from_file(Some(&path)).unwrap().unwrap();

    let pipeline = Pipeline::builder().seg_only(true).build().unwrap();
    pipeline
        .run(
            ["他/r 说/v 的/u 确实/ad 在理/v", "北京/ns"],
            &mut WhitespaceSegmenter::default(),
            &mut handler,
        )
        .unwrap();

    assert_eq!(handler.run_state(), RunState::Terminated);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "他 说 的 确实 在理\n北京\n"
    );
}

#[test]
fn test_run_through_configured_handler() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("configured.txt");
    let config = OutputConfig::builder()
        .path(&path)
        .tag_delimiter('_')
        .build()
        .unwrap();
    let mut handler = create(&config).unwrap().unwrap();

    Pipeline::default()
        .run(
            vec!["北京/ns 欢迎/v 你/r".to_string()],
            &mut WhitespaceSegmenter::default(),
            &mut handler,
        )
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "北京_ns 欢迎_v 你_r\n");
}

#[test]
fn test_segmenter_error_aborts_run() {
    let mut output = create_output_to_string();
    let mut failing = |text: &str| -> Result<Vec<TaggedWord>> {
        if text.contains('坏') {
            Err(EngineError::Segmentation(format!("cannot segment {text:?}")))
        } else {
            per_char(text)
        }
    };

    let err = Pipeline::default()
        .run(["好", "坏", "好"], &mut failing, &mut output)
        .unwrap_err();

    assert!(matches!(err, EngineError::Segmentation(_)));
    // The first line is complete; the failing line was never closed
    assert_eq!(output.as_str(), "好/w\n");
    assert_eq!(output.run_state(), RunState::Running);

    // The caller releases the handler explicitly
    output.on_program_end().unwrap();
    assert_eq!(output.as_str(), "好/w\n\n");
}

#[test]
fn test_output_error_propagates() {
    let mut output = create_output_to_string();
    output.on_program_start().unwrap();
    output.on_program_end().unwrap();

    let err = Pipeline::default()
        .run(["a/x"], &mut WhitespaceSegmenter::default(), &mut output)
        .unwrap_err();
    assert!(matches!(err, EngineError::Output(OutputError::Closed)));
}

#[test]
fn test_empty_input_is_an_empty_run() {
    let mut output = create_output_to_string();
    let stats = Pipeline::default()
        .run(
            Vec::<String>::new(),
            &mut WhitespaceSegmenter::default(),
            &mut output,
        )
        .unwrap();
    assert_eq!(stats, RunStats::default());
    assert_eq!(output.as_str(), "");
    assert_eq!(output.run_state(), RunState::Terminated);
}

#[test]
fn test_boxed_handler_is_accepted() {
    let mut handler: Box<dyn OutputHandler> = Box::new(create_output_to_string());
    let stats = Pipeline::default()
        .run(["a/x b/y"], &mut WhitespaceSegmenter::default(), &mut handler)
        .unwrap();
    assert_eq!(stats.words, 2);
}
