mod common;

use std::time::Instant;

use common::{corrupt_png_bytes, data_uri_dimensions, png_bytes};
use upwise_core::consts::PROCESSING_DELAY;
use upwise_core::error::UpwiseError;
use upwise_core::media::{Profile, SelectedFile};
use upwise_core::pipeline::NoOpReporter;
use upwise_core::session::SessionState;

// ---------------------------------------------------------------------------
// Defaults and setters
// ---------------------------------------------------------------------------

#[test]
fn test_session_defaults() {
    let session = SessionState::new();
    assert_eq!(session.scale().get(), 2);
    assert_eq!(session.profile(), Profile::GeneralPhoto);
    assert!(session.selected_files().is_empty());
    assert!(session.preview().is_none());
    assert!(session.output_folder().is_none());
    assert!(session.results().is_empty());
    assert!(!session.is_in_progress());
}

#[test]
fn test_set_scale_clamps_defensively() {
    let mut session = SessionState::new();
    session.set_scale(0);
    assert_eq!(session.scale().get(), 1);
    session.set_scale(200);
    assert_eq!(session.scale().get(), 16);
    session.set_scale(7);
    assert_eq!(session.scale().get(), 7);
}

#[test]
fn test_select_files_replaces_wholesale_and_sets_preview() {
    let mut session = SessionState::new();
    session.select_files(vec![SelectedFile::new(
        "a.png",
        png_bytes(4, 4, [1, 1, 1, 255]),
    )]);
    assert_eq!(session.selected_files().len(), 1);
    assert!(session.preview().is_some());

    session.select_files(vec![
        SelectedFile::new("b.png", png_bytes(8, 8, [2, 2, 2, 255])),
        SelectedFile::new("c.png", png_bytes(8, 8, [3, 3, 3, 255])),
    ]);
    let names: Vec<&str> = session
        .selected_files()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["b.png", "c.png"]);
    // Preview follows the first file of the new selection.
    assert_eq!(
        data_uri_dimensions(session.preview().expect("preview set")),
        (8, 8)
    );
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

#[test]
fn test_run_on_empty_selection_is_a_noop() {
    let mut session = SessionState::new();
    let start = Instant::now();
    session.run_upscale(&NoOpReporter).unwrap();
    assert!(session.results().is_empty());
    assert!(start.elapsed() < PROCESSING_DELAY);
}

#[test]
fn test_single_file_scenario() {
    // Select one 64x64 "cat.png", scale 2: one result, upscaled to 128x128,
    // file name preserved.
    let mut session = SessionState::new();
    session.set_scale(2);
    session.select_files(vec![SelectedFile::new(
        "cat.png",
        png_bytes(64, 64, [120, 110, 100, 255]),
    )]);

    session.run_upscale(&NoOpReporter).unwrap();

    assert_eq!(session.results().len(), 1);
    let result = &session.results()[0];
    assert_eq!(result.file_name, "cat.png");
    assert_eq!(data_uri_dimensions(&result.original), (64, 64));
    assert_eq!(data_uri_dimensions(&result.upscaled), (128, 128));
    assert!(!session.is_in_progress());

    // Reselecting drops the previous results.
    session.select_files(vec![SelectedFile::new(
        "dog.png",
        png_bytes(4, 4, [9, 9, 9, 255]),
    )]);
    assert!(session.results().is_empty());
}

#[test]
fn test_failed_run_surfaces_error_and_keeps_results_untouched() {
    let mut session = SessionState::new();
    session.select_files(vec![SelectedFile::new("bad.png", corrupt_png_bytes())]);

    let err = session.run_upscale(&NoOpReporter).unwrap_err();
    assert!(matches!(err, UpwiseError::Batch { .. }));
    assert!(session.results().is_empty());
    assert!(!session.is_in_progress());
}

// ---------------------------------------------------------------------------
// Clearing
// ---------------------------------------------------------------------------

#[test]
fn test_clear_keeps_scale_profile_and_folder() {
    let mut session = SessionState::new();
    session.set_scale(4);
    session.set_profile(Profile::UltraHd);
    session.set_output_folder("upscaled-output");
    session.select_files(vec![SelectedFile::new(
        "a.png",
        png_bytes(4, 4, [1, 1, 1, 255]),
    )]);

    session.clear();

    assert!(session.selected_files().is_empty());
    assert!(session.preview().is_none());
    assert!(session.results().is_empty());
    assert_eq!(session.scale().get(), 4);
    assert_eq!(session.profile(), Profile::UltraHd);
    assert_eq!(session.output_folder(), Some("upscaled-output"));
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

#[test]
fn test_selected_file_from_path_takes_file_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("photo.png");
    let bytes = png_bytes(8, 8, [5, 6, 7, 255]);
    std::fs::write(&path, &bytes).expect("write fixture");

    let file = SelectedFile::from_path(&path).unwrap();
    assert_eq!(file.name, "photo.png");
    assert_eq!(file.bytes, bytes);
}

#[test]
fn test_selected_file_from_missing_path_is_io_error() {
    let err = SelectedFile::from_path(std::path::Path::new("/no/such/file.png")).unwrap_err();
    assert!(matches!(err, UpwiseError::Io(_)));
}
