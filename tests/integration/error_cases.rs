//! Integration tests for skipped inputs and failed runs.

use pdfmerge::config::{Config, SourceSpec};
use pdfmerge::error::PdfMergeError;
use pdfmerge::merge::{MergeOutcome, merge_pdfs};
use pdfmerge::{ReportFormat, output::report};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use crate::common::{
    page_contents, page_widths, pdf_in, write_empty_password_pdf, write_encrypted_pdf,
};

fn config_for(source: SourceSpec) -> Config {
    Config {
        source,
        output: PathBuf::from("merged_output.pdf"),
        sort: false,
        verbose: false,
        quiet: true,
        report: ReportFormat::Text,
    }
}

#[test]
fn test_non_pdf_is_skipped_without_disturbing_neighbours() {
    let dir = tempdir().unwrap();
    let a = pdf_in(dir.path(), "a.pdf", &[1]).unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "not a pdf").unwrap();
    let b = pdf_in(dir.path(), "b.pdf", &[2]).unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(vec![a, notes, b], &output, false);

    assert!(result.success);
    assert_eq!(result.outcomes[1].outcome, MergeOutcome::SkippedNotPdf);
    assert_eq!(result.processed_file_names, vec!["a.pdf", "b.pdf"]);
    assert_eq!(page_widths(&output).unwrap(), vec![1, 2]);
}

#[test]
fn test_encrypted_pdf_is_skipped() {
    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked.pdf");
    write_encrypted_pdf(&locked).unwrap();
    let open = pdf_in(dir.path(), "open.pdf", &[9]).unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(vec![locked, open], &output, false);

    assert_eq!(
        result.outcomes[0].outcome,
        MergeOutcome::SkippedEncryptedUndecryptable
    );
    assert_eq!(result.outcomes[1].outcome, MergeOutcome::Merged(1));
    assert_eq!(page_widths(&output).unwrap(), vec![9]);
}

#[test]
fn test_missing_and_corrupt_files_are_skipped() {
    let dir = tempdir().unwrap();
    let corrupt = dir.path().join("corrupt.pdf");
    fs::write(&corrupt, b"%PDF-1.4\nthis is not really a pdf").unwrap();
    let good = pdf_in(dir.path(), "good.pdf", &[5, 6]).unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(
        vec![dir.path().join("missing.pdf"), corrupt, good],
        &output,
        false,
    );

    assert_eq!(result.outcomes[0].outcome, MergeOutcome::SkippedNotFound);
    assert!(matches!(
        result.outcomes[1].outcome,
        MergeOutcome::SkippedUnexpectedError(_)
    ));
    assert_eq!(result.outcomes[2].outcome, MergeOutcome::Merged(2));
    assert_eq!(result.total_pages_written, 2);
}

#[test]
fn test_empty_pdf_is_skipped() {
    let dir = tempdir().unwrap();
    let empty = pdf_in(dir.path(), "empty.pdf", &[]).unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(vec![empty], &output, false);

    assert_eq!(result.outcomes[0].outcome, MergeOutcome::SkippedEmptyOrCorrupt);
    assert!(!result.success);
}

#[test]
fn test_no_valid_files_creates_no_output() {
    let dir = tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "text").unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(vec![notes, dir.path().join("gone.pdf")], &output, true);

    assert!(!result.success);
    assert_eq!(result.total_pages_written, 0);
    assert!(result.processed_file_names.is_empty());
    assert_eq!(result.outcomes.len(), 2);
    assert!(!output.exists());
}

#[test]
fn test_empty_input_list() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(Vec::new(), &output, false);

    assert!(!result.success);
    assert!(!output.exists());
}

#[test]
fn test_write_failure_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let input = pdf_in(dir.path(), "a.pdf", &[1]).unwrap();
    let output = dir.path().join("taken");
    fs::create_dir(&output).unwrap();

    let result = merge_pdfs(vec![input], &output, false);

    assert!(!result.success);
    assert_eq!(result.outcomes[0].outcome, MergeOutcome::Merged(1));
    assert!(result.write_error.is_some());
    assert!(!dir.path().join("taken.tmp").exists());

    let json: serde_json::Value = serde_json::from_str(&report::to_json(&result).unwrap()).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["writeError"].is_string());
}

#[test]
fn test_missing_directory() {
    let dir = tempdir().unwrap();
    let config = config_for(SourceSpec::Directory(dir.path().join("absent")));

    let err = config.resolve_inputs().unwrap_err();
    assert!(matches!(err, PdfMergeError::DirectoryNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_directory_without_pdfs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "# nothing").unwrap();
    let config = config_for(SourceSpec::Directory(dir.path().to_path_buf()));

    let err = config.resolve_inputs().unwrap_err();
    assert!(matches!(err, PdfMergeError::NoValidInput { .. }));
}

#[test]
fn test_unmatched_glob_is_reported_as_missing() {
    let dir = tempdir().unwrap();
    let pattern = dir.path().join("nothing*.pdf");
    let config = config_for(SourceSpec::Files(vec![
        pattern.to_string_lossy().into_owned(),
    ]));

    let inputs = config.resolve_inputs().unwrap();
    let result = merge_pdfs(inputs, &dir.path().join("merged.pdf"), false);

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.outcomes[0].outcome, MergeOutcome::SkippedNotFound);
}

#[test]
fn test_empty_password_pdf_is_merged_as_plaintext() {
    let dir = tempdir().unwrap();
    let protected = dir.path().join("protected.pdf");
    write_empty_password_pdf(&protected, b"BT (Secret) Tj ET").unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(vec![protected], &output, false);

    assert!(result.success);
    assert_eq!(result.outcomes[0].outcome, MergeOutcome::Merged(1));
    assert_eq!(
        page_contents(&output).unwrap(),
        vec![b"BT (Secret) Tj ET".to_vec()]
    );
}

#[test]
fn test_malformed_glob_is_reported_as_missing() {
    let dir = tempdir().unwrap();
    let pattern = dir.path().join("[draft.pdf");
    let good = pdf_in(dir.path(), "good.pdf", &[4]).unwrap();
    let config = config_for(SourceSpec::Files(vec![
        pattern.to_string_lossy().into_owned(),
        good.to_string_lossy().into_owned(),
    ]));

    let inputs = config.resolve_inputs().unwrap();
    let result = merge_pdfs(inputs, &dir.path().join("merged.pdf"), false);

    assert_eq!(result.outcomes[0].path, pattern);
    assert_eq!(result.outcomes[0].outcome, MergeOutcome::SkippedNotFound);
    assert_eq!(result.outcomes[1].outcome, MergeOutcome::Merged(1));
}

#[test]
fn test_bracketed_file_name_is_not_globbed() {
    let dir = tempdir().unwrap();
    let bracketed = pdf_in(dir.path(), "scan[1].pdf", &[1]).unwrap();
    pdf_in(dir.path(), "scan1.pdf", &[99]).unwrap();
    let output = dir.path().join("merged.pdf");
    let config = config_for(SourceSpec::Files(vec![
        bracketed.to_string_lossy().into_owned(),
    ]));

    let result = merge_pdfs(config.resolve_inputs().unwrap(), &output, false);

    assert_eq!(result.processed_file_names, vec!["scan[1].pdf"]);
    assert_eq!(page_widths(&output).unwrap(), vec![1]);
}
