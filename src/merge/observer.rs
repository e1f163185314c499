//! Progress callbacks for a merge run.
//!
//! The merger itself never prints. Callers that want progress output pass a
//! [`MergeObserver`]; the CLI uses [`crate::output::ConsoleReporter`].

use std::path::{Path, PathBuf};

use crate::merge::{MergeOutcome, MergeResult};

/// Receives merge progress in processing order.
pub trait MergeObserver {
    /// Called once, after sorting, before the first candidate is opened.
    fn on_start(&mut self, _candidates: &[PathBuf], _output: &Path) {}

    /// Called before `on_file_outcome` for a candidate that only opened after
    /// decryption with the empty password.
    fn on_decrypted(&mut self, _path: &Path) {}

    /// Called once per candidate, in processing order.
    fn on_file_outcome(&mut self, path: &Path, outcome: &MergeOutcome);

    /// Called before the merged document is written.
    fn on_write(&mut self, _output: &Path, _total_pages: usize) {}

    /// Called once with the final result.
    fn on_complete(&mut self, _result: &MergeResult) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {
    fn on_file_outcome(&mut self, _path: &Path, _outcome: &MergeOutcome) {}
}

/// Observer that records every event, for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Candidates announced by `on_start`.
    pub candidates: Vec<PathBuf>,
    /// Candidates that needed the empty password, in processing order.
    pub decrypted: Vec<PathBuf>,
    /// Outcomes in the order they were reported.
    pub outcomes: Vec<(PathBuf, MergeOutcome)>,
    /// Page total announced by `on_write`, if the write stage was reached.
    pub written_pages: Option<usize>,
    /// Whether `on_complete` fired, and with which success flag.
    pub completed: Option<bool>,
}

impl MergeObserver for RecordingObserver {
    fn on_start(&mut self, candidates: &[PathBuf], _output: &Path) {
        self.candidates = candidates.to_vec();
    }

    fn on_decrypted(&mut self, path: &Path) {
        self.decrypted.push(path.to_path_buf());
    }

    fn on_file_outcome(&mut self, path: &Path, outcome: &MergeOutcome) {
        self.outcomes.push((path.to_path_buf(), outcome.clone()));
    }

    fn on_write(&mut self, _output: &Path, total_pages: usize) {
        self.written_pages = Some(total_pages);
    }

    fn on_complete(&mut self, result: &MergeResult) {
        self.completed = Some(result.success);
    }
}
