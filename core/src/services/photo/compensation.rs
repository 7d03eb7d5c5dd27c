//! Ordered undo steps for multi-stage filesystem work

use std::io::ErrorKind;
use std::path::PathBuf;

/// A single undo action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compensation {
    /// Delete a file created by an earlier stage
    RemoveFile(PathBuf),
}

impl Compensation {
    async fn run(&self) {
        match self {
            Compensation::RemoveFile(path) => match tokio::fs::remove_file(path).await {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), event = "compensation_file_removed");
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        event = "compensation_failed",
                        "Failed to remove file during rollback"
                    );
                }
            },
        }
    }
}

/// Stack of undo steps pushed as each stage succeeds.
///
/// `unwind` replays them newest first. `commit` forgets them once the work
/// has passed the point where rollback applies.
#[derive(Debug, Default)]
#[must_use = "call unwind() or commit() once the guarded work is finished"]
pub struct CompensationStack {
    steps: Vec<Compensation>,
}

impl CompensationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Compensation) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every recorded step in reverse order
    pub async fn unwind(mut self) {
        while let Some(step) = self.steps.pop() {
            step.run().await;
        }
    }

    /// Drop the recorded steps without running them
    pub fn commit(mut self) {
        self.steps.clear();
    }
}
