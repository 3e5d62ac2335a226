//! Error types for build orchestration.

use std::{path::PathBuf, process::ExitStatus};

/// Errors that can occur while planning or running builds.
///
/// Every variant is fatal: the first one raised aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not sure how to handle {}", .0.display())]
    UnrecognizedConfig(PathBuf),

    #[error("`{command}` failed: {status}")]
    ToolFailed { command: String, status: ExitStatus },

    #[error("no fonts produced in {}", .0.display())]
    NoFontsProduced(PathBuf),
}
