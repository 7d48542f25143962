/// Error types for the inlining pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an inlining run. Each input failure names the file
/// it came from; nothing is retried and no partial output survives.
#[derive(Debug, Error)]
pub enum InlineError {
    /// The glue module could not be read.
    #[error("failed to read glue module {}: {source}", path.display())]
    ReadGlue {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The wasm binary could not be read.
    #[error("failed to read wasm binary {}: {source}", path.display())]
    ReadWasm {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The assembled artifact could not be written.
    #[error("failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Formatting into the synthesis buffer failed.
    #[error("code synthesis failed: {0}")]
    Synthesis(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, InlineError>;
