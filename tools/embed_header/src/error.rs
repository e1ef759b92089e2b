// Embedder Error Types
//
// One variant per failure branch of the pipeline. The Display text is the
// exact one-line diagnostic printed to the user; the io::Error, when there
// is one, stays reachable through `source()` for the verbose log.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while embedding a file
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Input could not be opened (or its size could not be queried)
    #[error("failed to open file")]
    Open(#[source] io::Error),

    /// Buffer for the input could not be reserved
    #[error("failed to allocate buffer")]
    Alloc,

    /// The single read returned a different byte count than the file size
    #[error("failed to read file")]
    ShortRead {
        expected: usize,
        actual: usize,
        #[source]
        source: Option<io::Error>,
    },

    /// Output could not be created or truncated
    #[error("Could not open {} for writing", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output was opened but writing or flushing it failed
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for embedder operations
pub type EmbedResult<T> = Result<T, EmbedError>;
