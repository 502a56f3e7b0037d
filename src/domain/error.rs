use thiserror::Error;

use crate::io::{Format, IoError};

/// Errors produced by the `validate` command boundary.
///
/// These are structural failures only. A record failing its field rules is
/// report data, never an error.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Input format could not be resolved from flags or input path.
    #[error("failed to resolve input format: {source}")]
    ResolveInput {
        #[source]
        source: IoError,
    },

    /// Input file could not be opened.
    #[error("failed to open input file `{path}`: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be parsed as a record sequence in the declared format.
    #[error("failed to read {format} input: {source}")]
    ReadInput {
        format: Format,
        #[source]
        source: IoError,
    },

    /// Report file could not be persisted.
    #[error("failed to write error report: {source}")]
    WriteReport {
        #[source]
        source: IoError,
    },
}
