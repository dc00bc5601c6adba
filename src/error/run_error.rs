use std::{io, path::PathBuf};

#[derive(Debug)]
/// Represents the errors that abort a whole run.
pub enum RunError {
    /// The input file could not be opened for reading.
    FileAccess {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// A line of the input could not be read.
    Read {
        /// The 1-based line that failed.
        line:   usize,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// A result could not be written to the output.
    Write {
        /// The underlying I/O failure.
        source: io::Error,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileAccess { path, source } if source.kind() == io::ErrorKind::NotFound => {
                write!(f, "File '{}' not found.", path.display())
            },
            Self::FileAccess { path, source } => {
                write!(f, "File '{}' could not be opened: {source}.", path.display())
            },
            Self::Read { line, source } => {
                write!(f, "Failed to read line {line} of the input: {source}.")
            },
            Self::Write { source } => write!(f, "Failed to write output: {source}."),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } | Self::Read { source, .. } | Self::Write { source } => {
                Some(source)
            },
        }
    }
}
