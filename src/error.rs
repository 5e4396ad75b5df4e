/// Every error sift can produce. The CLI front end renders each one as
/// `Error: <detail>` on stderr.
#[derive(Debug)]
pub enum SiftError {
    /// The pattern failed to compile as a regular expression. Only
    /// reachable when fixed-string mode is off.
    InvalidPattern { reason: String },
    /// A named input file could not be opened.
    SourceOpen {
        path: String,
        source: std::io::Error,
    },
    /// A read failed mid-stream on an input source.
    SourceRead {
        path: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SiftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { reason } => {
                write!(f, "invalid pattern: {reason}")
            }
            Self::SourceOpen { path, source } => {
                write!(f, "failed to open {path}: {source}")
            }
            Self::SourceRead { path, source } => {
                write!(f, "failed to read {path}: {source}")
            }
        }
    }
}

impl std::error::Error for SiftError {}

impl SiftError {
    /// Exit code for the process. The usage error (no pattern argument)
    /// exits 1 before any `SiftError` exists; everything here is a
    /// runtime failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPattern { .. } | Self::SourceOpen { .. } | Self::SourceRead { .. } => 2,
        }
    }
}
