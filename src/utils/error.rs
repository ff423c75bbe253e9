use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("input parameters missing")]
    MissingArguments,

    #[error("{path} can't be found")]
    SourceNotFound { path: String },

    /// Carries the source path: the original console message names the
    /// first argument, not the destination that actually exists.
    #[error("{path} already exists")]
    DestinationExists { path: String },

    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CopyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Precondition not met; the operation was refused before touching files.
    Low,
    /// The copy itself failed; the destination may be partial.
    High,
}

impl CopyError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CopyError::Io(_) => ErrorSeverity::High,
            _ => ErrorSeverity::Low,
        }
    }

    /// Process exit code for this error. The legacy policy reports success
    /// for refused preconditions; strict mode gives each kind its own code.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            CopyError::Io(_) => 1,
            _ if !strict => 0,
            CopyError::MissingArguments => 2,
            CopyError::SourceNotFound { .. } => 3,
            CopyError::DestinationExists { .. } => 4,
            CopyError::InvalidPath { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_console_contract() {
        let e = CopyError::SourceNotFound {
            path: "missing.txt".to_string(),
        };
        assert_eq!(e.to_string(), "missing.txt can't be found");

        // populated with the source path at the check site
        let e = CopyError::DestinationExists {
            path: "a.txt".to_string(),
        };
        assert_eq!(e.to_string(), "a.txt already exists");

        assert_eq!(CopyError::MissingArguments.to_string(), "input parameters missing");
    }

    #[test]
    fn test_exit_codes_legacy_vs_strict() {
        let missing = CopyError::MissingArguments;
        assert_eq!(missing.exit_code(false), 0);
        assert_eq!(missing.exit_code(true), 2);

        let not_found = CopyError::SourceNotFound {
            path: "a".to_string(),
        };
        assert_eq!(not_found.exit_code(false), 0);
        assert_eq!(not_found.exit_code(true), 3);

        let exists = CopyError::DestinationExists {
            path: "b".to_string(),
        };
        assert_eq!(exists.exit_code(true), 4);

        let io = CopyError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(false), 1);
        assert_eq!(io.exit_code(true), 1);
        assert_eq!(io.severity(), ErrorSeverity::High);
    }
}
