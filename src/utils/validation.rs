use crate::config::CliConfig;
use crate::utils::error::{CopyError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let (source, dest) = match (&self.source, &self.dest) {
            (Some(s), Some(d)) => (s, d),
            _ => return Err(CopyError::MissingArguments),
        };
        validate_path(source)?;
        validate_path(dest)?;
        Ok(())
    }
}

/// Rejects path strings that can never name a file, before any filesystem call.
pub fn validate_path(path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(CopyError::InvalidPath {
            path: raw.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(CopyError::InvalidPath {
            path: raw.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn check_source_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CopyError::SourceNotFound {
            path: path.display().to_string(),
        })
    }
}

/// Refuses an existing destination. The error carries `source` because the
/// console message names the first argument.
pub fn check_destination_absent(source: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        Err(CopyError::DestinationExists {
            path: source.display().to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path(Path::new("data.txt")).is_ok());
        assert!(validate_path(Path::new("./nested/dir/file")).is_ok());
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_missing_arguments() {
        let config = CliConfig {
            source: Some(PathBuf::from("a.txt")),
            dest: None,
            verbose: false,
            strict_exit: false,
            remove_partial: false,
        };
        assert!(matches!(
            config.validate(),
            Err(CopyError::MissingArguments)
        ));
    }

    #[test]
    fn test_check_source_exists() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.txt");
        std::fs::write(&present, "x\n").unwrap();

        assert!(check_source_exists(&present).is_ok());

        let err = check_source_exists(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, CopyError::SourceNotFound { .. }));
        // a directory is not a copyable source
        assert!(check_source_exists(dir.path()).is_err());
    }

    #[test]
    fn test_check_destination_absent() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let taken = dir.path().join("taken.txt");
        std::fs::write(&taken, "x\n").unwrap();

        assert!(check_destination_absent(&source, &dir.path().join("free.txt")).is_ok());

        let err = check_destination_absent(&source, &taken).unwrap_err();
        assert!(matches!(err, CopyError::DestinationExists { .. }));
        // the message names the first argument, as the original did
        assert_eq!(err.to_string(), format!("{} already exists", source.display()));
    }
}
