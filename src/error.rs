use std::path::PathBuf;
use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Usage(String),

    #[error("Failed to read source file \"{}\".", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Key must be the first column in worksheet \"{0}\".")]
    KeyColumnMissing(String),

    #[error("Source language \"{language}\" must be the first column in worksheet \"{category}\".")]
    SourceColumnMissing { category: String, language: String },

    #[error("Failed to write catalog {category}/{language}: {reason}")]
    Persist {
        category: String,
        language: String,
        reason: String,
    },

    #[error("Workbook error: {0}")]
    Workbook(String),
}

impl SyncError {
    /// Process exit code for this error.
    ///
    /// Usage and validation errors exit with 1, write-side failures with 2,
    /// so callers can tell "the workbook was wrong" from "the disk failed".
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::Io(_) | SyncError::Persist { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_messages() {
        let err = SyncError::KeyColumnMissing("app".to_string());
        assert_eq!(
            err.to_string(),
            "Key must be the first column in worksheet \"app\"."
        );

        let err = SyncError::SourceColumnMissing {
            category: "app".to_string(),
            language: "en-US".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Source language \"en-US\" must be the first column in worksheet \"app\"."
        );
    }

    #[test]
    fn test_source_not_found_message() {
        let err = SyncError::SourceNotFound(PathBuf::from("missing.xlsx"));
        assert_eq!(
            err.to_string(),
            "Failed to read source file \"missing.xlsx\"."
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SyncError::Usage("x".into()).exit_code(), 1);
        assert_eq!(SyncError::KeyColumnMissing("app".into()).exit_code(), 1);
        assert_eq!(
            SyncError::Persist {
                category: "app".into(),
                language: "de".into(),
                reason: "disk full".into(),
            }
            .exit_code(),
            2
        );
    }
}
