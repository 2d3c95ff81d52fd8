use std::path::PathBuf;

/// Errors that can occur across razorcheck.
///
/// Each variant wraps a specific error domain. Library crates use this type
/// directly; the binary crate converts to a diagnostic at the boundary.
///
/// # Examples
///
/// ```
/// use razorcheck_core::CheckError;
///
/// let err = CheckError::Config("missing marker".into());
/// assert!(err.to_string().contains("missing marker"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Azure DevOps status API failure.
    #[error("status API error: {0}")]
    Status(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The scan root does not exist or is not a directory.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}
