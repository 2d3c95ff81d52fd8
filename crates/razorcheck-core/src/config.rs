use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Top-level configuration loaded from `.razorcheck.toml`.
///
/// Every field has a default; an absent or empty file yields a configuration
/// that checks `.razor` files for `@code`.
///
/// # Examples
///
/// ```
/// use razorcheck_core::CheckConfig;
///
/// let config = CheckConfig::default();
/// assert_eq!(config.policy.extension, ".razor");
/// assert_eq!(config.policy.marker, "@code");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// What to scan for.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// How to address the pull-request status API.
    #[serde(default)]
    pub status: StatusConfig,
}

impl CheckConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if the file cannot be read, or
    /// [`CheckError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use razorcheck_core::CheckConfig;
    /// use std::path::Path;
    ///
    /// let config = CheckConfig::from_file(Path::new(".razorcheck.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, CheckError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use razorcheck_core::CheckConfig;
    ///
    /// let toml = r#"
    /// [policy]
    /// marker = "@inject"
    /// "#;
    /// let config = CheckConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.policy.marker, "@inject");
    /// assert_eq!(config.policy.extension, ".razor");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, CheckError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// What file suffix to scan and which literal substring is forbidden.
///
/// The marker is always a single literal substring, case-sensitive, with no
/// pattern grammar.
///
/// # Examples
///
/// ```
/// use razorcheck_core::PolicyConfig;
///
/// let config = PolicyConfig::default();
/// assert_eq!(config.extension, ".razor");
/// assert_eq!(config.marker, "@code");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// File-name suffix to include in the scan (default: `".razor"`).
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Forbidden literal substring (default: `"@code"`).
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_extension() -> String {
    ".razor".into()
}

fn default_marker() -> String {
    "@code".into()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            marker: default_marker(),
        }
    }
}

impl PolicyConfig {
    /// Extension without its leading dot, for human-readable messages.
    pub fn extension_label(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// How this check identifies itself to the status API.
///
/// # Examples
///
/// ```
/// use razorcheck_core::StatusConfig;
///
/// let config = StatusConfig::default();
/// assert_eq!(config.context_name, "no-code-block-policy");
/// assert_eq!(config.context_genre, "bqc");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Status context name (default: `"no-code-block-policy"`).
    #[serde(default = "default_context_name")]
    pub context_name: String,
    /// Status context genre tag (default: `"bqc"`).
    #[serde(default = "default_context_genre")]
    pub context_genre: String,
    /// Azure DevOps REST API version (default: `"7.1"`).
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_context_name() -> String {
    "no-code-block-policy".into()
}

fn default_context_genre() -> String {
    "bqc".into()
}

fn default_api_version() -> String {
    "7.1".into()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            context_name: default_context_name(),
            context_genre: default_context_genre(),
            api_version: default_api_version(),
        }
    }
}
