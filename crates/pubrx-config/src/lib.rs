//! Configuration management for pubrx.
//!
//! Parses `pubrx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//! - a leading `~` - expands to the home directory
//!
//! Expanded fields:
//! - `code.source_dir`
//! - `text.source_dir`
//! - `text.output_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the default code source directory.
    pub code_dir: Option<PathBuf>,
    /// Override the manuscript source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the preprocessed output directory.
    pub output_dir: Option<PathBuf>,
    /// Override line numbering of highlighted code.
    pub line_numbers: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pubrx.toml";

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Code snippet configuration (paths are relative strings from TOML).
    code: CodeConfigRaw,
    /// Manuscript configuration (paths are relative strings from TOML).
    text: TextConfigRaw,

    /// Resolved code configuration (set after loading).
    #[serde(skip)]
    pub code_resolved: CodeConfig,
    /// Resolved manuscript configuration (set after loading).
    #[serde(skip)]
    pub text_resolved: TextConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw code configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CodeConfigRaw {
    source_dir: Option<String>,
    line_numbers: Option<bool>,
}

/// Resolved code snippet configuration.
#[derive(Debug, Default, Clone)]
pub struct CodeConfig {
    /// Directory `///code` directives read from when they carry no
    /// `:directory` parameter.
    pub source_dir: PathBuf,
    /// Whether highlighted code gets line numbers by default.
    pub line_numbers: bool,
}

/// Raw manuscript configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TextConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved manuscript configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct TextConfig {
    /// Directory scanned for `*.md` manuscript files.
    pub source_dir: PathBuf,
    /// Directory preprocessed files are written to.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`code.source_dir`").
        field: String,
        /// Error message (e.g., "${`CODE_DIR`} not set").
        message: String,
    },
}

impl ConfigError {
    /// A directory field was given as an empty string.
    fn empty_field(field: &str) -> Self {
        Self::Validation(format!("{field} cannot be empty"))
    }

    /// A directory field referenced an unset environment variable.
    fn env_var(field: &str, var: &str) -> Self {
        Self::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        }
    }
}

/// Require an optional string field to be non-empty when present.
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::empty_field(field));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pubrx.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(code_dir) = &settings.code_dir {
            self.code_resolved.source_dir.clone_from(code_dir);
        }
        if let Some(line_numbers) = settings.line_numbers {
            self.code_resolved.line_numbers = line_numbers;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.text_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.text_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Validate raw values before expansion so empty strings are caught
        config.validate()?;
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any path value is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.code.source_dir.as_deref(), "code.source_dir")?;
        require_non_empty(self.text.source_dir.as_deref(), "text.source_dir")?;
        require_non_empty(self.text.output_dir.as_deref(), "text.output_dir")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_field(&mut self.code.source_dir, "code.source_dir")?;
        expand::expand_field(&mut self.text.source_dir, "text.source_dir")?;
        expand::expand_field(&mut self.text.output_dir, "text.output_dir")
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.code_resolved = CodeConfig {
            source_dir: resolve(self.code.source_dir.as_deref(), "."),
            line_numbers: self.code.line_numbers.unwrap_or(false),
        };

        self.text_resolved = TextConfig {
            source_dir: resolve(self.text.source_dir.as_deref(), "text"),
            output_dir: resolve(self.text.output_dir.as_deref(), "output/preprocessed"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/book"));
        assert_eq!(config.code_resolved.source_dir, PathBuf::from("/book/."));
        assert!(!config.code_resolved.line_numbers);
        assert_eq!(config.text_resolved.source_dir, PathBuf::from("/book/text"));
        assert_eq!(
            config.text_resolved.output_dir,
            PathBuf::from("/book/output/preprocessed")
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.code.source_dir.is_none());
        assert!(config.text.output_dir.is_none());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[code]
source_dir = "../code"
line_numbers = true

[text]
source_dir = "chapters"
output_dir = "build"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/book"));

        assert_eq!(
            config.code_resolved.source_dir,
            PathBuf::from("/book/../code")
        );
        assert!(config.code_resolved.line_numbers);
        assert_eq!(
            config.text_resolved.source_dir,
            PathBuf::from("/book/chapters")
        );
        assert_eq!(config.text_resolved.output_dir, PathBuf::from("/book/build"));
    }

    #[test]
    fn test_absolute_path_not_joined() {
        let toml = r#"
[code]
source_dir = "/srv/code"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/book"));
        assert_eq!(config.code_resolved.source_dir, PathBuf::from("/srv/code"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let toml = r#"
[code]
source_dir = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("code.source_dir cannot be empty"));
    }

    #[test]
    fn test_unknown_field_type_is_parse_error() {
        let toml = r#"
[code]
line_numbers = "yes"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[code]\nsource_dir = \"code\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(
            config.code_resolved.source_dir,
            temp_dir.path().join("code")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_reports_unset_variable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[text]\noutput_dir = \"${PUBRX_UNSET_OUTPUT}/html\"\n").unwrap();
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PUBRX_UNSET_OUTPUT");
        }

        let err = Config::load(Some(&path), None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Environment variable error in text.output_dir: ${PUBRX_UNSET_OUTPUT} not set"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/pubrx.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_cli_settings_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[code]\nsource_dir = \"code\"\n").unwrap();

        let settings = CliSettings {
            code_dir: Some(PathBuf::from("/elsewhere")),
            line_numbers: Some(true),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.code_resolved.source_dir, PathBuf::from("/elsewhere"));
        assert!(config.code_resolved.line_numbers);
        assert_eq!(
            config.text_resolved.source_dir,
            temp_dir.path().join("text")
        );
    }
}
