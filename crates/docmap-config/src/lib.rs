//! Configuration management for docmap.
//!
//! Parses `docmap.toml` (or `.json`/`.yaml`) project files with serde and
//! provides auto-discovery of config files in parent directories.
//!
//! A project file is a [`SiteConfig`] (the documentation generator's
//! configuration object) plus an optional `[check]` table controlling how
//! strictly links are validated. CLI settings can be applied during load via
//! [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `themeConfig.editLink.pattern`
//! - `themeConfig.socialLinks[].link`

mod expand;
mod schema;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use schema::{
    EditLink, Footer, NavEntry, PATH_PLACEHOLDER, SearchConfig, SearchProvider, Sidebar,
    SidebarGroup, SidebarSection, SiteConfig, SocialLink, ThemeConfig, is_external_link,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override broken link handling.
    pub broken_links: Option<LinkPolicy>,
}

/// Configuration filenames to search for, in priority order.
const CONFIG_FILENAMES: [&str; 4] = ["docmap.toml", "docmap.json", "docmap.yaml", "docmap.yml"];

/// Project configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Site configuration (top-level keys of the file).
    #[serde(flatten)]
    pub site: SiteConfig,
    /// Link checking configuration.
    #[serde(default)]
    pub check: CheckConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Link checking configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// How to treat nav entries whose internal link matches no sidebar section.
    pub broken_links: LinkPolicy,
}

/// Handling of internal nav links that match no sidebar section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkPolicy {
    /// Fail resolution.
    #[default]
    #[serde(rename = "error", alias = "deny")]
    Deny,
    /// Log a warning and keep going.
    #[serde(rename = "warn")]
    Warn,
}

/// On-disk configuration format, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::Validation(format!(
                "unsupported config format: {} (expected .toml, .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
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
    Toml(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`themeConfig.editLink.pattern`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docmap.toml`, `docmap.json`, `docmap.yaml`
    /// or `docmap.yml` in the current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found or parsing/validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => Self::discover_config().ok_or_else(|| {
                let cwd = std::env::current_dir().unwrap_or_default();
                ConfigError::NotFound(cwd.join(CONFIG_FILENAMES[0]))
            })?,
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse, expand and validate configuration from a string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, environment expansion or validation fails.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let mut config: Self = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };

        config.expand_env_vars()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(policy) = settings.broken_links {
            self.check.broken_links = policy;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            if let Some(found) = CONFIG_FILENAMES
                .iter()
                .map(|name| current.join(name))
                .find(|candidate| candidate.exists())
            {
                return Some(found);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content, format)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            nav = config.site.theme_config.nav.len(),
            sections = config.site.theme_config.sidebar.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks the site-level fields that have a required shape. Navigation
    /// and sidebar consistency is checked when the site map is resolved.
    /// Called automatically after parsing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_lang()?;
        self.validate_theme()?;
        Ok(())
    }

    /// Validate the language tag.
    fn validate_lang(&self) -> Result<(), ConfigError> {
        let lang = &self.site.lang;
        require_non_empty(lang, "lang")?;

        let well_formed = lang.split('-').all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if !well_formed {
            return Err(ConfigError::Validation(format!(
                "lang is not a valid language tag: {lang}"
            )));
        }

        Ok(())
    }

    /// Validate theme metadata URLs.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        let theme = &self.site.theme_config;

        if let Some(edit_link) = &theme.edit_link {
            require_non_empty(&edit_link.pattern, "themeConfig.editLink.pattern")?;
            require_http_url(&edit_link.pattern, "themeConfig.editLink.pattern")?;
        }

        for (i, social) in theme.social_links.iter().enumerate() {
            let field = format!("themeConfig.socialLinks[{i}].link");
            require_non_empty(&social.link, &field)?;
            require_http_url(&social.link, &field)?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "title")?;
        self.site.description = expand::expand_env(&self.site.description, "description")?;

        let theme = &mut self.site.theme_config;

        if let Some(ref mut edit_link) = theme.edit_link {
            edit_link.pattern =
                expand::expand_env(&edit_link.pattern, "themeConfig.editLink.pattern")?;
        }

        for (i, social) in theme.social_links.iter_mut().enumerate() {
            social.link =
                expand::expand_env(&social.link, &format!("themeConfig.socialLinks[{i}].link"))?;
        }

        Ok(())
    }
}
