//! Configuration management for XP.
//!
//! Parses `xp.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings (which clap may source from `PUBLIC_SITE` and
//! `PUBLIC_STRAPI_URL`) are applied during load via [`CliSettings`].
//! The resulting [`Config`] is an explicit value handed to the CMS client and
//! the components; nothing reads the environment after loading.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.id`
//! - `site.url`
//! - `site.images_url`
//! - `cms.base_url`
//! - `cms.images_url`
//! - `cms.token`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site identifier.
    pub site: Option<String>,
    /// Override the CMS base URL.
    pub cms_url: Option<String>,
    /// Override the image host URL.
    pub images_url: Option<String>,
    /// Override the content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "xp.toml";

/// Site identifier used when nothing else is configured.
pub const DEFAULT_SITE_ID: &str = "no-site-found";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Headless CMS connection (optional section).
    pub cms: Option<CmsConfig>,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity shared by every rendered page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site identifier used to filter CMS content.
    pub id: String,
    /// Display name (page title suffix, publisher name).
    pub name: String,
    /// Canonical public URL without trailing slash.
    pub url: String,
    /// Content locale (`OpenGraph` format, e.g. `nl_NL`).
    pub locale: String,
    /// Browser theme color.
    pub theme_color: String,
    /// Image host override; takes precedence over `cms.images_url`.
    pub images_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_SITE_ID.to_owned(),
            name: "XPRTZ".to_owned(),
            url: "https://xprtz.net".to_owned(),
            locale: "nl_NL".to_owned(),
            theme_color: "#1e40af".to_owned(),
            images_url: None,
        }
    }
}

/// Headless CMS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    /// CMS server base URL.
    pub base_url: String,
    /// Asset host used to resolve relative image paths (defaults to `base_url`).
    #[serde(default)]
    pub images_url: Option<String>,
    /// Optional API token sent as a bearer token.
    #[serde(default)]
    pub token: Option<String>,
}

impl CmsConfig {
    /// Create a CMS config for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            images_url: None,
            token: None,
        }
    }

    /// Asset host for images, falling back to the API base URL.
    #[must_use]
    pub fn images_url(&self) -> &str {
        self.images_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "cms.base_url")?;
        require_http_url(&self.base_url, "cms.base_url")?;
        if let Some(images_url) = &self.images_url {
            require_http_url(images_url, "cms.images_url")?;
        }
        if let Some(token) = &self.token {
            require_non_empty(token, "cms.token")?;
        }
        Ok(())
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    code_titles: BTreeMap<String, String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct ContentConfig {
    /// Directory holding authored lesson documents.
    pub source_dir: PathBuf,
    /// Directory rendered pages are written to.
    pub output_dir: PathBuf,
    /// Extra code block titles (language tag to label), merged over the built-ins.
    pub code_titles: BTreeMap<String, String>,
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
        /// Config field path (e.g., "`cms.token`").
        field: String,
        /// Error message (e.g., "${`STRAPI_TOKEN`} not set").
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
    /// Otherwise, searches for `xp.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site) = &settings.site {
            self.site.id.clone_from(site);
        }
        if let Some(cms_url) = &settings.cms_url {
            match &mut self.cms {
                Some(cms) => cms.base_url.clone_from(cms_url),
                None => self.cms = Some(CmsConfig::new(cms_url.clone())),
            }
        }
        if let Some(images_url) = &settings.images_url {
            self.site.images_url = Some(images_url.clone());
        }
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.content_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Host that relative image paths resolve against.
    ///
    /// `site.images_url` (or `--images-url`), then `cms.images_url`, then the
    /// CMS base URL, then the site URL.
    #[must_use]
    pub fn images_url(&self) -> &str {
        self.site
            .images_url
            .as_deref()
            .or_else(|| self.cms.as_ref().map(CmsConfig::images_url))
            .unwrap_or(&self.site.url)
    }

    /// Get validated CMS configuration.
    ///
    /// Use this instead of accessing the `cms` field directly when the command
    /// needs to talk to the CMS.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_cms(&self) -> Result<&CmsConfig, ConfigError> {
        let cms = self.cms.as_ref().ok_or_else(|| {
            ConfigError::Validation("[cms] section or PUBLIC_STRAPI_URL required".into())
        })?;
        cms.validate()?;
        Ok(cms)
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
        Self {
            site: SiteConfig::default(),
            cms: None,
            content: ContentConfigRaw::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("content"),
                output_dir: base.join("dist"),
                code_titles: BTreeMap::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[cms]` section is only checked when present; commands that need
    /// it call [`Config::require_cms`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        if let Some(cms) = &self.cms {
            cms.validate()?;
        }
        self.validate_code_titles()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.id, "site.id")?;
        require_non_empty(&self.site.name, "site.name")?;
        require_http_url(&self.site.url, "site.url")?;
        if let Some(images_url) = &self.site.images_url {
            require_http_url(images_url, "site.images_url")?;
        }
        Ok(())
    }

    fn validate_code_titles(&self) -> Result<(), ConfigError> {
        for (language, label) in &self.content_resolved.code_titles {
            if language.is_empty() {
                return Err(ConfigError::Validation(
                    "content.code_titles keys cannot be empty".to_owned(),
                ));
            }
            require_non_empty(label, &format!("content.code_titles.{language}"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.id = expand::expand_env(&self.site.id, "site.id")?;
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;
        expand::expand_opt(&mut self.site.images_url, "site.images_url")?;

        if let Some(ref mut cms) = self.cms {
            cms.base_url = expand::expand_env(&cms.base_url, "cms.base_url")?;
            expand::expand_opt(&mut cms.images_url, "cms.images_url")?;
            expand::expand_opt(&mut cms.token, "cms.token")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            source_dir: resolve(self.content.source_dir.as_deref(), "content"),
            output_dir: resolve(self.content.output_dir.as_deref(), "dist"),
            code_titles: self.content.code_titles.clone(),
        };
    }
}
