use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::fs::atomic_write;
use crate::paths;
use crate::translation::DEFAULT_GOOGLE_ENDPOINT;

/// Settings in the `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the Dragon Ball API.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Which service translates descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Google Translate web endpoint, no key required.
    #[default]
    Google,
    /// An OpenAI-compatible chat completion provider from `[providers]`.
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
}

/// Settings in the `[translation]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Set to `false` to show descriptions untranslated.
    pub enabled: Option<bool>,
    pub backend: Option<BackendKind>,
    /// Override for the Google endpoint.
    pub endpoint: Option<String>,
    /// Provider name for the `openai` backend.
    pub provider: Option<String>,
    /// Model name for the `openai` backend.
    pub model: Option<String>,
}

/// Configuration for an OpenAI-compatible provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/dbz/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Translation backend after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Google {
        endpoint: String,
    },
    OpenAi {
        provider_name: String,
        endpoint: String,
        model: String,
        api_key: Option<String>,
    },
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// `None` when translation is disabled.
    pub translation: Option<BackendConfig>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_translate: bool,
    pub backend: Option<BackendKind>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let base_url = options
        .base_url
        .as_ref()
        .or(config_file.api.base_url.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout_secs = options
        .timeout_secs
        .or(config_file.api.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        bail!("Invalid configuration: 'timeout_secs' must be greater than zero");
    }

    let enabled = !options.no_translate && config_file.translation.enabled.unwrap_or(true);
    let translation = if enabled {
        Some(resolve_backend(options, config_file)?)
    } else {
        None
    };

    Ok(ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        translation,
    })
}

fn resolve_backend(options: &ResolveOptions, config_file: &ConfigFile) -> Result<BackendConfig> {
    let backend = options
        .backend
        .or(config_file.translation.backend)
        .unwrap_or_default();

    match backend {
        BackendKind::Google => Ok(BackendConfig::Google {
            endpoint: config_file
                .translation
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_GOOGLE_ENDPOINT.to_string()),
        }),
        BackendKind::OpenAi => resolve_openai(options, config_file),
    }
}

fn resolve_openai(options: &ResolveOptions, config_file: &ConfigFile) -> Result<BackendConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.translation.provider.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'provider'\n\n\
                 The openai backend needs a provider. Please provide it via:\n  \
                 - CLI option: dbz --provider <name>\n  \
                 - Config file: [translation] provider in ~/.config/dbz/config.toml"
            )
        })?;

    let provider_config = config_file.providers.get(&provider_name).ok_or_else(|| {
        let mut available: Vec<_> = config_file.providers.keys().map(String::as_str).collect();
        available.sort_unstable();
        if available.is_empty() {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 No providers configured. Add providers to ~/.config/dbz/config.toml"
            )
        } else {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 Available providers:\n  \
                 - {}\n\n\
                 Add providers to ~/.config/dbz/config.toml",
                available.join("\n  - ")
            )
        }
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.translation.model.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: dbz --model <name>\n  \
                 - Config file: [translation] model in ~/.config/dbz/config.toml"
            )
        })?;

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        warn!(
            "Model '{model}' is not in the configured models list for '{provider_name}' ({}), proceeding anyway",
            provider_config.models.join(", ")
        );
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/dbz/config.toml"
        );
    }

    Ok(BackendConfig::OpenAi {
        provider_name,
        endpoint: provider_config.endpoint.clone(),
        model,
        api_key,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/dbz/config.toml`
    /// or `~/.config/dbz/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Writes `config` as TOML, replacing the file atomically.
    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file; a missing file yields defaults, a broken one is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }
}
