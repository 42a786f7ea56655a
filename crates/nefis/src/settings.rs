//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file: an explicit path, else `./nefis.toml`, else
//!    `<config dir>/nefis/nefis.toml`
//! 3. `NEFIS__<SECTION>__<KEY>` environment variables
//!
//! `GEMINI_API_KEY` supplies the credential when no other source set one.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use nefis_error::ConfigError;
use nefis_media::ImageResolverConfig;
use nefis_models::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "NEFIS";
/// Separator between prefix, section and key in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Environment variable holding the Gemini credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// File name looked up in the working directory and the config directory.
pub const CONFIG_FILE_NAME: &str = "nefis.toml";

/// Settings for the whole application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct AppConfig {
    /// Completion client settings
    gemini: GeminiConfig,
    /// Image link resolver settings
    images: ImageResolverConfig,
}

impl AppConfig {
    /// Load configuration from the file and the process environment.
    ///
    /// An explicit `path` must exist; the default locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], reading variables from `env` instead of the
    /// process environment when it is given.
    #[instrument(skip(env))]
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder
                    .add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                if let Some(path) = default_config_path() {
                    debug!(path = %path.display(), "Using default config file");
                    builder = builder
                        .add_source(File::from(path).format(FileFormat::Toml).required(false));
                }
            }
        }

        let api_key_from_env = match &env {
            Some(vars) => vars.get(API_KEY_VAR).cloned(),
            None => std::env::var(API_KEY_VAR).ok(),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        );

        let mut config: AppConfig = builder
            .build()
            .and_then(|built| built.try_deserialize::<AppConfig>())
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        if config.gemini.usable_api_key().is_none()
            && let Some(key) = api_key_from_env.filter(|k| !k.trim().is_empty())
        {
            debug!("Using {} for the Gemini credential", API_KEY_VAR);
            config.gemini = config.gemini.with_api_key(key);
        }

        info!(
            model = %config.gemini.model(),
            api_key_set = config.gemini.usable_api_key().is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// `./nefis.toml` if present, else `<config dir>/nefis/nefis.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir().map(|dir| dir.join("nefis").join(CONFIG_FILE_NAME))
}
