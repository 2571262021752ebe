//! Configuration management for the munemo command line tool
use std::path::Path;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use munemo::DialectKind;
use serde::Deserialize;

/// Location of the default configuration file, relative to the crate root.
pub const DEFAULT_CONFIG_PATH: &str = "./src/config/default.toml";

/// Prefix of the environment variables that override configuration values.
pub const ENV_PREFIX: &str = "MUNEMO";

/// Top-level configuration for the munemo tool
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Codec configuration
    pub codec: CodecConfig,
}

/// Settings for encoding and decoding tokens
#[derive(Deserialize, Clone, Debug)]
pub struct CodecConfig {
    /// The dialect used to encode and decode tokens.
    pub dialect: DialectKind,
}

impl Settings {
    /// Initializing the config first with default values, then the optional
    /// configuration file and finally any environment variables. The double
    /// underscore separator is needed to reach nested keys, e.g.
    /// `MUNEMO_CODEC__DIALECT`.
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .prefix_separator("_");

        let mut cfg_builder = Config::builder();
        cfg_builder = cfg_builder.set_default("codec.dialect", DialectKind::default().as_str())?;

        if let Some(path) = config_path {
            cfg_builder = cfg_builder.add_source(File::from(path.as_ref()));
        }
        cfg_builder = cfg_builder.add_source(env);

        let cfg = cfg_builder.build()?;

        let settings: Settings = cfg.try_deserialize()?;

        tracing::debug!(dialect = %settings.codec.dialect, "loaded configuration");

        Ok(settings)
    }

    /// Load the settings from the default configuration file.
    pub fn new_from_default_config() -> Result<Self, ConfigError> {
        Self::new(Some(DEFAULT_CONFIG_PATH))
    }
}
