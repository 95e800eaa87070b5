use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "bookcatalog";
const ENV_PREFIX: &str = "BOOKCATALOG";

/// Application settings, layered from an optional `bookcatalog.toml` in the
/// working directory, an explicitly passed config file, and
/// `BOOKCATALOG_`-prefixed environment variables, in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_catalog_name")]
    pub catalog_name: String,
    #[serde(default = "AppConfig::default_data_file")]
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        let cfg = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to build configuration")?;

        cfg.try_deserialize()
            .context("failed to deserialize configuration")
    }

    fn default_catalog_name() -> String {
        "City Library".to_string()
    }

    fn default_data_file() -> PathBuf {
        PathBuf::from("catalog.json")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_name: Self::default_catalog_name(),
            data_file: Self::default_data_file(),
        }
    }
}
