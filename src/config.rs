use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use plateup_recipe::detail::{BASE_SERVINGS, MAX_SERVINGS, MIN_SERVINGS};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub recipe: RecipeConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Recipe catalog JSON file. The bundled catalog is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// File holding favorites and the saved ingredient selection.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    #[serde(default = "default_servings")]
    pub default_servings: u32,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
        }
    }
}

fn default_servings() -> u32 {
    BASE_SERVINGS
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PLATEUP__STORAGE__PATH, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.path", "plateup.json")?
            .set_default("observability.log_level", default_log_level())?
            .set_default("recipe.default_servings", i64::from(default_servings()))?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, defaults apply when the file is absent
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PLATEUP")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.storage.path.trim().is_empty() {
            return Err("Storage path must not be empty".to_string());
        }
        if !(MIN_SERVINGS..=MAX_SERVINGS).contains(&self.recipe.default_servings) {
            return Err(format!(
                "Default servings must be between {MIN_SERVINGS} and {MAX_SERVINGS}"
            ));
        }
        if self
            .catalog
            .path
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            return Err("Catalog path must not be empty when set".to_string());
        }
        Ok(())
    }
}
