use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub keywords: KeywordsConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Spreadsheet with the product catalog (.xlsx, .xls, .ods or .csv)
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KeywordsConfig {
    /// JSON file with persisted search keyword counts
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub assets_dir: String,
    pub dist_dir: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            dist_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionsConfig {
    /// Sessions without requests for this long are dropped
    pub idle_timeout_minutes: i64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: 30,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
path = "data/catalog.xlsx"

[keywords]
path = "data/search_keywords.json"

[static_files]
assets_dir = "assets"
dist_dir = "dist"

[sessions]
idle_timeout_minutes = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolves a configured path.
///
/// Absolute paths are used as is. Relative paths are resolved against the
/// executable directory when the target exists there, otherwise against
/// the current directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(path);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(configured)
}
