use serde::Deserialize;
use skillshelf_matcher::MatcherConfig;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[documents]
dir = "./skills"  # Or set via SKILLSHELF_DOCS_DIR env var

[matcher]
min_token_overlap = 1

[logging]
level = "info"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub documents: DocumentsConfig,
    pub matcher: MatcherConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillshelf/skillshelf.toml
    fn global_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillshelf")
            .join("skillshelf.toml")
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path();

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillshelf/skillshelf.toml (auto-created if missing)
    /// 2. Local override: ./skillshelf.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        // Ensure global config exists
        let global_config_path = Self::ensure_global_config()?;

        // Build config with layered sources (later sources override earlier ones)
        let mut config_builder = config::Config::builder()
            // Layer 1: Global config (required - we just created it if missing)
            .add_source(config::File::from(global_config_path))
            // Layer 2: Local workspace config (optional override)
            .add_source(config::File::with_name("skillshelf").required(false))
            // Layer 3: Environment variables with SKILLSHELF__ prefix
            .add_source(config::Environment::with_prefix("SKILLSHELF").separator("__"));

        // Layer 4: Apply convenience env var overrides (highest priority)
        if let Ok(dir) = env::var("SKILLSHELF_DOCS_DIR") {
            config_builder = config_builder.set_override("documents.dir", dir)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Documents directory with a leading `~` expanded to the home directory
    pub fn documents_dir(&self) -> PathBuf {
        let dir = &self.documents.dir;
        if let Some(rest) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(dir)
    }
}
