//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use paikeys_domain::config::config_key::{ENV_PREFIX, known_keys, lookup_key};
use std::path::PathBuf;
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["paikeys.toml", ".paikeys.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PAIKEYS_*` environment variables (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./paikeys.toml` or `./.paikeys.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/paikeys/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Merging project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/paikeys/config.toml if set,
    /// otherwise the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("paikeys").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* (e.g. {})", ENV_PREFIX, Self::example_env_var());

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./paikeys.toml or ./.paikeys.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
        println!();
        println!("Known keys:");
        for key in known_keys() {
            if key.valid_values.is_empty() {
                println!("  {:<26} {}", key.key, key.description);
            } else {
                println!(
                    "  {:<26} {} ({})",
                    key.key,
                    key.description,
                    key.valid_values.join(" | ")
                );
            }
        }
    }

    fn example_env_var() -> String {
        lookup_key("scoring.tone_bonus")
            .map(|key| key.env_var())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.catalog.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("paikeys"));
    }

    #[test]
    fn test_example_env_var() {
        assert_eq!(ConfigLoader::example_env_var(), "PAIKEYS_SCORING__TONE_BONUS");
    }

    #[test]
    fn test_explicit_config_file_is_merged() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[scoring]
tone_bonus = 0.11

[output]
format = "json"
"#
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.scoring.tone_bonus, 0.11);
        assert_eq!(config.output.format, Some(paikeys_domain::OutputFormat::Json));
        // Untouched keys keep their defaults
        assert_eq!(config.scoring.dominant_weight, 0.70);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scoring]\ntone_bonus = \"lots\"").unwrap();
        assert!(ConfigLoader::load(Some(&file.path().to_path_buf())).is_err());
    }
}
