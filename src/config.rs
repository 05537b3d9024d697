use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::ColorMode;

/// Environment variable naming an explicit config file
const CONFIG_ENV: &str = "TTM_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_base: Option<String>,
    #[serde(default)]
    pub(crate) owner: Option<String>,
    #[serde(default)]
    pub(crate) repo: Option<String>,
    #[serde(default)]
    pub(crate) listings_path: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ColorMode>,
}

/// Result of the config search. Logging is not set up while the search runs,
/// so what happened is kept here and reported afterwards.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) source: Option<PathBuf>,
    pub(crate) warnings: Vec<String>,
}

impl LoadedConfig {
    pub(crate) fn report(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
        if let Some(path) = &self.source {
            log::debug!("Loaded config from {}", path.display());
        }
    }
}

impl Config {
    pub(crate) fn load() -> LoadedConfig {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> LoadedConfig {
        let mut loaded = LoadedConfig::default();
        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        loaded.config = config;
                        loaded.source = Some(path.clone());
                        return loaded;
                    }
                    Err(e) => {
                        loaded
                            .warnings
                            .push(format!("Failed to parse {}: {}", path.display(), e));
                    }
                }
            }
        }

        loaded
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // An explicit file replaces the search entirely
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return vec![PathBuf::from(explicit)];
        }

        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/ttm/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("ttm").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/ttm/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("ttm").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.ttm.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ttm.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn first_existing_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let first = write_config(dir.path(), "a.toml", "owner = \"first\"\n");
        let second = write_config(dir.path(), "b.toml", "owner = \"second\"\n");

        let loaded = Config::load_from(&[missing, first.clone(), second]);
        assert_eq!(loaded.config.owner.as_deref(), Some("first"));
        assert_eq!(loaded.source, Some(first));
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn unparsable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_config(dir.path(), "broken.toml", "owner = [unclosed\n");
        let good = write_config(
            dir.path(),
            "good.toml",
            "timeout_secs = 4\ncolor = \"always\"\ndebug = true\n",
        );

        let loaded = Config::load_from(&[broken, good]);
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("broken.toml"));
        let config = loaded.config;
        assert_eq!(config.timeout_secs, Some(4));
        assert_eq!(config.color, Some(ColorMode::Always));
        assert!(config.debug);
    }

    #[test]
    fn no_files_gives_defaults() {
        let loaded = Config::load_from(&[]);
        assert!(loaded.config.api_base.is_none());
        assert!(!loaded.config.compact);
        assert!(loaded.source.is_none());
    }

    #[test]
    fn search_paths_are_not_empty() {
        if std::env::var_os(CONFIG_ENV).is_none() {
            assert!(!Config::get_config_paths().is_empty());
        }
    }
}
