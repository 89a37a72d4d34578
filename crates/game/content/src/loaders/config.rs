//! Game configuration loader.

use std::path::Path;

use brawler_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    /// The configuration shipped with the crate.
    pub fn embedded() -> LoadResult<GameConfig> {
        Self::parse(EMBEDDED_CONFIG)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawler_core::Position;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(ConfigLoader::embedded().unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "frame_delay = 6\n\n[spawn]\nx = 10\ny = 20").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.frame_delay, 6);
        assert_eq!(config.spawn, Position::new(10, 20));
        assert_eq!(config.jump_height, GameConfig::DEFAULT_JUMP_HEIGHT);
    }

    #[test]
    fn malformed_file_names_the_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "frame_delay = \"fast\"").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
