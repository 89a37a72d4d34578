//! Content factory for resolving game content from a data directory.

use std::path::{Path, PathBuf};

use brawler_core::{GameConfig, VariantCatalog};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Content factory that loads all game content from an optional data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── roster.ron
/// ```
///
/// A file that does not exist falls back to the embedded default. A file that
/// exists but fails to parse or validate is an error.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a factory that reads overrides from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory serving only the embedded content.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::embedded(),
        }
    }

    /// Load the variant roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<VariantCatalog> {
        match self.existing("roster.ron") {
            Some(path) => RosterLoader::load(&path),
            None => RosterLoader::embedded(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, file_name: &str) -> Option<PathBuf> {
        let path = self.data_dir.as_ref()?.join(file_name);
        if path.is_file() {
            tracing::info!(path = %path.display(), "loading content override");
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "no override, using embedded content");
            None
        }
    }
}

impl Default for ContentFactory {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Some(Path::new("/tmp/data")));
        assert_eq!(ContentFactory::embedded().data_dir(), None);
    }

    #[test]
    fn missing_files_fall_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(factory.load_roster().unwrap(), VariantCatalog::reference());
    }

    #[test]
    fn overrides_are_read_from_data_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "frame_delay = 2\n").unwrap();
        std::fs::write(
            dir.path().join("roster.ron"),
            r#"(variants: [(kind: Fighter, name: "Solo", params: (walk_speed: 3, run_speed: 6, attack_power: 10, jump_distance: 90))])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().frame_delay, 2);

        let roster = factory.load_roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.iter().next().map(|spec| spec.name.as_str()), Some("Solo"));
    }

    #[test]
    fn broken_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("roster.ron"), "(variants: [").unwrap();

        assert!(ContentFactory::new(dir.path()).load_roster().is_err());
    }
}
