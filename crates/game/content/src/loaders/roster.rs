//! Variant roster loader.

use std::path::Path;

use brawler_core::{VariantCatalog, VariantSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_ROSTER: &str = include_str!("../../data/roster.ron");

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub variants: Vec<VariantSpec>,
}

/// Loader for the variant roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<VariantCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// The reference roster shipped with the crate.
    pub fn embedded() -> LoadResult<VariantCatalog> {
        Self::parse(EMBEDDED_ROSTER)
    }

    pub fn parse(content: &str) -> LoadResult<VariantCatalog> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        let catalog = VariantCatalog::new(roster.variants)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawler_core::{CatalogError, VariantKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn embedded_roster_matches_reference() {
        assert_eq!(RosterLoader::embedded().unwrap(), VariantCatalog::reference());
    }

    #[test]
    fn capabilities_are_optional() {
        let catalog = RosterLoader::parse(
            r#"(variants: [
                (kind: Samurai, name: "Ronin", params: (walk_speed: 1, run_speed: 2, attack_power: 90, jump_distance: 30)),
            ])"#,
        )
        .unwrap();

        let spec = catalog.get(VariantKind::Samurai).unwrap();
        assert_eq!(spec.name, "Ronin");
        assert!(spec.shield.is_none());
        assert!(spec.mana.is_none());
    }

    #[test]
    fn invalid_roster_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(variants: [])").unwrap();

        let err = RosterLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to load roster"));
        assert_eq!(
            RosterLoader::parse("(variants: [])")
                .unwrap_err()
                .downcast_ref::<CatalogError>(),
            Some(&CatalogError::Empty)
        );
    }
}
