//! Ordered roster of variant specs.
use crate::capability::{ManaSpec, ShieldSpec};
use crate::error::CatalogError;

use super::{VariantKind, VariantParams, VariantSpec};

/// Variants available to a session, in switching order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantCatalog {
    entries: Vec<VariantSpec>,
}

impl VariantCatalog {
    /// Builds a catalog after validating every entry.
    ///
    /// Each kind may appear at most once and the catalog must not be empty.
    pub fn new(entries: Vec<VariantSpec>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, spec) in entries.iter().enumerate() {
            spec.validate()?;
            if entries[..index].iter().any(|other| other.kind == spec.kind) {
                return Err(CatalogError::DuplicateVariant { kind: spec.kind });
            }
        }
        Ok(Self { entries })
    }

    /// The balancing reference roster.
    ///
    /// | kind    | walk | run | attack | jump | capabilities        |
    /// |---------|------|-----|--------|------|---------------------|
    /// | Shinobi | 2    | 4   | 50     | 60   | none                |
    /// | Samurai | 1    | 3   | 80     | 40   | heavy shield        |
    /// | Fighter | 3    | 5   | 60     | 80   | light shield + mana |
    pub fn reference() -> Self {
        Self {
            entries: vec![
                Self::balanced(),
                Self::slow_strong(),
                Self::fast_light(),
            ],
        }
    }

    pub fn balanced() -> VariantSpec {
        VariantSpec::new(
            VariantKind::Shinobi,
            "Shadow Ninja",
            VariantParams::new(2, 4, 50, 60),
        )
    }

    pub fn slow_strong() -> VariantSpec {
        VariantSpec::new(
            VariantKind::Samurai,
            "Blade Samurai",
            VariantParams::new(1, 3, 80, 40),
        )
        .with_shield(ShieldSpec::HEAVY)
    }

    pub fn fast_light() -> VariantSpec {
        VariantSpec::new(
            VariantKind::Fighter,
            "Swift Fighter",
            VariantParams::new(3, 5, 60, 80),
        )
        .with_shield(ShieldSpec::LIGHT)
        .with_mana(ManaSpec::REFERENCE)
    }

    pub fn get(&self, kind: VariantKind) -> Result<&VariantSpec, CatalogError> {
        self.entries
            .iter()
            .find(|spec| spec.kind == kind)
            .ok_or(CatalogError::MissingVariant(kind))
    }

    /// Looks a variant up by its tag name (`"samurai"`, `"Fighter"`, ...).
    pub fn by_name(&self, name: &str) -> Result<&VariantSpec, CatalogError> {
        let kind: VariantKind = name
            .parse()
            .map_err(|_| CatalogError::UnknownVariant(name.to_string()))?;
        self.get(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VariantCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
