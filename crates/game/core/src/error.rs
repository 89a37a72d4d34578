//! Errors for variant catalog construction and lookup.
//!
//! The character state machine itself is infallible: an action request that
//! cannot apply is ignored and reported through
//! [`ActionOutcome`](crate::ActionOutcome), never through `Result`. Only
//! building a roster from external data can fail.

use crate::variant::VariantKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("variant {0} is not in the catalog")]
    MissingVariant(VariantKind),

    #[error("variant {kind} is listed more than once")]
    DuplicateVariant { kind: VariantKind },

    #[error("variant {kind}: {reason}")]
    InvalidVariant {
        kind: VariantKind,
        reason: &'static str,
    },

    #[error("catalog is empty")]
    Empty,
}
