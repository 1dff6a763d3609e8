//! Core error types for Apicalypse RS
//!
//! Field resolution is the only operation in the query core that can fail.

use thiserror::Error;

/// Raised when a typed field reference does not map to a wire field name.
///
/// Resolution is a pure lookup, so retrying never helps: a failure means the
/// entity's mapping table is missing a declared property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldResolutionError {
    #[error("Field not recognized: {reference} is not declared on {entity}")]
    NotRecognized {
        entity: &'static str,
        reference: String,
    },
}

impl FieldResolutionError {
    /// Create a "not recognized" error for a reference on an entity
    pub fn not_recognized(entity: &'static str, reference: impl Into<String>) -> Self {
        Self::NotRecognized {
            entity,
            reference: reference.into(),
        }
    }

    /// Name of the entity whose mapping rejected the reference
    pub fn entity(&self) -> &'static str {
        match self {
            Self::NotRecognized { entity, .. } => *entity,
        }
    }

    /// Debug rendering of the rejected reference
    pub fn reference(&self) -> &str {
        match self {
            Self::NotRecognized { reference, .. } => reference,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotRecognized { .. } => "field_not_recognized",
        }
    }
}
