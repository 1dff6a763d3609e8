//! Platform model
//!
//! Endpoint: platforms

use std::sync::LazyLock;

use apicalypse_core::{Composable, FieldPath, FieldTable, QueryResult, Searchable, TypedField};

use crate::Id;

/// Hardware or software platform a game runs on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Platform {
    pub id: Option<Id>,
    pub name: String,
    pub abbreviation: Option<String>,
    pub alternative_name: Option<String>,
    pub slug: String,
    /// Console generation
    pub generation: Option<u32>,
}

/// Typed reference to a platform property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformField {
    Id,
    Name,
    Abbreviation,
    AlternativeName,
    Slug,
    Generation,
}

static FIELDS: LazyLock<FieldTable<PlatformField>> = LazyLock::new(|| {
    FieldTable::new(
        Platform::NAME,
        &[
            (PlatformField::Id, "id"),
            (PlatformField::Name, "name"),
            (PlatformField::Abbreviation, "abbreviation"),
            (PlatformField::AlternativeName, "alternative_name"),
            (PlatformField::Slug, "slug"),
            (PlatformField::Generation, "generation"),
        ],
    )
});

impl Composable for Platform {
    const NAME: &'static str = "platforms";
    type Field = PlatformField;

    fn resolve(field: PlatformField) -> QueryResult<FieldPath> {
        FIELDS.resolve(field)
    }
}

impl Searchable for Platform {}

impl TypedField for PlatformField {
    type Entity = Platform;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_fields() {
        assert_eq!(PlatformField::Name.path().unwrap().render(), "name");
        assert_eq!(
            PlatformField::AlternativeName.path().unwrap().render(),
            "alternative_name"
        );
        assert!(!PlatformField::Generation.path().unwrap().is_nested());
    }
}
