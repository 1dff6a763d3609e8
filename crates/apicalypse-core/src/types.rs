//! Common types used throughout Apicalypse RS

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::FieldResolutionError;
use crate::result::QueryResult;

/// Dotted path of wire-level field names (e.g. `release_dates.date`)
///
/// A path always holds at least one segment. Paths are produced by an
/// entity's resolver, or from a raw name through the string escape hatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Single-segment path
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Prefix `child` with the field that holds the related entity
    pub fn nested(parent: impl Into<String>, child: FieldPath) -> Self {
        Self::name(parent).join(child)
    }

    /// Append the segments of a related entity's path
    pub fn join(mut self, child: FieldPath) -> Self {
        self.segments.extend(child.segments);
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the path reaches into a related entity
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Render as the dotted wire name
    pub fn render(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<String> for FieldPath {
    fn from(name: String) -> Self {
        Self::name(name)
    }
}

impl From<&String> for FieldPath {
    fn from(name: &String) -> Self {
        Self::name(name.as_str())
    }
}

/// Per-entity mapping from typed field references to wire names
///
/// Entities keep one of these in a `LazyLock` static and resolve their flat
/// field references through it. Anything missing from the table is rejected.
#[derive(Debug, Clone)]
pub struct FieldTable<F> {
    entity: &'static str,
    names: HashMap<F, &'static str>,
}

impl<F> FieldTable<F>
where
    F: Copy + Eq + Hash + fmt::Debug,
{
    /// Build a table from `(reference, wire name)` pairs
    pub fn new(entity: &'static str, entries: &[(F, &'static str)]) -> Self {
        Self {
            entity,
            names: entries.iter().copied().collect(),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Resolve a reference to its single-segment path
    pub fn resolve(&self, field: F) -> QueryResult<FieldPath> {
        match self.names.get(&field) {
            Some(name) => Ok(FieldPath::name(*name)),
            None => {
                tracing::debug!(
                    entity = self.entity,
                    reference = ?field,
                    "field reference missing from mapping table"
                );
                Err(FieldResolutionError::not_recognized(
                    self.entity,
                    format!("{:?}", field),
                ))
            }
        }
    }

    pub fn contains(&self, field: F) -> bool {
        self.names.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Field {
        Name,
        Rating,
        Hidden,
    }

    fn table() -> FieldTable<Field> {
        FieldTable::new("games", &[(Field::Name, "name"), (Field::Rating, "total_rating")])
    }

    #[test]
    fn test_field_path_render() {
        assert_eq!(FieldPath::name("name").render(), "name");

        let nested = FieldPath::nested("release_dates", FieldPath::name("date"));
        assert_eq!(nested.render(), "release_dates.date");
        assert_eq!(nested.segments(), ["release_dates", "date"]);
        assert!(nested.is_nested());
    }

    #[test]
    fn test_field_path_deep_nesting() {
        let path = FieldPath::nested(
            "release_dates",
            FieldPath::nested("platform", FieldPath::name("name")),
        );
        assert_eq!(path.to_string(), "release_dates.platform.name");
    }

    #[test]
    fn test_field_path_join() {
        let path = FieldPath::name("platforms").join(FieldPath::name("abbreviation"));
        assert_eq!(path.render(), "platforms.abbreviation");
    }

    #[test]
    fn test_raw_name_is_single_segment() {
        let path = FieldPath::from("cover.url");
        assert_eq!(path.segments().len(), 1);
        assert_eq!(path.render(), "cover.url");
    }

    #[test]
    fn test_table_resolves_declared_fields() {
        let table = table();
        assert_eq!(table.resolve(Field::Name).unwrap().render(), "name");
        assert_eq!(table.resolve(Field::Rating).unwrap().render(), "total_rating");
        assert_eq!(table.len(), 2);
        assert!(table.contains(Field::Name));
    }

    #[test]
    fn test_table_rejects_undeclared_fields() {
        let err = table().resolve(Field::Hidden).unwrap_err();
        assert_eq!(
            err,
            FieldResolutionError::not_recognized("games", "Hidden")
        );
    }
}
