//! Core traits that entities and comparand values implement
//!
//! An entity becomes queryable by implementing [`Composable`]: a pure,
//! deterministic mapping from its typed field references to wire names.
//! Comparand values expose their canonical text through [`QueryValue`].

use std::fmt;

use chrono::{DateTime, Utc};

use crate::result::QueryResult;
use crate::types::FieldPath;

/// Entity that supplies the field resolver capability
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
/// use apicalypse_core::{Composable, FieldPath, FieldTable, QueryResult, TypedField};
///
/// struct Company;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum CompanyField {
///     Name,
///     Country,
/// }
///
/// static FIELDS: LazyLock<FieldTable<CompanyField>> = LazyLock::new(|| {
///     FieldTable::new("companies", &[(CompanyField::Name, "name"), (CompanyField::Country, "country")])
/// });
///
/// impl Composable for Company {
///     const NAME: &'static str = "companies";
///     type Field = CompanyField;
///
///     fn resolve(field: CompanyField) -> QueryResult<FieldPath> {
///         FIELDS.resolve(field)
///     }
/// }
///
/// impl TypedField for CompanyField {
///     type Entity = Company;
/// }
///
/// assert_eq!(CompanyField::Country.path().unwrap().render(), "country");
/// ```
pub trait Composable {
    /// Entity name used in error messages (usually the endpoint name)
    const NAME: &'static str;

    /// Typed reference to one of the entity's properties
    type Field: Copy + fmt::Debug;

    /// Map a typed reference to its wire-level field path
    fn resolve(field: Self::Field) -> QueryResult<FieldPath>;
}

/// Composable entity that additionally permits a `search` clause
pub trait Searchable: Composable {}

/// Typed field reference that knows which entity declares it
pub trait TypedField: Copy + fmt::Debug {
    type Entity: Composable<Field = Self>;

    /// Resolve through the owning entity's mapping
    fn path(self) -> QueryResult<FieldPath> {
        <Self::Entity as Composable>::resolve(self)
    }
}

/// Anything a query for entity `E` accepts where a field is expected
///
/// Typed references resolve through `E`'s mapping and may fail. Raw strings
/// and prebuilt paths are the explicit escape hatch and never fail.
pub trait IntoFieldPath<E: ?Sized> {
    fn into_field_path(self) -> QueryResult<FieldPath>;
}

impl<F: TypedField> IntoFieldPath<F::Entity> for F {
    fn into_field_path(self) -> QueryResult<FieldPath> {
        self.path()
    }
}

impl<'a, E: ?Sized> IntoFieldPath<E> for &'a str {
    fn into_field_path(self) -> QueryResult<FieldPath> {
        Ok(FieldPath::name(self))
    }
}

impl<E: ?Sized> IntoFieldPath<E> for String {
    fn into_field_path(self) -> QueryResult<FieldPath> {
        Ok(FieldPath::name(self))
    }
}

impl<E: ?Sized> IntoFieldPath<E> for FieldPath {
    fn into_field_path(self) -> QueryResult<FieldPath> {
        Ok(self)
    }
}

/// Canonical textual form of a comparand
///
/// Enums implement this by hand so that their wire value is an explicit
/// contract (e.g. the first category renders as `0`).
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

/// Comparand that supports the ordering operators
pub trait Numeric: QueryValue {}

macro_rules! numeric_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }

            impl Numeric for $ty {}
        )*
    };
}

numeric_query_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {}

impl<T: QueryValue> QueryValue for Option<T> {
    fn to_query_value(&self) -> String {
        match self {
            Some(value) => value.to_query_value(),
            None => "null".to_string(),
        }
    }
}

/// Dates go over the wire as Unix timestamps in seconds
impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.timestamp().to_string()
    }
}

impl Numeric for DateTime<Utc> {}

/// Join the textual forms of a collection with `,`, keeping input order
pub fn join_values<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: QueryValue,
{
    values
        .into_iter()
        .map(|value| value.to_query_value())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, Copy)]
    enum Genre {
        Shooter,
        Puzzle,
    }

    impl QueryValue for Genre {
        fn to_query_value(&self) -> String {
            match self {
                Genre::Shooter => "5".to_string(),
                Genre::Puzzle => "9".to_string(),
            }
        }
    }

    #[test]
    fn test_numbers_render_decimal() {
        assert_eq!(42u64.to_query_value(), "42");
        assert_eq!((-7i32).to_query_value(), "-7");
        assert_eq!(80.5f64.to_query_value(), "80.5");
    }

    #[test]
    fn test_strings_render_verbatim() {
        assert_eq!("zelda".to_query_value(), "zelda");
        assert_eq!(String::from("Mario Kart").to_query_value(), "Mario Kart");
    }

    #[test]
    fn test_absent_values_render_null() {
        let none: Option<u32> = None;
        assert_eq!(none.to_query_value(), "null");
        assert_eq!(Some(3u32).to_query_value(), "3");
    }

    #[test]
    fn test_custom_enum_value() {
        assert_eq!(Genre::Shooter.to_query_value(), "5");
        assert_eq!(join_values([Genre::Puzzle, Genre::Shooter]), "9,5");
    }

    #[test]
    fn test_datetime_renders_unix_seconds() {
        let date = Utc.with_ymd_and_hms(2017, 3, 3, 0, 0, 0).unwrap();
        assert_eq!(date.to_query_value(), "1488499200");
    }

    #[test]
    fn test_join_values_keeps_order() {
        assert_eq!(join_values([9, 6, 12]), "9,6,12");
        assert_eq!(join_values(Vec::<u32>::new()), "");
        assert_eq!(join_values(&[1u8, 2]), "1,2");
    }
}
