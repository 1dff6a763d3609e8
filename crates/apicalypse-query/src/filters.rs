//! Query Filters
//!
//! A filter is one rendered predicate: `<field> <sign> <value>`. Compound
//! filters are built with [`Filter::and`] / [`Filter::or`] and compose at the
//! text level: the left clause becomes the field, the right clause the value.
//! No parentheses are ever introduced, so nesting renders strictly in call
//! order.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use apicalypse_core::{join_values, FieldPath, Numeric, QueryResult, QueryValue, TypedField};

use crate::operators::{Case, Operator};

/// A single filter expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Dotted field name, or the rendered left clause of a compound filter
    field: String,
    /// The operator to apply
    operator: Operator,
    /// Serialized comparand, or the rendered right clause of a compound filter
    value: String,
}

impl Filter {
    /// Create a value filter
    ///
    /// String-match operators get their wildcards here, once.
    pub fn new(field: impl Into<FieldPath>, operator: Operator, value: impl QueryValue) -> Self {
        Self {
            field: field.into().render(),
            operator,
            value: operator.decorate(&value.to_query_value()),
        }
    }

    /// Create a filter whose comparand is a collection, joined with `,`
    pub fn with_values<I>(field: impl Into<FieldPath>, operator: Operator, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Self::new(field, operator, join_values(values))
    }

    /// Create an equals filter
    pub fn equal(field: impl Into<FieldPath>, value: impl QueryValue) -> Self {
        Self::new(field, Operator::Equal, value)
    }

    /// Create a not equals filter
    pub fn not_equal(field: impl Into<FieldPath>, value: impl QueryValue) -> Self {
        Self::new(field, Operator::NotEqual, value)
    }

    pub fn greater_than(field: impl Into<FieldPath>, value: impl Numeric) -> Self {
        Self::new(field, Operator::GreaterThan, value)
    }

    pub fn greater_than_or_equal(field: impl Into<FieldPath>, value: impl Numeric) -> Self {
        Self::new(field, Operator::GreaterThanOrEqual, value)
    }

    pub fn less_than(field: impl Into<FieldPath>, value: impl Numeric) -> Self {
        Self::new(field, Operator::LessThan, value)
    }

    pub fn less_than_or_equal(field: impl Into<FieldPath>, value: impl Numeric) -> Self {
        Self::new(field, Operator::LessThanOrEqual, value)
    }

    /// Create a prefix match filter
    pub fn starts_with(field: impl Into<FieldPath>, text: impl QueryValue, case: Case) -> Self {
        Self::new(field, Operator::StartsWith(case), text)
    }

    /// Create a suffix match filter
    pub fn ends_with(field: impl Into<FieldPath>, text: impl QueryValue, case: Case) -> Self {
        Self::new(field, Operator::EndsWith(case), text)
    }

    /// Create a substring match filter
    pub fn contains(field: impl Into<FieldPath>, text: impl QueryValue, case: Case) -> Self {
        Self::new(field, Operator::Contains(case), text)
    }

    pub fn contains_all<I>(field: impl Into<FieldPath>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Self::with_values(field, Operator::ContainsAll, values)
    }

    pub fn contains_exclusively<I>(field: impl Into<FieldPath>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Self::with_values(field, Operator::ContainsExclusively, values)
    }

    pub fn contains_at_least_one<I>(field: impl Into<FieldPath>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Self::with_values(field, Operator::ContainsAtLeastOne, values)
    }

    pub fn contains_none<I>(field: impl Into<FieldPath>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Self::with_values(field, Operator::ContainsNone, values)
    }

    /// Create an is null filter
    pub fn is_null(field: impl Into<FieldPath>) -> Self {
        Self::new(field, Operator::Equal, None::<&str>)
    }

    /// Create an is not null filter
    pub fn is_not_null(field: impl Into<FieldPath>) -> Self {
        Self::new(field, Operator::NotEqual, None::<&str>)
    }

    /// Join two filters: `<lhs> & <rhs>`
    pub fn and(lhs: Filter, rhs: Filter) -> Self {
        Self::compound(lhs, Operator::And, rhs)
    }

    /// Join two filters: `<lhs> | <rhs>`
    pub fn or(lhs: Filter, rhs: Filter) -> Self {
        Self::compound(lhs, Operator::Or, rhs)
    }

    fn compound(lhs: Filter, operator: Operator, rhs: Filter) -> Self {
        Self {
            field: lhs.render(),
            operator,
            value: rhs.render(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if this filter joins two sub-filters
    pub fn is_compound(&self) -> bool {
        self.operator.is_logical()
    }

    /// Render the clause text used inside `where ...;`
    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.field,
            self.operator.sign(),
            self.operator.wrap(&self.value)
        )
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl BitAnd for Filter {
    type Output = Filter;

    fn bitand(self, rhs: Filter) -> Filter {
        Filter::and(self, rhs)
    }
}

impl BitOr for Filter {
    type Output = Filter;

    fn bitor(self, rhs: Filter) -> Filter {
        Filter::or(self, rhs)
    }
}

/// Filter constructors on typed field references
///
/// Each method resolves the field through its entity's mapping first, so an
/// undeclared reference surfaces as an error instead of a malformed clause.
///
/// ```ignore
/// let filter = GameField::Category.equal(Category::MainGame)?
///     & GameField::Screenshots.contains_at_least_one([9, 6, 12])?;
/// ```
pub trait FieldFilters: TypedField {
    fn equal(self, value: impl QueryValue) -> QueryResult<Filter> {
        Ok(Filter::equal(self.path()?, value))
    }

    fn not_equal(self, value: impl QueryValue) -> QueryResult<Filter> {
        Ok(Filter::not_equal(self.path()?, value))
    }

    fn greater_than(self, value: impl Numeric) -> QueryResult<Filter> {
        Ok(Filter::greater_than(self.path()?, value))
    }

    fn greater_than_or_equal(self, value: impl Numeric) -> QueryResult<Filter> {
        Ok(Filter::greater_than_or_equal(self.path()?, value))
    }

    fn less_than(self, value: impl Numeric) -> QueryResult<Filter> {
        Ok(Filter::less_than(self.path()?, value))
    }

    fn less_than_or_equal(self, value: impl Numeric) -> QueryResult<Filter> {
        Ok(Filter::less_than_or_equal(self.path()?, value))
    }

    fn starts_with(self, text: impl QueryValue, case: Case) -> QueryResult<Filter> {
        Ok(Filter::starts_with(self.path()?, text, case))
    }

    fn ends_with(self, text: impl QueryValue, case: Case) -> QueryResult<Filter> {
        Ok(Filter::ends_with(self.path()?, text, case))
    }

    fn contains(self, text: impl QueryValue, case: Case) -> QueryResult<Filter> {
        Ok(Filter::contains(self.path()?, text, case))
    }

    fn contains_all<I>(self, values: I) -> QueryResult<Filter>
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Ok(Filter::contains_all(self.path()?, values))
    }

    fn contains_exclusively<I>(self, values: I) -> QueryResult<Filter>
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Ok(Filter::contains_exclusively(self.path()?, values))
    }

    fn contains_at_least_one<I>(self, values: I) -> QueryResult<Filter>
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Ok(Filter::contains_at_least_one(self.path()?, values))
    }

    fn contains_none<I>(self, values: I) -> QueryResult<Filter>
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        Ok(Filter::contains_none(self.path()?, values))
    }

    fn is_null(self) -> QueryResult<Filter> {
        Ok(Filter::is_null(self.path()?))
    }

    fn is_not_null(self) -> QueryResult<Filter> {
        Ok(Filter::is_not_null(self.path()?))
    }
}

impl<F: TypedField> FieldFilters for F {}
