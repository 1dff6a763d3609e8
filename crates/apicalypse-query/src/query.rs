//! Query Model
//!
//! A `Query<E>` is an immutable description of one request against entity
//! `E`. Every mutator consumes the query and returns a new one; clone a
//! query to branch from it. [`Query::build`] renders the final text with a
//! fixed clause order:
//!
//! ```text
//! fields a,b;exclude c;sort d desc;where e = 1;limit 10;offset 0;search "x";
//! ```

use std::fmt;
use std::marker::PhantomData;

use apicalypse_core::{Composable, IntoFieldPath, QueryResult, Searchable};

use crate::filters::Filter;
use crate::sorts::{Sort, SortOrder};

/// A query against entity `E`
pub struct Query<E> {
    includes: Vec<String>,
    excludes: Vec<String>,
    filter: Option<Filter>,
    sort: Option<Sort>,
    search: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    entity: PhantomData<fn() -> E>,
}

impl<E: Composable> Query<E> {
    /// Create an empty query
    pub fn new() -> Self {
        Self {
            includes: Vec::new(),
            excludes: Vec::new(),
            filter: None,
            sort: None,
            search: None,
            limit: None,
            offset: None,
            entity: PhantomData,
        }
    }

    /// Append a field to the `fields` list
    pub fn include<F: IntoFieldPath<E>>(mut self, field: F) -> QueryResult<Self> {
        self.includes.push(resolve::<E, F>(field)?);
        Ok(self)
    }

    /// Append several fields to the `fields` list, in order
    pub fn include_all<I>(mut self, fields: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoFieldPath<E>,
    {
        for field in fields {
            self.includes.push(resolve::<E, _>(field)?);
        }
        Ok(self)
    }

    /// Append a field to the `exclude` list
    pub fn exclude<F: IntoFieldPath<E>>(mut self, field: F) -> QueryResult<Self> {
        self.excludes.push(resolve::<E, F>(field)?);
        Ok(self)
    }

    /// Append several fields to the `exclude` list, in order
    pub fn exclude_all<I>(mut self, fields: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoFieldPath<E>,
    {
        for field in fields {
            self.excludes.push(resolve::<E, _>(field)?);
        }
        Ok(self)
    }

    /// Sort by a field, descending
    pub fn sort<F: IntoFieldPath<E>>(self, by: F) -> QueryResult<Self> {
        self.sort_by(by, SortOrder::default())
    }

    /// Sort by a field in the given direction, replacing any existing sort
    pub fn sort_by<F: IntoFieldPath<E>>(mut self, by: F, order: SortOrder) -> QueryResult<Self> {
        self.sort = Some(Sort::new(resolve::<E, F>(by)?, order));
        Ok(self)
    }

    /// Set the filter, replacing any existing one
    ///
    /// Filters do not accumulate across calls. Combine them with
    /// [`Filter::and`] / [`Filter::or`] before passing them in.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the limit; tier ceilings are enforced by the server, not here
    pub fn limit(mut self, by: u64) -> Self {
        self.limit = Some(by);
        self
    }

    pub fn offset(mut self, by: u64) -> Self {
        self.offset = Some(by);
        self
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn where_clause(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn sort_spec(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    /// Check if a filter is set
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Check if no clause is set at all
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
            && self.excludes.is_empty()
            && self.filter.is_none()
            && self.sort.is_none()
            && self.search.is_none()
            && self.limit.is_none()
            && self.offset.is_none()
    }

    /// Render the query text
    pub fn build(&self) -> String {
        let mut out = String::new();

        if !self.includes.is_empty() {
            out.push_str(&format!("fields {};", self.includes.join(",")));
        }
        if !self.excludes.is_empty() {
            out.push_str(&format!("exclude {};", self.excludes.join(",")));
        }
        if let Some(sort) = &self.sort {
            out.push_str(&format!("sort {};", sort.render()));
        }
        if let Some(filter) = &self.filter {
            out.push_str(&format!("where {};", filter.render()));
        }
        if let Some(limit) = self.limit {
            out.push_str(&format!("limit {};", limit));
        }
        if let Some(offset) = self.offset {
            out.push_str(&format!("offset {};", offset));
        }
        if let Some(search) = &self.search {
            out.push_str(&format!("search \"{}\";", search));
        }

        tracing::trace!(
            entity = E::NAME,
            length = out.len(),
            has_filter = self.filter.is_some(),
            "rendered query"
        );
        out
    }
}

impl<E: Searchable> Query<E> {
    /// Set the search term, replacing any existing one
    ///
    /// The term is wrapped in double quotes verbatim; embedded quotes are
    /// not escaped.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

fn resolve<E, F>(field: F) -> QueryResult<String>
where
    E: Composable,
    F: IntoFieldPath<E>,
{
    field
        .into_field_path()
        .map(|path| path.render())
        .inspect_err(|err| {
            tracing::debug!(entity = E::NAME, error = %err, "query field rejected");
        })
}

impl<E: Composable> Default for Query<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Query<E> {
    fn clone(&self) -> Self {
        Self {
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            search: self.search.clone(),
            limit: self.limit,
            offset: self.offset,
            entity: PhantomData,
        }
    }
}

impl<E> PartialEq for Query<E> {
    fn eq(&self, other: &Self) -> bool {
        self.includes == other.includes
            && self.excludes == other.excludes
            && self.filter == other.filter
            && self.sort == other.sort
            && self.search == other.search
            && self.limit == other.limit
            && self.offset == other.offset
    }
}

impl<E: Composable> fmt::Debug for Query<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("entity", &E::NAME)
            .field("includes", &self.includes)
            .field("excludes", &self.excludes)
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("search", &self.search)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<E: Composable> fmt::Display for Query<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
