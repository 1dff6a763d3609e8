//! # apicalypse-query
//!
//! Query system for Apicalypse RS.
//!
//! This crate composes field selection, filtering, sorting, search and
//! pagination clauses against a typed entity and renders them into one
//! Apicalypse query string.
//!
//! ## Structure
//!
//! - `operators` - The operator grammar: sign tokens and value wrapping
//! - `filters` - Filter expressions and their typed-field constructors
//! - `sorts` - Sort directions
//! - `query` - The Query builder and its renderer
//!
//! ## Example
//!
//! ```
//! use apicalypse_core::{Composable, FieldPath, QueryResult};
//! use apicalypse_query::{Filter, Query};
//!
//! struct Game;
//!
//! impl Composable for Game {
//!     const NAME: &'static str = "games";
//!     type Field = &'static str;
//!
//!     fn resolve(field: &'static str) -> QueryResult<FieldPath> {
//!         Ok(FieldPath::name(field))
//!     }
//! }
//!
//! let query = Query::<Game>::new()
//!     .include_all(["name", "platform"])?
//!     .exclude("age")?
//!     .filter(Filter::equal("category", 0) & Filter::contains_at_least_one("screenshots", [9, 6, 12]))
//!     .limit(10)
//!     .offset(0);
//!
//! assert_eq!(
//!     query.build(),
//!     "fields name,platform;exclude age;where category = 0 & screenshots = (9,6,12);limit 10;offset 0;"
//! );
//! # Ok::<(), apicalypse_core::FieldResolutionError>(())
//! ```

pub mod operators;
pub mod filters;
pub mod sorts;
pub mod query;

// Re-exports for convenience
pub use operators::{Case, Operator};
pub use filters::{FieldFilters, Filter};
pub use sorts::{Sort, SortOrder};
pub use query::Query;
