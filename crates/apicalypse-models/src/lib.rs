//! # apicalypse-models
//!
//! Entity models for Apicalypse RS.
//!
//! Each entity implements `Composable` from `apicalypse-core`, mapping its
//! typed field references to wire names through a static `FieldTable`.
//! Related entities resolve through their own tables, which yields dotted
//! paths such as `release_dates.platform.name`.

pub use apicalypse_core::traits::{Composable, Searchable, TypedField};

/// Entity identifier as sent over the wire
pub type Id = u64;

// Entity modules
pub mod game;
pub mod platform;
pub mod release_date;

// Comparand enums
pub mod category;
pub mod region;

// Re-exports for convenience
pub use game::{Game, GameField};
pub use platform::{Platform, PlatformField};
pub use release_date::{ReleaseDate, ReleaseDateField};
pub use category::Category;
pub use region::Region;
