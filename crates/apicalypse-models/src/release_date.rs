//! Release date model
//!
//! Endpoint: release_dates

use std::sync::LazyLock;

use apicalypse_core::{Composable, FieldPath, FieldTable, QueryResult, TypedField};
use chrono::{DateTime, Utc};

use crate::platform::{Platform, PlatformField};
use crate::region::Region;
use crate::Id;

/// Release of a game on one platform in one region
///
/// Release dates cannot be searched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseDate {
    pub id: Option<Id>,
    pub date: Option<DateTime<Utc>>,
    /// Human readable form, e.g. "2017-Mar-03"
    pub human: Option<String>,
    pub region: Option<Region>,
    pub platform: Option<Id>,
    pub game: Option<Id>,
}

/// Typed reference to a release date property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseDateField {
    Id,
    Date,
    Human,
    Region,
    PlatformId,
    GameId,
    /// Property of the platform this release is on
    Platform(PlatformField),
}

static FIELDS: LazyLock<FieldTable<ReleaseDateField>> = LazyLock::new(|| {
    FieldTable::new(
        ReleaseDate::NAME,
        &[
            (ReleaseDateField::Id, "id"),
            (ReleaseDateField::Date, "date"),
            (ReleaseDateField::Human, "human"),
            (ReleaseDateField::Region, "region"),
            (ReleaseDateField::PlatformId, "platform"),
            (ReleaseDateField::GameId, "game"),
        ],
    )
});

impl Composable for ReleaseDate {
    const NAME: &'static str = "release_dates";
    type Field = ReleaseDateField;

    fn resolve(field: ReleaseDateField) -> QueryResult<FieldPath> {
        match field {
            ReleaseDateField::Platform(inner) => {
                Ok(FIELDS.resolve(ReleaseDateField::PlatformId)?.join(Platform::resolve(inner)?))
            }
            flat => FIELDS.resolve(flat),
        }
    }
}

impl TypedField for ReleaseDateField {
    type Entity = ReleaseDate;
}
