//! Game model
//!
//! Endpoint: games

use std::sync::LazyLock;

use apicalypse_core::{Composable, FieldPath, FieldTable, QueryResult, Searchable, TypedField};
use chrono::{DateTime, Utc};

use crate::category::Category;
use crate::platform::{Platform, PlatformField};
use crate::release_date::{ReleaseDate, ReleaseDateField};
use crate::Id;

/// Game entity
///
/// Relations (platforms, release dates, ...) are held as id lists; queries
/// can still reach into them through the nested field references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub id: Option<Id>,
    pub name: String,
    pub slug: String,
    pub summary: Option<String>,
    pub category: Category,
    pub first_release_date: Option<DateTime<Utc>>,
    /// Average of critic and user rating, 0-100
    pub total_rating: Option<f64>,
    pub platforms: Vec<Id>,
    pub release_dates: Vec<Id>,
    pub screenshots: Vec<Id>,
    pub genres: Vec<Id>,
}

/// Typed reference to a game property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameField {
    Id,
    Name,
    Slug,
    Summary,
    Category,
    FirstReleaseDate,
    TotalRating,
    Platforms,
    ReleaseDates,
    Screenshots,
    Genres,
    /// Property of the game's platforms
    Platform(PlatformField),
    /// Property of the game's release dates
    ReleaseDate(ReleaseDateField),
}

static FIELDS: LazyLock<FieldTable<GameField>> = LazyLock::new(|| {
    FieldTable::new(
        Game::NAME,
        &[
            (GameField::Id, "id"),
            (GameField::Name, "name"),
            (GameField::Slug, "slug"),
            (GameField::Summary, "summary"),
            (GameField::Category, "category"),
            (GameField::FirstReleaseDate, "first_release_date"),
            (GameField::TotalRating, "total_rating"),
            (GameField::Platforms, "platforms"),
            (GameField::ReleaseDates, "release_dates"),
            (GameField::Screenshots, "screenshots"),
            (GameField::Genres, "genres"),
        ],
    )
});

impl Composable for Game {
    const NAME: &'static str = "games";
    type Field = GameField;

    fn resolve(field: GameField) -> QueryResult<FieldPath> {
        match field {
            GameField::Platform(inner) => {
                Ok(FIELDS.resolve(GameField::Platforms)?.join(Platform::resolve(inner)?))
            }
            GameField::ReleaseDate(inner) => {
                Ok(FIELDS.resolve(GameField::ReleaseDates)?.join(ReleaseDate::resolve(inner)?))
            }
            flat => FIELDS.resolve(flat),
        }
    }
}

impl Searchable for Game {}

impl TypedField for GameField {
    type Entity = Game;
}
