//! End-to-end query rendering against the entity catalogue

use std::sync::LazyLock;

use apicalypse_core::{
    Composable, FieldPath, FieldResolutionError, FieldTable, QueryResult, TypedField,
};
use apicalypse_models::{
    Category, Game, GameField, Platform, PlatformField, ReleaseDate, ReleaseDateField, Region,
};
use apicalypse_query::{Case, FieldFilters, Filter, Query, SortOrder};
use chrono::{TimeZone, Utc};

#[test]
fn test_category_and_screenshots_filter() -> QueryResult<()> {
    let filter = GameField::Category.equal(Category::MainGame)?
        & GameField::Screenshots.contains_at_least_one([9, 6, 12])?;

    let query = Query::<Game>::new().filter(filter);

    assert_eq!(query.build(), "where category = 0 & screenshots = (9,6,12);");
    Ok(())
}

#[test]
fn test_fields_exclude_and_pagination() -> QueryResult<()> {
    let query = Query::<Game>::new()
        .include_all(["name", "platform"])?
        .exclude_all(["age"])?
        .limit(10)
        .offset(0);

    assert_eq!(query.build(), "fields name,platform;exclude age;limit 10;offset 0;");
    Ok(())
}

#[test]
fn test_typed_and_raw_fields_mix() -> QueryResult<()> {
    let query = Query::<Game>::new()
        .include(GameField::Name)?
        .include(GameField::ReleaseDate(ReleaseDateField::Date))?
        .include("cover.url")?
        .sort_by(GameField::FirstReleaseDate, SortOrder::Ascending)?;

    assert_eq!(
        query.build(),
        "fields name,release_dates.date,cover.url;sort first_release_date asc;"
    );
    Ok(())
}

#[test]
fn test_searchable_game_query() -> QueryResult<()> {
    let query = Query::<Game>::new()
        .include_all([GameField::Name, GameField::TotalRating])?
        .filter(GameField::TotalRating.greater_than_or_equal(80)?)
        .search("zelda")
        .limit(5);

    assert_eq!(
        query.build(),
        "fields name,total_rating;where total_rating >= 80;limit 5;search \"zelda\";"
    );
    Ok(())
}

#[test]
fn test_platform_name_match() -> QueryResult<()> {
    let query = Query::<Platform>::new()
        .include(PlatformField::Abbreviation)?
        .filter(PlatformField::Name.starts_with("play", Case::Insensitive)?)
        .sort(PlatformField::Generation)?;

    assert_eq!(
        query.build(),
        "fields abbreviation;sort generation desc;where name ~ play*;"
    );
    Ok(())
}

#[test]
fn test_release_dates_by_region_and_date() -> QueryResult<()> {
    let launch = Utc.with_ymd_and_hms(2017, 3, 3, 0, 0, 0).unwrap();

    let filter = ReleaseDateField::Region.equal(Region::Europe)?
        & ReleaseDateField::Date.greater_than(launch)?
        | ReleaseDateField::Platform(PlatformField::Slug).equal("switch")?;

    let query = Query::<ReleaseDate>::new()
        .include(ReleaseDateField::Human)?
        .filter(filter);

    assert_eq!(
        query.build(),
        "fields human;where region = 1 & date > 1488499200 | platform.slug = switch;"
    );
    Ok(())
}

#[test]
fn test_nested_membership_filter() -> QueryResult<()> {
    let filter = GameField::Platform(PlatformField::Id).contains_all([48, 49])?
        & GameField::Genres.contains_none([14])?
        & GameField::Summary.is_not_null()?;

    let query = Query::<Game>::new().filter(filter);

    assert_eq!(
        query.build(),
        "where platforms.id = [48,49] & genres != (14) & summary != null;"
    );
    Ok(())
}

#[test]
fn test_second_filter_replaces_first() -> QueryResult<()> {
    let query = Query::<Game>::new()
        .filter(GameField::Category.equal(Category::Bundle)?)
        .filter(GameField::Category.equal(Category::Remake)?);

    let rendered = query.build();
    assert_eq!(rendered, "where category = 8;");
    assert!(!rendered.contains("category = 3"));
    Ok(())
}

#[test]
fn test_explicit_filter_constructors_match_dsl() -> QueryResult<()> {
    let dsl = GameField::Name.contains("Mario", Case::Sensitive)?;
    let explicit = Filter::contains(GameField::Name.path()?, "Mario", Case::Sensitive);

    assert_eq!(dsl, explicit);
    assert_eq!(dsl.render(), "name = *Mario*");
    Ok(())
}

/// Entity whose mapping deliberately leaves one reference out
struct Company;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CompanyField {
    Name,
    Country,
    Logo,
}

static COMPANY_FIELDS: LazyLock<FieldTable<CompanyField>> = LazyLock::new(|| {
    FieldTable::new(
        "companies",
        &[(CompanyField::Name, "name"), (CompanyField::Country, "country")],
    )
});

impl Composable for Company {
    const NAME: &'static str = "companies";
    type Field = CompanyField;

    fn resolve(field: CompanyField) -> QueryResult<FieldPath> {
        COMPANY_FIELDS.resolve(field)
    }
}

impl TypedField for CompanyField {
    type Entity = Company;
}

#[test]
fn test_undeclared_reference_fails_resolution() {
    let err = Query::<Company>::new()
        .include(CompanyField::Name)
        .and_then(|query| query.include(CompanyField::Logo))
        .unwrap_err();

    assert_eq!(err, FieldResolutionError::not_recognized("companies", "Logo"));
}

#[test]
fn test_undeclared_reference_fails_in_filters() {
    let err = CompanyField::Logo.is_null().unwrap_err();
    assert_eq!(err.entity(), "companies");

    assert!(CompanyField::Country.equal("se").is_ok());
}
