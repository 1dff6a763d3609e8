//! Turn parsed arguments into query text for the chosen endpoint

use anyhow::bail;
use apicalypse_core::config::ClientConfig;
use apicalypse_core::{Composable, Searchable};
use apicalypse_models::{Game, Platform, ReleaseDate};
use apicalypse_query::{Filter, Query};

use crate::args::{Cli, Endpoint};

/// Render the query described by `cli`
pub fn render(cli: &Cli, filter: Option<Filter>, config: &ClientConfig) -> anyhow::Result<String> {
    let rendered = match cli.endpoint {
        Endpoint::Games => with_search(apply::<Game>(cli, filter, config)?, cli).build(),
        Endpoint::Platforms => with_search(apply::<Platform>(cli, filter, config)?, cli).build(),
        Endpoint::ReleaseDates => {
            if cli.search.is_some() {
                bail!("The release-dates endpoint does not support search");
            }
            apply::<ReleaseDate>(cli, filter, config)?.build()
        }
    };
    Ok(rendered)
}

fn apply<E: Composable>(
    cli: &Cli,
    filter: Option<Filter>,
    config: &ClientConfig,
) -> anyhow::Result<Query<E>> {
    let mut query = Query::<E>::new()
        .include_all(cli.fields.iter().map(String::as_str))?
        .exclude_all(cli.exclude.iter().map(String::as_str))?;

    if let Some(sort) = &cli.sort {
        query = query.sort_by(sort.field.as_str(), sort.order)?;
    }
    if let Some(filter) = filter {
        query = query.filter(filter);
    }
    if let Some(limit) = cli.limit.or(config.default_limit) {
        if config.exceeds_tier(limit) {
            tracing::warn!(
                limit,
                tier = config.tier.as_str(),
                max = config.tier.max_limit(),
                "Limit exceeds what the configured tier allows"
            );
        }
        query = query.limit(limit);
    }
    if let Some(offset) = cli.offset {
        query = query.offset(offset);
    }

    Ok(query)
}

fn with_search<E: Searchable>(query: Query<E>, cli: &Cli) -> Query<E> {
    match &cli.search {
        Some(term) => query.search(term.as_str()),
        None => query,
    }
}
