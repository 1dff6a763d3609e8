use std::path::PathBuf;

use apicalypse_query::SortOrder;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "apicalypse",
    about = "Render an Apicalypse query for an endpoint",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Endpoint the query is meant for
    #[arg(value_enum)]
    pub endpoint: Endpoint,

    /// Fields to return, comma separated
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Fields to leave out, comma separated
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Sort as field[:asc|desc], descending by default
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortArg>,

    /// JSON filter document
    #[arg(long)]
    pub where_file: Option<PathBuf>,

    /// Search term (games and platforms only)
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of results; falls back to APICALYPSE_DEFAULT_LIMIT
    #[arg(long)]
    pub limit: Option<u64>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    Games,
    Platforms,
    ReleaseDates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArg {
    pub field: String,
    pub order: SortOrder,
}

fn parse_sort(s: &str) -> Result<SortArg, String> {
    let (field, order) = match s.split_once(':') {
        Some((field, order)) => {
            let order = SortOrder::from_str(order)
                .ok_or_else(|| format!("unknown sort direction '{}'", order))?;
            (field, order)
        }
        None => (s, SortOrder::default()),
    };

    if field.is_empty() {
        return Err("sort field must not be empty".to_string());
    }

    Ok(SortArg {
        field: field.to_string(),
        order,
    })
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
