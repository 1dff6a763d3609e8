//! Query Sort Orders
//!
//! A query carries at most one sort; setting another replaces it.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (A-Z, 1-9, oldest first)
    #[serde(alias = "asc")]
    Ascending,
    /// Descending order (Z-A, 9-1, newest first)
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Get the opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Field plus direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Dotted field name
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Create ascending sort
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    /// Create descending sort
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Descending)
    }

    /// Reverse the sort direction
    pub fn reversed(mut self) -> Self {
        self.order = self.order.reverse();
        self
    }

    /// Clause content: `<field> <asc|desc>`
    pub fn render(&self) -> String {
        format!("{} {}", self.field, self.order.as_str())
    }
}
