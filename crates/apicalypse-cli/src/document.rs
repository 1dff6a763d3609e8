//! JSON filter documents
//!
//! ```json
//! {"and": [
//!     {"field": "category", "op": "equal", "value": 0},
//!     {"field": "screenshots", "op": "contains_at_least_one", "values": [9, 6, 12]}
//! ]}
//! ```
//!
//! Groups fold left to right, so `{"or": [a, b, c]}` is `(a | b) | c`. Field
//! names are taken as raw wire names.

use apicalypse_query::{Case, Filter, Operator};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Empty '{0}' group")]
    EmptyGroup(&'static str),

    #[error("Operator {op} on {field} needs a 'values' list")]
    MissingValues { field: String, op: String },

    #[error("Operator {op} on {field} takes a single 'value'")]
    UnexpectedValues { field: String, op: String },

    #[error("Value for {field} must be a string, number, boolean or null")]
    NotScalar { field: String },
}

/// One node of a filter document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterDocument {
    And { and: Vec<FilterDocument> },
    Or { or: Vec<FilterDocument> },
    Leaf(Leaf),
}

/// A single comparison; an absent `value` compares against null
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Leaf {
    pub field: String,
    pub op: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub values: Option<Vec<Value>>,
    #[serde(default)]
    pub case: Case,
}

impl FilterDocument {
    pub fn into_filter(self) -> Result<Filter, DocumentError> {
        match self {
            Self::And { and } => fold(and, "and", Filter::and),
            Self::Or { or } => fold(or, "or", Filter::or),
            Self::Leaf(leaf) => leaf.into_filter(),
        }
    }
}

fn fold(
    nodes: Vec<FilterDocument>,
    kind: &'static str,
    join: fn(Filter, Filter) -> Filter,
) -> Result<Filter, DocumentError> {
    let mut filters = nodes.into_iter().map(FilterDocument::into_filter);
    let first = filters.next().ok_or(DocumentError::EmptyGroup(kind))??;
    filters.try_fold(first, |acc, next| -> Result<Filter, DocumentError> {
        Ok(join(acc, next?))
    })
}

impl Leaf {
    pub fn into_filter(self) -> Result<Filter, DocumentError> {
        let operator = Operator::from_name(&self.op, self.case)
            .filter(|op| !op.is_logical())
            .ok_or_else(|| DocumentError::UnknownOperator(self.op.clone()))?;

        if operator.is_membership() {
            let values = self.values.ok_or_else(|| DocumentError::MissingValues {
                field: self.field.clone(),
                op: self.op.clone(),
            })?;
            let texts = values
                .iter()
                .map(|value| scalar_text(&self.field, value))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Filter::with_values(self.field, operator, texts));
        }

        if self.values.is_some() {
            return Err(DocumentError::UnexpectedValues {
                field: self.field,
                op: self.op,
            });
        }

        let text = match &self.value {
            Some(value) => scalar_text(&self.field, value)?,
            None => "null".to_string(),
        };
        Ok(Filter::new(self.field, operator, text))
    }
}

fn scalar_text(field: &str, value: &Value) -> Result<String, DocumentError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(DocumentError::NotScalar {
            field: field.to_string(),
        }),
    }
}

/// Parse a document and turn it into a filter
pub fn parse_filter(text: &str) -> Result<Filter, DocumentError> {
    let document: FilterDocument = serde_json::from_str(text)?;
    document.into_filter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_group() {
        let filter = parse_filter(
            r#"{"and": [
                {"field": "category", "op": "equal", "value": 0},
                {"field": "screenshots", "op": "contains_at_least_one", "values": [9, 6, 12]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(filter.render(), "category = 0 & screenshots = (9,6,12)");
    }

    #[test]
    fn test_groups_fold_left() {
        let filter = parse_filter(
            r#"{"or": [
                {"field": "a", "op": "equal", "value": 1},
                {"and": [
                    {"field": "b", "op": "greater_than", "value": 2.5},
                    {"field": "c", "op": "not_equal", "value": true}
                ]},
                {"field": "d", "op": "contains_all", "values": ["x", "y"]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            filter.render(),
            "a = 1 | b > 2.5 & c != true | d = [x,y]"
        );
    }

    #[test]
    fn test_single_leaf() {
        let filter =
            parse_filter(r#"{"field": "name", "op": "starts_with", "value": "zel", "case": "insensitive"}"#)
                .unwrap();
        assert_eq!(filter.render(), "name ~ zel*");
    }

    #[test]
    fn test_null_values() {
        let explicit = parse_filter(r#"{"field": "cover", "op": "not_equal", "value": null}"#).unwrap();
        assert_eq!(explicit.render(), "cover != null");

        let absent = parse_filter(r#"{"field": "cover", "op": "equal"}"#).unwrap();
        assert_eq!(absent.render(), "cover = null");
    }

    #[test]
    fn test_rejected_documents() {
        assert!(matches!(
            parse_filter(r#"{"field": "a", "op": "like", "value": 1}"#),
            Err(DocumentError::UnknownOperator(op)) if op == "like"
        ));
        assert!(matches!(
            parse_filter(r#"{"field": "a", "op": "and", "value": 1}"#),
            Err(DocumentError::UnknownOperator(_))
        ));
        assert!(matches!(
            parse_filter(r#"{"and": []}"#),
            Err(DocumentError::EmptyGroup("and"))
        ));
        assert!(matches!(
            parse_filter(r#"{"field": "a", "op": "contains_none", "value": 1}"#),
            Err(DocumentError::MissingValues { .. })
        ));
        assert!(matches!(
            parse_filter(r#"{"field": "a", "op": "equal", "values": [1]}"#),
            Err(DocumentError::UnexpectedValues { .. })
        ));
        assert!(matches!(
            parse_filter(r#"{"field": "a", "op": "equal", "value": [1]}"#),
            Err(DocumentError::NotScalar { .. })
        ));
        assert!(matches!(parse_filter("not json"), Err(DocumentError::Json(_))));
    }
}
