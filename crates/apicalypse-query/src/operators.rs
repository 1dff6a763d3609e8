//! Filter Operators
//!
//! The closed operator grammar. Each operator owns two fixed behaviours:
//! the sign token it emits and the way it brackets the comparand text.

use serde::{Deserialize, Serialize};

/// Case sensitivity of a string match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

impl Case {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sensitive" => Some(Self::Sensitive),
            "insensitive" => Some(Self::Insensitive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sensitive => "sensitive",
            Self::Insensitive => "insensitive",
        }
    }
}

/// Operators that can appear in a `where` clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equals (=)
    Equal,
    /// Not equals (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Prefix match (value*)
    StartsWith(Case),
    /// Suffix match (*value)
    EndsWith(Case),
    /// Substring match (*value*)
    Contains(Case),
    /// Contains every listed value ([...])
    ContainsAll,
    /// Contains exactly the listed values ({...})
    ContainsExclusively,
    /// Contains at least one listed value ((...))
    ContainsAtLeastOne,
    /// Contains none of the listed values (!= (...))
    ContainsNone,
    /// Logical and (&)
    And,
    /// Logical or (|)
    Or,
}

impl Operator {
    /// Parse from the snake_case operator name
    ///
    /// String matches take the case separately since the name alone does not
    /// carry it.
    pub fn from_name(name: &str, case: Case) -> Option<Self> {
        match name {
            "equal" => Some(Self::Equal),
            "not_equal" => Some(Self::NotEqual),
            "greater_than" => Some(Self::GreaterThan),
            "greater_than_or_equal" => Some(Self::GreaterThanOrEqual),
            "less_than" => Some(Self::LessThan),
            "less_than_or_equal" => Some(Self::LessThanOrEqual),
            "starts_with" => Some(Self::StartsWith(case)),
            "ends_with" => Some(Self::EndsWith(case)),
            "contains" => Some(Self::Contains(case)),
            "contains_all" => Some(Self::ContainsAll),
            "contains_exclusively" => Some(Self::ContainsExclusively),
            "contains_at_least_one" => Some(Self::ContainsAtLeastOne),
            "contains_none" => Some(Self::ContainsNone),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    /// snake_case operator name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqual => "greater_than_or_equal",
            Self::LessThan => "less_than",
            Self::LessThanOrEqual => "less_than_or_equal",
            Self::StartsWith(_) => "starts_with",
            Self::EndsWith(_) => "ends_with",
            Self::Contains(_) => "contains",
            Self::ContainsAll => "contains_all",
            Self::ContainsExclusively => "contains_exclusively",
            Self::ContainsAtLeastOne => "contains_at_least_one",
            Self::ContainsNone => "contains_none",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// The literal token emitted between field and value
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::StartsWith(case) | Self::EndsWith(case) | Self::Contains(case) => match case {
                Case::Sensitive => "=",
                Case::Insensitive => "~",
            },
            Self::ContainsAll | Self::ContainsExclusively | Self::ContainsAtLeastOne => "=",
            Self::ContainsNone => "!=",
            Self::And => "&",
            Self::Or => "|",
        }
    }

    /// Bracket the comparand text
    ///
    /// Only membership operators add brackets. Wildcards for string matches
    /// come from [`Operator::decorate`], applied once at construction.
    pub fn wrap(&self, value: &str) -> String {
        match self {
            Self::ContainsAll => format!("[{}]", value),
            Self::ContainsExclusively => format!("{{{}}}", value),
            Self::ContainsAtLeastOne | Self::ContainsNone => format!("({})", value),
            _ => value.to_string(),
        }
    }

    /// Add the `*` wildcards of a string match to a raw comparand
    pub fn decorate(&self, value: &str) -> String {
        match self {
            Self::StartsWith(_) => format!("{}*", value),
            Self::EndsWith(_) => format!("*{}", value),
            Self::Contains(_) => format!("*{}*", value),
            _ => value.to_string(),
        }
    }

    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanOrEqual | Self::LessThan | Self::LessThanOrEqual
        )
    }

    pub fn is_string_match(&self) -> bool {
        matches!(self, Self::StartsWith(_) | Self::EndsWith(_) | Self::Contains(_))
    }

    pub fn is_membership(&self) -> bool {
        matches!(
            self,
            Self::ContainsAll | Self::ContainsExclusively | Self::ContainsAtLeastOne | Self::ContainsNone
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_signs() {
        assert_eq!(Operator::Equal.sign(), "=");
        assert_eq!(Operator::NotEqual.sign(), "!=");
        assert_eq!(Operator::GreaterThanOrEqual.sign(), ">=");
        assert_eq!(Operator::LessThan.sign(), "<");
        assert_eq!(Operator::ContainsAll.sign(), "=");
        assert_eq!(Operator::ContainsNone.sign(), "!=");
        assert_eq!(Operator::StartsWith(Case::Sensitive).sign(), "=");
        assert_eq!(Operator::StartsWith(Case::Insensitive).sign(), "~");
        assert_eq!(Operator::And.sign(), "&");
        assert_eq!(Operator::Or.sign(), "|");
    }

    #[test]
    fn test_membership_wrapping() {
        assert_eq!(Operator::ContainsAll.wrap("9,6,12"), "[9,6,12]");
        assert_eq!(Operator::ContainsExclusively.wrap("9,6,12"), "{9,6,12}");
        assert_eq!(Operator::ContainsAtLeastOne.wrap("9,6,12"), "(9,6,12)");
        assert_eq!(Operator::ContainsNone.wrap("9,6,12"), "(9,6,12)");
    }

    #[test]
    fn test_other_kinds_do_not_wrap() {
        assert_eq!(Operator::Equal.wrap("3"), "3");
        assert_eq!(Operator::Contains(Case::Insensitive).wrap("*zelda*"), "*zelda*");
        assert_eq!(Operator::And.wrap("a = 1"), "a = 1");
    }

    #[test]
    fn test_string_match_decoration() {
        assert_eq!(Operator::StartsWith(Case::Insensitive).decorate("zelda"), "zelda*");
        assert_eq!(Operator::EndsWith(Case::Sensitive).decorate("Kart"), "*Kart");
        assert_eq!(Operator::Contains(Case::Sensitive).decorate("Mario"), "*Mario*");
        assert_eq!(Operator::Equal.decorate("Mario"), "Mario");
    }

    #[test]
    fn test_operator_names() {
        assert_eq!(
            Operator::from_name("contains_at_least_one", Case::Sensitive),
            Some(Operator::ContainsAtLeastOne)
        );
        assert_eq!(
            Operator::from_name("starts_with", Case::Insensitive),
            Some(Operator::StartsWith(Case::Insensitive))
        );
        assert_eq!(Operator::from_name("like", Case::Sensitive), None);
        assert_eq!(Operator::GreaterThanOrEqual.name(), "greater_than_or_equal");
        assert_eq!(Case::from_str("Insensitive"), Some(Case::Insensitive));
    }

    #[test]
    fn test_operator_kinds() {
        assert!(Operator::LessThanOrEqual.is_ordering());
        assert!(Operator::EndsWith(Case::Sensitive).is_string_match());
        assert!(Operator::ContainsExclusively.is_membership());
        assert!(Operator::Or.is_logical());
        assert!(!Operator::Equal.is_membership());
    }
}
