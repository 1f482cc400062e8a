//! Declarative feature filters: the party selector token becomes a
//! predicate over the winning-party property.

use crate::map::feature::Feature;
use crate::parties::FILTER_ALIASES;

/// Property the party filter predicates over.
pub const FILTER_FIELD: &str = "APartidoMasVotado";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpr {
    /// Set membership over an alias group.
    In {
        field: String,
        values: Vec<String>,
    },
    /// Direct equality on a single code.
    Eq {
        field: String,
        value: String,
    },
}

impl FilterExpr {
    pub fn matches(&self, feature: &Feature) -> bool {
        match self {
            Self::In { field, values } => feature
                .prop(field)
                .is_some_and(|actual| values.iter().any(|v| v == &actual)),
            Self::Eq { field, value } => {
                feature.prop(field).is_some_and(|actual| &actual == value)
            }
        }
    }
}

/// Maps a selector token to a filter expression. `"all"` clears the
/// filter; an aliased token expands to its group; anything else filters
/// on the token itself.
pub fn filter_for_token(token: &str) -> Option<FilterExpr> {
    if token == "all" {
        return None;
    }
    if let Some(group) = FILTER_ALIASES.get(token) {
        return Some(FilterExpr::In {
            field: FILTER_FIELD.to_string(),
            values: group.iter().map(ToString::to_string).collect(),
        });
    }
    Some(FilterExpr::Eq {
        field: FILTER_FIELD.to_string(),
        value: token.to_string(),
    })
}
