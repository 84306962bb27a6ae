//! Search clauses built from element values

use crate::elements::FieldValue;
use serde::{Deserialize, Serialize};

/// Comparison kind of a search clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseKind {
    Like,
    Equals,
}

/// One search criterion derived from a form element.
///
/// Serialized as-is into the session store so a later request can both
/// re-run the query and re-fill the form (`element_name`/`element_value`
/// carry the form side, `field`/`kind`/`value` the query side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub element_name: String,
    pub element_value: FieldValue,
    pub field: String,
    pub kind: ClauseKind,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialization_round_trip() {
        let clause = Clause {
            element_name: "keyword".to_string(),
            element_value: FieldValue::Text("rust".to_string()),
            field: "title".to_string(),
            kind: ClauseKind::Like,
            value: "%rust%".to_string(),
        };
        let json = serde_json::to_string(&clause).unwrap();
        assert!(json.contains("\"kind\":\"like\""));
        let parsed: Clause = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, clause);
    }
}
