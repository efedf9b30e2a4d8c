use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Account;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub all: Vec<ApprovalInfo>,
    #[serde(default)]
    pub default_value: i32,
    #[serde(default, deserialize_with = "permitted_values")]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalInfo {
    #[serde(flatten)]
    pub account: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

/// Servers send permitted values either as a list or as a
/// `{value: description}` map; both become an ordered list of values.
/// Map keys are ordered by score, lowest first.
fn permitted_values<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        List(Vec<String>),
        Map(BTreeMap<String, String>),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::List(values) => values,
        Repr::Map(map) => {
            let mut values: Vec<String> = map.into_keys().map(|k| k.trim().to_string()).collect();
            // Stable sort, so unparsable keys stay last in key order.
            values.sort_by_key(|v| v.parse::<i32>().map_or((1, 0), |n| (0, n)));
            values
        }
    })
}
