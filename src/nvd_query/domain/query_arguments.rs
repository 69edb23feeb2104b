use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Loosely typed tool-call arguments, keyed by their wire name
pub type ArgumentMap = BTreeMap<String, String>;

pub const CVE_ID: &str = "cveId";
pub const DATE_RANGE_START: &str = "dateRangeStart";
pub const DATE_RANGE_END: &str = "dateRangeEnd";
pub const KEYWORDS: &str = "keywords";

/// QueryArguments for one NVD search
///
/// Every field may be empty, meaning "omit this filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryArguments {
    /// CVE identifier, e.g. `CVE-2014-0160`
    pub cve_id: String,
    /// `YYYY-MM-DD`
    pub date_range_start: String,
    /// `YYYY-MM-DD`
    pub date_range_end: String,
    /// One to three space-separated keywords
    pub keywords: String,
}

impl QueryArguments {
    pub fn new(cve_id: &str, date_range_start: &str, date_range_end: &str, keywords: &str) -> Self {
        Self {
            cve_id: cve_id.to_string(),
            date_range_start: date_range_start.to_string(),
            date_range_end: date_range_end.to_string(),
            keywords: keywords.to_string(),
        }
    }

    /// Picks the known keys out of an argument map; unknown keys are dropped.
    pub fn from_map(args: &ArgumentMap) -> Self {
        let get = |key: &str| args.get(key).cloned().unwrap_or_default();
        Self {
            cve_id: get(CVE_ID),
            date_range_start: get(DATE_RANGE_START),
            date_range_end: get(DATE_RANGE_END),
            keywords: get(KEYWORDS),
        }
    }

    pub fn has_date_range(&self) -> bool {
        !self.date_range_start.is_empty() && !self.date_range_end.is_empty()
    }
}

impl fmt::Display for QueryArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}: {:?}, {}: {:?}, {}: {:?}, {}: {:?}}}",
            CVE_ID,
            self.cve_id,
            DATE_RANGE_START,
            self.date_range_start,
            DATE_RANGE_END,
            self.date_range_end,
            KEYWORDS,
            self.keywords
        )
    }
}

/// Flattens a JSON object of tool-call arguments into strings.
///
/// Strings are taken as-is, other scalars and nested values are rendered
/// as JSON text, and `null` becomes empty. A non-object yields an empty map.
pub fn argument_map_from_json(value: &Value) -> ArgumentMap {
    let Some(object) = value.as_object() else {
        return ArgumentMap::new();
    };

    object
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}
