use serde::Serialize;
use serde_json::{Map, Value};

/// Bounded, truncated sample of an NVD result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSample {
    pub message: String,
    pub num_samples: usize,
    /// Matches available upstream, not the number sampled
    pub total_results: u64,
    pub version: Value,
    pub timestamp: Value,
    /// Each entry is a record's JSON text cut to the per-item budget
    pub vulnerabilities: Vec<String>,
}

/// Empty result set: the upstream payload with a `message` added
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NoMatches {
    payload: Map<String, Value>,
}

impl NoMatches {
    pub const MESSAGE: &'static str = "There are no vulnerabilities that match that query";

    pub fn new(mut payload: Map<String, Value>) -> Self {
        payload.insert("message".to_string(), Value::String(Self::MESSAGE.to_string()));
        Self { payload }
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

/// The NVD request did not produce usable data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceNotice {
    /// HTTP status when a response was received
    #[serde(skip)]
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceNotice {
    pub fn from_status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!(
                "NVD API responded with code:{}. Either wait a couple seconds or query needs rewording",
                status
            ),
        }
    }

    pub fn unreachable(details: &str) -> Self {
        Self {
            status: None,
            message: format!(
                "NVD API could not be reached ({}). Either wait a couple seconds or query needs rewording",
                details
            ),
        }
    }

    pub fn unreadable(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!(
                "NVD API returned an unreadable response (code:{}). Either wait a couple seconds or query needs rewording",
                status
            ),
        }
    }

    /// Nothing usable was left to search on once the arguments were checked
    pub fn no_filters() -> Self {
        Self {
            status: None,
            message: "No search filters remained for this question, so the NVD was not \
                      queried. The query needs rewording with a CVE id, product name or date range"
                .to_string(),
        }
    }

    /// 404 is how NVD says "nothing here"; it is not worth a diagnostic.
    pub fn should_report(&self) -> bool {
        self.status != Some(404)
    }
}

/// What the search tool hands back to the language model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VulnerabilitySummary {
    Sample(ResultSample),
    NoMatches(NoMatches),
    Unavailable(ServiceNotice),
}

impl VulnerabilitySummary {
    pub fn message(&self) -> &str {
        match self {
            VulnerabilitySummary::Sample(sample) => &sample.message,
            VulnerabilitySummary::NoMatches(_) => NoMatches::MESSAGE,
            VulnerabilitySummary::Unavailable(notice) => &notice.message,
        }
    }

    /// JSON text placed in the tool message of the conversation
    pub fn to_tool_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            serde_json::json!({ "message": self.message() }).to_string()
        })
    }
}
