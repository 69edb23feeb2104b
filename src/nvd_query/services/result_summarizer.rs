use crate::nvd_query::domain::{NoMatches, ResultSample, ServiceNotice, VulnerabilitySummary};
use rand::Rng;
use serde_json::Value;

/// Raw reply from the NVD CVE endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NvdResponse {
    pub status: u16,
    pub body: String,
}

impl NvdResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// SampleBudget - Size limits for what is handed back to the language model
///
/// The defaults keep a sample under the hosted model's request size limit:
/// 18,000 characters in total, 1,000 of them reserved for the envelope,
/// and at most 10 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleBudget {
    pub total_chars: usize,
    pub reserved_chars: usize,
    pub max_samples: usize,
}

impl SampleBudget {
    pub const DEFAULT_TOTAL_CHARS: usize = 18_000;
    pub const DEFAULT_RESERVED_CHARS: usize = 1_000;
    pub const DEFAULT_MAX_SAMPLES: usize = 10;

    /// Characters each sampled record may use. Fewer samples get more room.
    pub fn per_item_chars(&self, sample_size: usize) -> usize {
        if sample_size == 0 {
            return 0;
        }
        self.total_chars.saturating_sub(self.reserved_chars) / sample_size
    }
}

impl Default for SampleBudget {
    fn default() -> Self {
        Self {
            total_chars: Self::DEFAULT_TOTAL_CHARS,
            reserved_chars: Self::DEFAULT_RESERVED_CHARS,
            max_samples: Self::DEFAULT_MAX_SAMPLES,
        }
    }
}

/// Shapes an NVD response into something the language model can read.
///
/// Never fails: non-2xx statuses and unreadable bodies become a
/// [`ServiceNotice`], an empty result set becomes [`NoMatches`]. When the
/// result set has at least `max_samples` entries a uniform random sample of
/// distinct records is drawn from `rng`, so repeated calls may differ.
pub fn summarize<R: Rng + ?Sized>(
    response: &NvdResponse,
    budget: &SampleBudget,
    rng: &mut R,
) -> VulnerabilitySummary {
    if !response.is_success() {
        return VulnerabilitySummary::Unavailable(ServiceNotice::from_status(response.status));
    }

    let payload = match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(payload)) => payload,
        Ok(_) | Err(_) => {
            tracing::warn!(status = response.status, "NVD response body is not a JSON object");
            return VulnerabilitySummary::Unavailable(ServiceNotice::unreadable(response.status));
        }
    };

    let entries: &[Value] = payload
        .get("vulnerabilities")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    if entries.is_empty() {
        return VulnerabilitySummary::NoMatches(NoMatches::new(payload));
    }

    let max_samples = budget.max_samples.max(1);
    let sampled: Vec<&Value> = if entries.len() >= max_samples {
        rand::seq::index::sample(rng, entries.len(), max_samples)
            .into_iter()
            .map(|i| &entries[i])
            .collect()
    } else {
        entries.iter().collect()
    };

    let per_item = budget.per_item_chars(sampled.len());
    let vulnerabilities: Vec<String> = sampled
        .iter()
        .map(|record| truncate_chars(&record.to_string(), per_item))
        .collect();

    let total_results = payload
        .get("totalResults")
        .and_then(Value::as_u64)
        .unwrap_or(entries.len() as u64);

    tracing::debug!(
        sampled = vulnerabilities.len(),
        total_results,
        per_item,
        "sampled NVD results"
    );

    VulnerabilitySummary::Sample(ResultSample {
        message: format!("There are {} CVEs in this sample", vulnerabilities.len()),
        num_samples: vulnerabilities.len(),
        total_results,
        version: payload.get("version").cloned().unwrap_or(Value::Null),
        timestamp: payload.get("timestamp").cloned().unwrap_or(Value::Null),
        vulnerabilities,
    })
}

/// First `max_chars` characters of `text`, never splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use std::collections::HashSet;

    fn nvd_body(count: usize, description_len: usize) -> String {
        let vulnerabilities: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "cve": {
                        "id": format!("CVE-2024-{:05}", i),
                        "descriptions": [{ "lang": "en", "value": "x".repeat(description_len) }]
                    }
                })
            })
            .collect();

        json!({
            "resultsPerPage": count,
            "startIndex": 0,
            "totalResults": count,
            "format": "NVD_CVE",
            "version": "2.0",
            "timestamp": "2025-02-16T10:00:00.000",
            "vulnerabilities": vulnerabilities
        })
        .to_string()
    }

    fn expect_sample(summary: VulnerabilitySummary) -> ResultSample {
        match summary {
            VulnerabilitySummary::Sample(sample) => sample,
            other => panic!("expected a sample, got {:?}", other),
        }
    }

    #[test]
    fn test_default_budget() {
        let budget = SampleBudget::default();
        assert_eq!(budget.total_chars, 18_000);
        assert_eq!(budget.reserved_chars, 1_000);
        assert_eq!(budget.max_samples, 10);
        assert_eq!(budget.per_item_chars(10), 1_700);
        assert_eq!(budget.per_item_chars(3), 5_666);
        assert_eq!(budget.per_item_chars(0), 0);
    }

    #[test]
    fn test_empty_result_set_returns_no_matches() {
        let response = NvdResponse::new(200, nvd_body(0, 0));
        let summary = summarize(&response, &SampleBudget::default(), &mut StdRng::seed_from_u64(1));

        let VulnerabilitySummary::NoMatches(no_matches) = summary else {
            panic!("expected no matches");
        };
        let payload = no_matches.payload();
        assert_eq!(payload["message"], NoMatches::MESSAGE);
        assert_eq!(payload["totalResults"], 0);
        assert_eq!(payload["version"], "2.0");
        assert_eq!(payload["timestamp"], "2025-02-16T10:00:00.000");
    }

    #[test]
    fn test_missing_vulnerabilities_field_is_empty() {
        let response = NvdResponse::new(200, r#"{"totalResults":0,"version":"2.0"}"#);
        let summary = summarize(&response, &SampleBudget::default(), &mut StdRng::seed_from_u64(1));

        assert!(matches!(summary, VulnerabilitySummary::NoMatches(_)));
    }

    #[test]
    fn test_below_threshold_keeps_every_entry() {
        let body = nvd_body(3, 10_000);
        let originals: Vec<String> = serde_json::from_str::<Value>(&body).unwrap()["vulnerabilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(Value::to_string)
            .collect();
        let response = NvdResponse::new(200, body);
        let sample = expect_sample(summarize(
            &response,
            &SampleBudget::default(),
            &mut StdRng::seed_from_u64(7),
        ));

        assert_eq!(sample.num_samples, 3);
        assert_eq!(sample.vulnerabilities.len(), 3);
        assert_eq!(sample.total_results, 3);
        assert_eq!(sample.message, "There are 3 CVEs in this sample");
        let limit = (18_000 - 1_000) / 3;
        for (i, entry) in sample.vulnerabilities.iter().enumerate() {
            assert_eq!(entry.chars().count(), limit);
            assert_eq!(*entry, truncate_chars(&originals[i], limit));
        }
    }

    #[test]
    fn test_large_result_set_is_sampled() {
        let body = nvd_body(50, 20);
        let originals: Vec<String> = serde_json::from_str::<Value>(&body).unwrap()["vulnerabilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(Value::to_string)
            .collect();
        let response = NvdResponse::new(200, body);

        // Sampling is random: only cardinality, membership and truncation
        // are asserted, never which records were picked.
        for _ in 0..5 {
            let sample = expect_sample(summarize(
                &response,
                &SampleBudget::default(),
                &mut rand::thread_rng(),
            ));

            assert_eq!(sample.num_samples, 10);
            assert_eq!(sample.total_results, 50);
            let unique: HashSet<&String> = sample.vulnerabilities.iter().collect();
            assert_eq!(unique.len(), 10);
            for entry in &sample.vulnerabilities {
                assert!(entry.chars().count() <= (18_000 - 1_000) / 10);
                assert!(originals.contains(entry));
            }
        }
    }

    #[test]
    fn test_exactly_max_samples_is_sampled_without_duplicates() {
        let response = NvdResponse::new(200, nvd_body(10, 5));
        let sample = expect_sample(summarize(
            &response,
            &SampleBudget::default(),
            &mut StdRng::seed_from_u64(3),
        ));

        let unique: HashSet<&String> = sample.vulnerabilities.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let response = NvdResponse::new(200, nvd_body(50, 5));
        let budget = SampleBudget::default();

        let first = expect_sample(summarize(&response, &budget, &mut StdRng::seed_from_u64(42)));
        let second = expect_sample(summarize(&response, &budget, &mut StdRng::seed_from_u64(42)));
        assert_eq!(first.vulnerabilities, second.vulnerabilities);
    }

    #[test]
    fn test_total_results_is_passed_through() {
        let body = json!({
            "totalResults": 1234,
            "version": "2.0",
            "timestamp": "2025-02-16T10:00:00.000",
            "vulnerabilities": [{ "cve": { "id": "CVE-2014-0160" } }]
        })
        .to_string();
        let sample = expect_sample(summarize(
            &NvdResponse::new(200, body),
            &SampleBudget::default(),
            &mut StdRng::seed_from_u64(0),
        ));

        assert_eq!(sample.total_results, 1234);
        assert_eq!(sample.num_samples, 1);
        assert_eq!(sample.version, json!("2.0"));
    }

    #[test]
    fn test_custom_budget() {
        let budget = SampleBudget {
            total_chars: 1_100,
            reserved_chars: 100,
            max_samples: 4,
        };
        let sample = expect_sample(summarize(
            &NvdResponse::new(200, nvd_body(20, 1_000)),
            &budget,
            &mut StdRng::seed_from_u64(9),
        ));

        assert_eq!(sample.num_samples, 4);
        for entry in &sample.vulnerabilities {
            assert_eq!(entry.chars().count(), 250);
        }
    }

    #[test]
    fn test_not_found_is_quiet_notice() {
        let summary = summarize(
            &NvdResponse::new(404, ""),
            &SampleBudget::default(),
            &mut StdRng::seed_from_u64(0),
        );

        let VulnerabilitySummary::Unavailable(notice) = summary else {
            panic!("expected a notice");
        };
        assert_eq!(notice.status, Some(404));
        assert!(!notice.should_report());
    }

    #[test]
    fn test_server_error_is_reported_notice() {
        let summary = summarize(
            &NvdResponse::new(503, "Service Unavailable"),
            &SampleBudget::default(),
            &mut StdRng::seed_from_u64(0),
        );

        let VulnerabilitySummary::Unavailable(notice) = summary else {
            panic!("expected a notice");
        };
        assert!(notice.should_report());
        assert!(notice.message.contains("code:503"));
    }

    #[test]
    fn test_unreadable_body_is_notice() {
        let summary = summarize(
            &NvdResponse::new(200, "<html>maintenance</html>"),
            &SampleBudget::default(),
            &mut StdRng::seed_from_u64(0),
        );

        assert!(matches!(summary, VulnerabilitySummary::Unavailable(_)));
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
