use nvd_chat::nvd_query::services::NvdResponse;
use nvd_chat::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock VulnerabilityRepository returning a fixed response
#[derive(Clone)]
pub struct MockVulnerabilityRepository {
    pub response: Option<NvdResponse>,
    pub urls: Arc<Mutex<Vec<String>>>,
}

impl MockVulnerabilityRepository {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Some(NvdResponse::new(status, body)),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A page of `count` synthetic CVE records
    pub fn with_records(count: usize) -> Self {
        Self::responding(200, &nvd_page(count))
    }

    pub fn with_failure() -> Self {
        Self {
            response: None,
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl VulnerabilityRepository for MockVulnerabilityRepository {
    fn search(&self, url: &str) -> Result<NvdResponse> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("Mock NVD connection refused"),
        }
    }
}

/// Builds an NVD CVE API 2.0 response body
pub fn nvd_page(count: usize) -> String {
    let vulnerabilities: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "cve": {
                    "id": format!("CVE-2024-{:05}", i),
                    "descriptions": [{"lang": "en", "value": format!("Synthetic issue {}", i)}]
                }
            })
        })
        .collect();

    serde_json::json!({
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
