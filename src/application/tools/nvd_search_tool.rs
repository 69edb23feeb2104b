use crate::nvd_query::domain::{QueryArguments, ServiceNotice, VulnerabilitySummary};
use crate::nvd_query::services::{summarize, QueryAssembler, SampleBudget};
use crate::ports::outbound::{ToolDefinition, VulnerabilityRepository};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

/// Name the search tool is registered under
pub const NVD_SEARCH_TOOL_NAME: &str = "api-tool";

/// NvdSearchTool - The single tool offered to the language model
///
/// Assembles the query URL, performs one request through the repository,
/// and shapes the response into a bounded summary. Every outcome, including
/// transport failure, comes back as a [`VulnerabilitySummary`].
///
/// # Type Parameters
/// * `R` - VulnerabilityRepository implementation
pub struct NvdSearchTool<R: VulnerabilityRepository> {
    repository: R,
    assembler: QueryAssembler,
    budget: SampleBudget,
    rng: StdRng,
}

impl<R: VulnerabilityRepository> NvdSearchTool<R> {
    /// Creates a tool that samples with an entropy-seeded generator
    pub fn new(repository: R, assembler: QueryAssembler, budget: SampleBudget) -> Self {
        Self {
            repository,
            assembler,
            budget,
            rng: StdRng::from_entropy(),
        }
    }

    /// Pins the sampling sequence so repeated runs pick the same records
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Schema advertised to the language model
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NVD_SEARCH_TOOL_NAME.to_string(),
            description: "Calls the NVD API to get data-based answers related to the NVD \
                          security and vulnerability database."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "cveId": {
                        "type": "string",
                        "description": "cve identification number. Formatted as 'CVE', '-', 4 digits, '-', 5 digits"
                    },
                    "dateRangeStart": {
                        "type": "string",
                        "description": "the starting date among date-related words in the query. Formatted YYYY-MM-DD"
                    },
                    "dateRangeEnd": {
                        "type": "string",
                        "description": "the ending date among date-related words in the query. Formatted YYYY-MM-DD"
                    },
                    "keywords": {
                        "type": "string",
                        "description": "1 to 3 key words specifying a particular set of vulnerabilities or exposures or the name of a company, software, or product. keywords are separated by a space."
                    }
                },
                "required": ["cveId", "dateRangeStart", "dateRangeEnd", "keywords"]
            }),
        }
    }

    /// Runs one search. Never fails.
    ///
    /// Arguments with no usable filter are answered with a notice and no
    /// request is made.
    pub fn invoke(&mut self, args: &QueryArguments) -> VulnerabilitySummary {
        let Some(url) = self.assembler.build_url(args) else {
            tracing::info!(%args, "no search filters left, skipping NVD request");
            return VulnerabilitySummary::Unavailable(ServiceNotice::no_filters());
        };
        tracing::info!(%url, "querying NVD");

        match self.repository.search(&url) {
            Ok(response) => summarize(&response, &self.budget, &mut self.rng),
            Err(e) => {
                tracing::warn!(error = %e, "NVD request failed before a response arrived");
                VulnerabilitySummary::Unavailable(ServiceNotice::unreachable(&e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nvd_query::services::NvdResponse;
    use crate::shared::Result;
    use std::cell::RefCell;

    struct StubRepository {
        response: Option<NvdResponse>,
        urls: RefCell<Vec<String>>,
    }

    impl StubRepository {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                response: Some(NvdResponse::new(status, body)),
                urls: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                response: None,
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl VulnerabilityRepository for StubRepository {
        fn search(&self, url: &str) -> Result<NvdResponse> {
            self.urls.borrow_mut().push(url.to_string());
            match &self.response {
                Some(response) => Ok(response.clone()),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    fn tool(repository: StubRepository) -> NvdSearchTool<StubRepository> {
        NvdSearchTool::new(repository, QueryAssembler::new(), SampleBudget::default()).with_seed(1)
    }

    #[test]
    fn test_definition_schema() {
        let definition = tool(StubRepository::unreachable()).definition();
        assert_eq!(definition.name, "api-tool");
        let properties = &definition.parameters["properties"];
        for key in ["cveId", "dateRangeStart", "dateRangeEnd", "keywords"] {
            assert_eq!(properties[key]["type"], "string");
        }
        assert_eq!(definition.parameters["required"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_invoke_uses_assembled_url() {
        let mut tool = tool(StubRepository::responding(
            200,
            r#"{"totalResults":1,"version":"2.0","timestamp":"t","vulnerabilities":[{"cve":{"id":"CVE-2014-0160"}}]}"#,
        ));

        let summary = tool.invoke(&QueryArguments::new("CVE-2014-0160", "", "", ""));

        assert_eq!(
            tool.repository.urls.borrow().as_slice(),
            [format!("{}?cveId=CVE-2014-0160", QueryAssembler::NVD_CVE_ENDPOINT)]
        );
        assert!(matches!(summary, VulnerabilitySummary::Sample(ref s) if s.num_samples == 1));
    }

    #[test]
    fn test_invoke_transport_failure_is_notice() {
        let mut tool = tool(StubRepository::unreachable());

        let summary = tool.invoke(&QueryArguments::new("", "", "", "openssl"));

        let VulnerabilitySummary::Unavailable(notice) = summary else {
            panic!("expected a notice");
        };
        assert_eq!(notice.status, None);
        assert!(notice.message.contains("connection refused"));
    }

    #[test]
    fn test_invoke_without_filters_skips_request() {
        let mut tool = tool(StubRepository::responding(200, "{}"));

        let summary = tool.invoke(&QueryArguments::default());

        assert!(tool.repository.urls.borrow().is_empty());
        assert_eq!(
            summary,
            VulnerabilitySummary::Unavailable(ServiceNotice::no_filters())
        );
    }

    #[test]
    fn test_invoke_error_status_is_notice() {
        let mut tool = tool(StubRepository::responding(403, "Forbidden"));

        let summary = tool.invoke(&QueryArguments::new("", "", "", "openssl"));

        assert!(matches!(
            summary,
            VulnerabilitySummary::Unavailable(ServiceNotice { status: Some(403), .. })
        ));
    }
}
