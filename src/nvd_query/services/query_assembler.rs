use crate::nvd_query::domain::{DateRange, QueryArguments};

/// QueryAssembler - Builds NVD CVE API request URLs
///
/// Empty arguments are left out of the query string. The date filter is
/// sent only as a complete pair that passes range validation; otherwise the
/// request falls back to the identifier and keyword filters alone. When no
/// filter is left there is no query to send: the bare endpoint lists the
/// whole database.
#[derive(Debug, Clone)]
pub struct QueryAssembler {
    base_url: String,
}

impl QueryAssembler {
    pub const NVD_CVE_ENDPOINT: &'static str = "https://services.nvd.nist.gov/rest/json/cves/2.0";

    pub fn new() -> Self {
        Self::with_base_url(Self::NVD_CVE_ENDPOINT)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The date filter that will be applied, if any
    pub fn date_range(args: &QueryArguments) -> Option<DateRange> {
        if !args.has_date_range() {
            return None;
        }
        DateRange::parse(&args.date_range_start, &args.date_range_end)
    }

    pub fn build_url(&self, args: &QueryArguments) -> Option<String> {
        let mut params: Vec<(&str, String)> = Vec::new();

        if !args.cve_id.is_empty() {
            params.push(("cveId", args.cve_id.clone()));
        }
        if !args.keywords.is_empty() {
            params.push(("keywordSearch", args.keywords.clone()));
        }

        match Self::date_range(args) {
            Some(range) => {
                params.push(("lastModStartDate", range.last_mod_start_date()));
                params.push(("lastModEndDate", range.last_mod_end_date()));
            }
            None if args.has_date_range() => {
                tracing::debug!(
                    start = %args.date_range_start,
                    end = %args.date_range_end,
                    "dropping date filter outside the NVD range limit"
                );
            }
            None => {}
        }

        if params.is_empty() {
            return None;
        }

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        Some(format!("{}?{}", self.base_url, query))
    }
}

impl Default for QueryAssembler {
    fn default() -> Self {
        Self::new()
    }
}
