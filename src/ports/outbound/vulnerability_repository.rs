use crate::nvd_query::services::NvdResponse;
use crate::shared::Result;

/// VulnerabilityRepository port for querying the vulnerability database
///
/// This port abstracts the NVD REST API so the search tool can be exercised
/// without network access.
pub trait VulnerabilityRepository {
    /// Performs one GET request against a fully assembled query URL
    ///
    /// # Arguments
    /// * `url` - URL built by the query assembler
    ///
    /// # Returns
    /// The HTTP status and raw body. Any status, including 4xx and 5xx,
    /// is returned as `Ok`.
    ///
    /// # Errors
    /// Returns an error only when no response was received (DNS failure,
    /// connection refused, timeout). No retry is attempted.
    fn search(&self, url: &str) -> Result<NvdResponse>;
}
