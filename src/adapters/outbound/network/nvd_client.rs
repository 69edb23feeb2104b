use crate::nvd_query::services::NvdResponse;
use crate::ports::outbound::VulnerabilityRepository;
use crate::shared::Result;
use reqwest::blocking::Client;

/// NVD CVE API 2.0 client
///
/// Sends one GET per search with the `apiKey` header. Error statuses are
/// returned to the caller as data; only a missing response is an error.
///
/// # Security
/// - Uses the reqwest blocking client's default timeout (30 seconds)
/// - Does not retry failed requests
pub struct NvdClient {
    client: Client,
    api_key: String,
}

impl NvdClient {

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nvd-chat/{}", version);
        let client = Client::builder()
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

impl VulnerabilityRepository for NvdClient {
    fn search(&self, url: &str) -> Result<NvdResponse> {
        let response = self
            .client
            .get(url)
            .header("apiKey", &self.api_key)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(status, bytes = body.len(), "NVD responded");

        Ok(NvdResponse::new(status, body))
    }
}
