use super::errors::GatewayError;
use super::models::StatusGateway;
use craftpulse_models::UpstreamStatus;

type Result<T> = std::result::Result<T, GatewayError>;

const USER_AGENT: &str = concat!("CraftPulse/", env!("CARGO_PKG_VERSION"));

impl StatusGateway {
    /// One upstream GET, bounded by the configured request timeout.
    pub(super) async fn fetch_upstream(&self, address: &str) -> Result<UpstreamStatus> {
        let url = format!("{}/{}/{}", self.base_url, self.api_version, address);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.text().await {
                if !body.is_empty() {
                    tracing::debug!("Upstream {} error body: {}", status, body);
                }
            }
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<UpstreamStatus>().await?)
    }
}
