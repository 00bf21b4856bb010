use crate::core::HealthCheck;
use crate::utils::error::{ProbeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const HEALTH_PATH: &str = "/api/health";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `base_url` 結尾的斜線會被去除後再接上路徑
pub fn join_path(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Single-shot `GET <base_url>/api/health`. No retries.
pub struct HttpHealthProbe {
    client: Client,
    endpoint: String,
}

impl HttpHealthProbe {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: join_path(base_url, HEALTH_PATH),
        })
    }
}

#[async_trait]
impl HealthCheck for HttpHealthProbe {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn check(&self) -> Result<serde_json::Value> {
        tracing::debug!("Making health request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Health response status: {}", response.status());
        let response = response.error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProbeError::InvalidHealthBody {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_strips_trailing_slashes() {
        assert_eq!(
            join_path("http://localhost:3000", HEALTH_PATH),
            "http://localhost:3000/api/health"
        );
        assert_eq!(
            join_path("https://fleetcrew.blog//", HEALTH_PATH),
            "https://fleetcrew.blog/api/health"
        );
    }

    #[test]
    fn test_probe_targets_health_path() {
        let probe = HttpHealthProbe::new("http://localhost:3000/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(probe.endpoint(), "http://localhost:3000/api/health");
    }
}
