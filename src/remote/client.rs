use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("ttm/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// Blocking GET used by the listing fetcher and the event loader.
///
/// Must be `Sync`: listing files are downloaded on the rayon pool.
pub(crate) trait HttpGet: Send + Sync {
    /// Fetch `url` and return the body of a 2xx response
    fn get(&self, url: &str) -> Result<String, FetchError>;

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>
    where
        Self: Sized,
    {
        let body = self.get(url)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// `HttpGet` backed by a shared ureq agent
pub(crate) struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub(crate) fn new(timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent }
    }
}

impl HttpGet for UreqClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => FetchError::Status(status),
                other => FetchError::Transport(other.to_string()),
            })?;
        let mut body = response.into_body();
        body.read_to_string()
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
