use crate::classify::classify;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::Request;
use crate::url_builder::UrlBuilder;
use std::collections::HashMap;

/// Client that probes the configured target and classifies the answer
pub struct ProbeClient<T> {
    transport: T,
    config: ProbeConfig,
}

impl<T: Transport> ProbeClient<T> {
    /// Create a new client over the given transport
    pub fn new(config: ProbeConfig, transport: T) -> Self {
        Self { transport, config }
    }

    /// Issue a GET against the configured base URL and classify the answer.
    ///
    /// Returns the response body on a 200. Any other status becomes the
    /// classifier's error, propagated untouched; the client never catches
    /// or wraps. Recovery belongs to the caller.
    pub async fn send_get(&self, path: &str, params: &HashMap<String, String>) -> Result<String> {
        let url = UrlBuilder::new(&self.config.base_url, path, params).build()?;
        let request = Request::get(url.as_str()).with_user_agent(&self.config.user_agent);

        let response = self.transport.respond(&request).await?;
        classify(response)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}
