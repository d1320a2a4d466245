use super::Transport;
use crate::error::{Result, TransportError};
use crate::types::{Method, Request, Response};
use reqwest::Client;
use std::time::Duration;

/// Transport backed by a real HTTP client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given timeout and redirect policy
    pub fn new(timeout_seconds: u64, follow_redirects: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .redirect(if follow_redirects {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn respond(&self, request: &Request) -> Result<Response> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        if let Some(user_agent) = &request.user_agent {
            builder = builder.header(reqwest::header::USER_AGENT, user_agent.as_str());
        }

        let response = builder.send().await.map_err(TransportError::from)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::from)?;

        Ok(Response::new(status, body))
    }
}
