use crate::error::Result;
use std::collections::HashMap;
use url::Url;
use urlencoding::encode;

/// Builder for probe request URLs
pub struct UrlBuilder<'a> {
    base_url: &'a str,
    path: &'a str,
    params: &'a HashMap<String, String>,
}

impl<'a> UrlBuilder<'a> {
    /// Create a new URL builder
    pub fn new(base_url: &'a str, path: &'a str, params: &'a HashMap<String, String>) -> Self {
        Self {
            base_url,
            path,
            params,
        }
    }

    /// Build the complete URL with the encoded query string appended
    pub fn build(&self) -> Result<Url> {
        let mut full_url = format!("{}{}", self.base_url.trim_end_matches('/'), self.path);

        let query = self.query_string();
        if !query.is_empty() {
            full_url.push('?');
            full_url.push_str(&query);
        }

        Ok(Url::parse(&full_url)?)
    }

    /// Encode the parameters as a query string, sorted by key so the same
    /// parameters always produce the same URL
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<_> = self.params.iter().collect();
        pairs.sort_by_key(|(key, _)| key.as_str());

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
