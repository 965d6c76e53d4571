//! HTTP client for the chat-completion endpoint.

use crate::prelude::*;
use docgen_core::chat::{build_request, extract_content};
use docgen_core::config::Config;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Chat-completion client bound to one endpoint and model.
#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl AiClient {
    /// Create a client that sends the API key as a bearer token on every request
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&f!("Bearer {}", config.api_key))
            .map_err(|e| eyre!("Invalid API key header value: {}", e))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            endpoint: config.api_endpoint.clone(),
            model: config.model_name.clone(),
        })
    }

    /// Ask the model to document `content` and return the first choice's text.
    pub async fn generate(&self, content: &str) -> std::result::Result<String, Error> {
        let request = build_request(&self.model, content);

        log::debug!(
            "POST {} model={} prompt_chars={}",
            self.endpoint,
            self.model,
            request.messages[0].content.len()
        );

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        log::debug!("{} responded {} ({} bytes)", self.endpoint, status, body.len());

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(extract_content(&body)?)
    }
}
