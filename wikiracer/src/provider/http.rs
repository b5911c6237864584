//! Blocking HTTP provider.

use reqwest::blocking::Client;

use super::log::{RequestKind, RequestLog};
use super::PageProvider;
use crate::config::FetchConfig;
use crate::errors::{Result, WikiracerError};

/// Fetches pages from a live wiki over HTTP.
///
/// No retries and no caching: a failed request is reported once and the
/// search treats the page as a dead end.
#[derive(Debug)]
pub struct HttpProvider {
    client: Client,
    config: FetchConfig,
    log: RequestLog,
}

impl HttpProvider {
    /// Creates a provider from a fetch configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WikiracerError::config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            config,
            log: RequestLog::new(),
        })
    }

    /// Gets the configuration.
    #[must_use]
    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// The underlying request log.
    #[must_use]
    pub const fn log(&self) -> &RequestLog {
        &self.log
    }

    fn fetch(&self, identifier: &str) -> Result<String> {
        let url = self.config.url_for(identifier);
        let http_err = |source| WikiracerError::Http {
            identifier: identifier.to_string(),
            source,
        };

        let response = self.client.get(&url).send().map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(WikiracerError::Status {
                identifier: identifier.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(http_err)
    }
}

impl PageProvider for HttpProvider {
    fn get_page(&self, identifier: &str) -> Result<String> {
        self.log.record(identifier, RequestKind::Page);
        self.fetch(identifier)
    }

    fn get_random(&self) -> Result<String> {
        self.log.record(&self.config.random_path, RequestKind::Random);
        self.fetch(&self.config.random_path)
    }

    fn requests(&self) -> Vec<String> {
        self.log.identifiers()
    }
}
