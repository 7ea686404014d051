use reqwest::{IntoUrl, Url};

use super::Client;
use crate::Result;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

// -------------------------------------------------------------------------------------------------
// ClientBuilder
// -------------------------------------------------------------------------------------------------
pub struct ClientBuilder {
    base_url: Url,
}

impl ClientBuilder {
    // GitHub rejects requests that carry no User-Agent
    const USER_AGENT: &'static str = concat!("check_new_commits/", env!("CARGO_PKG_VERSION"));

    pub fn new() -> Self {
        ClientBuilder {
            base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL should parse"),
        }
    }

    pub fn base_url<T: IntoUrl>(mut self, url: T) -> Result<Self> {
        self.base_url = url.into_url()?;
        Ok(self)
    }

    pub fn build(self) -> Result<Client> {
        let inner = reqwest::ClientBuilder::new()
            .user_agent(Self::USER_AGENT)
            .build()?;
        Ok(Client {
            base_url: self.base_url,
            inner,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
