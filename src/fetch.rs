use anyhow::{Context, Result};
use reqwest::blocking::Client;

/// Network access for the archive pipeline. The pipeline only ever needs
/// a page of text or a body of bytes from a URL; going through this trait
/// lets tests run the whole download loop against canned responses.
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> Result<String>;
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP client used by the drivers.
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    pub fn new() -> HttpFetch {
        HttpFetch {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetch {
    fn default() -> HttpFetch {
        HttpFetch::new()
    }
}

impl Fetch for HttpFetch {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().context("Failed to send request")?;
        response.text().context("Failed to get response text")
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().context("Failed to send request")?;
        // an HTTP error page must not end up archived as image bytes
        let response = response
            .error_for_status()
            .context("Server returned an error status")?;
        let bytes = response.bytes().context("Failed to read response body")?;
        Ok(bytes.to_vec())
    }
}
