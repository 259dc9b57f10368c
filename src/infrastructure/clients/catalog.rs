// ============================================================
// CATALOG CLIENT
// ============================================================
// Bearer-authenticated GET against the catalog middleware; the
// payload is always requested as XML.

use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::error::{AppError, Result};

pub struct CatalogClient {
    client: reqwest::Client,
    address: Url,
    token: String,
}

impl CatalogClient {
    pub fn new(address: &str, token: String) -> Result<Self> {
        let address = Url::parse(address)
            .map_err(|e| AppError::Config(format!("Bad catalog address '{}': {}", address, e)))?;
        Ok(Self {
            client: reqwest::Client::new(),
            address,
            token,
        })
    }

    /// Fetch the raw XML report behind `endpoint` (a path appended to
    /// the base address).
    pub async fn fetch_report(&self, endpoint: &str) -> Result<String> {
        let mut url = self
            .address
            .join(endpoint)
            .map_err(|e| AppError::Config(format!("Bad catalog endpoint '{}': {}", endpoint, e)))?;
        url.query_pairs_mut().append_pair("format", "xml");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "text/xml")
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Catalog request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Fetch(format!(
                "Catalog API error ({}): {}",
                status, text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Fetch(format!("Failed to read catalog payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_address_is_a_config_error() {
        let result = CatalogClient::new("not a url", "token".to_string());
        assert!(matches!(result.err(), Some(AppError::Config(_))));
    }
}
