use std::time::Duration;

use reqwest::Client;
use url::Url;

/// Shared HTTP client configuration for the storefront's stock/product API.
pub struct StoreApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl StoreApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: with_trailing_slash(base_url),
        }
    }

    /// Returns the `stock/{id}` endpoint URL.
    pub fn stock_url(&self, product_id: u64) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("stock/{}", product_id))
    }

    /// Returns the `products/{id}` endpoint URL.
    pub fn product_url(&self, product_id: u64) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("products/{}", product_id))
    }
}

// `Url::join` drops the last path segment unless the base ends with '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StoreApiClient {
        StoreApiClient::new(Url::parse(base).unwrap(), Duration::from_secs(5))
    }

    #[test]
    fn should_build_endpoint_urls_from_root() {
        let client = client("http://localhost:3333");

        assert_eq!(
            client.stock_url(1).unwrap().as_str(),
            "http://localhost:3333/stock/1"
        );
        assert_eq!(
            client.product_url(1).unwrap().as_str(),
            "http://localhost:3333/products/1"
        );
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let client = client("https://api.rocketshoes.test/v1");

        assert_eq!(
            client.stock_url(12).unwrap().as_str(),
            "https://api.rocketshoes.test/v1/stock/12"
        );
    }
}
