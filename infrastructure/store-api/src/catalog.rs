use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Product, ProductId, StockRecord};
use business::domain::catalog::services::StoreCatalogService;

use crate::client::StoreApiClient;

#[derive(Deserialize)]
struct StockResponse {
    id: u64,
    amount: u32,
}

#[derive(Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    price: f64,
    image: String,
}

/// Per-id lookups against `GET /stock/{id}` and `GET /products/{id}`.
pub struct StoreCatalogHttp {
    client: StoreApiClient,
}

impl StoreCatalogHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self
            .client
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(%url, error = %err, "Store API request failed");
                CatalogError::Unavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "Store API answered with an error status");
            return Err(map_status(status));
        }

        response.json::<T>().await.map_err(|err| {
            tracing::warn!(%url, error = %err, "Store API response could not be decoded");
            CatalogError::MalformedResponse
        })
    }
}

fn map_status(status: StatusCode) -> CatalogError {
    if status == StatusCode::NOT_FOUND {
        CatalogError::NotFound
    } else {
        CatalogError::Unavailable
    }
}

fn ensure_same_product(requested: ProductId, returned: u64) -> Result<(), CatalogError> {
    if requested.value() == returned {
        Ok(())
    } else {
        Err(CatalogError::MalformedResponse)
    }
}

#[async_trait]
impl StoreCatalogService for StoreCatalogHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockRecord, CatalogError> {
        let url = self
            .client
            .stock_url(product_id.value())
            .map_err(|_| CatalogError::Unavailable)?;

        let data: StockResponse = self.fetch(url).await?;
        ensure_same_product(product_id, data.id)?;

        Ok(StockRecord {
            id: product_id,
            amount: data.amount,
        })
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let url = self
            .client
            .product_url(product_id.value())
            .map_err(|_| CatalogError::Unavailable)?;

        let data: ProductResponse = self.fetch(url).await?;
        ensure_same_product(product_id, data.id)?;

        Ok(Product {
            id: product_id,
            title: data.title,
            price: data.price,
            image: data.image,
        })
    }
}
