//! # Catalog Service
//!
//! Binds the transport to the catalog endpoint. Errors from the transport
//! are returned as-is; nothing is retried or translated here.

use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Url;

use super::types::CatalogResponse;
use crate::transport::{DEFAULT_TIMEOUT, HttpTransport, RequestError};

pub const DEFAULT_CATALOG_URL: &str = "https://www.endclothing.com/media/catalog/example.json";

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches and decodes the whole catalog.
    async fn fetch_catalog(&self) -> Result<CatalogResponse, RequestError>;
}

/// Catalog service backed by a real HTTP endpoint.
pub struct HttpCatalogService {
    transport: HttpTransport,
    base_url: String,
    timeout: Duration,
}

impl HttpCatalogService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(), base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_transport(
        transport: HttpTransport,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            timeout,
        }
    }

}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, RequestError> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            warn!("Catalog URL {:?} is unusable: {}", self.base_url, e);
            RequestError::Network(format!("invalid catalog URL: {e}"))
        })?;

        let response = self
            .transport
            .perform_request::<CatalogResponse>(&url, self.timeout)
            .await?;

        info!(
            "Fetched catalog {:?}: {} products (product_count={})",
            response.title,
            response.products.len(),
            response.product_count
        );
        Ok(response)
    }
}
