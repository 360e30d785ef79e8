//! Product repository: the single remote collaborator of the viewer.
//!
//! [`ProductRepository`] is the async seam the rest of the crate depends on.
//! [`HttpProductRepository`] performs the real `GET` against the catalog
//! endpoint, [`StaticProductRepository`] serves an in-memory list.
//!
//! Callers normally go through [`load_products`], which never fails: any
//! repository error is logged and replaced by an empty list so the viewer can
//! still show its "no results" state.

use crate::error::RepositoryError;
use crate::product::Product;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

/// Endpoint used when no other URL is configured.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Source of the product list.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists every product in endpoint order.
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;
}

/// Repository backed by a JSON-over-HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpProductRepository {
    client: Client,
    url: String,
}

impl HttpProductRepository {
    /// Creates a repository for `url` with a request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                error!(error = %err, "failed to build configured HTTP client, using defaults");
                Client::new()
            });
        Self::with_client(client, url)
    }

    /// Creates a repository that reuses an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Endpoint this repository reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| RepositoryError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RepositoryError::Transport {
                url: self.url.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| RepositoryError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Repository that serves a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticProductRepository {
    products: Vec<Product>,
}

impl StaticProductRepository {
    /// Creates a repository that always returns `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductRepository for StaticProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }
}

/// Fetches the product list, degrading to an empty list on any failure.
pub async fn load_products(repository: &dyn ProductRepository) -> Vec<Product> {
    match repository.list_products().await {
        Ok(products) => {
            info!(count = products.len(), "loaded product list");
            products
        }
        Err(err) => {
            error!(error = %err, "failed to load products, continuing with an empty list");
            Vec::new()
        }
    }
}
