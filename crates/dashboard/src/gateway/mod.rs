//! HTTP client for the mock REST API.
//!
//! The gateway is the sole component that performs network I/O. Reads are
//! cached in-memory via `moka` (5-minute TTL) keyed by endpoint + params;
//! user mutations invalidate every users-tagged key. The mock backend does
//! not persist writes, so mutation responses are logged but never treated
//! as authoritative.
//!
//! # Endpoints
//!
//! - `GET /users`, `GET /users/{id}` - customer records
//! - `POST /users`, `PUT /users/{id}`, `DELETE /users/{id}` - customer CRUD
//! - `GET /photos?_limit=N` - seed material for the catalog
//! - `POST /posts` - order submission (order JSON carried in the body field)

mod cache;
mod types;

pub use types::{PhotoRecord, PostReceipt};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use retail_admin_core::CustomerId;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::DashboardConfig;
use crate::models::{Customer, CustomerDraft, Order};

use cache::{CacheKey, CacheTag, CacheValue};

/// How long cached reads stay fresh.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Maximum number of cached responses.
const CACHE_CAPACITY: u64 = 64;

/// Errors that can occur when talking to the mock API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed (connect, timeout, body read, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A path could not be joined onto the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the mock REST API.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &DashboardConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().build()?;

        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .support_invalidation_closures()
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.api_base_url.clone(),
                cache,
            }),
        })
    }

    /// Fetch the full customer/user list (`GET /users`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a user list.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<Customer>, GatewayError> {
        if let Some(CacheValue::Users(users)) = self.inner.cache.get(&CacheKey::Users).await {
            debug!("users served from cache");
            return Ok(users.as_ref().clone());
        }

        let users: Vec<Customer> = self.get_json(self.endpoint("users")?).await?;
        self.inner
            .cache
            .insert(CacheKey::Users, CacheValue::Users(Arc::new(users.clone())))
            .await;
        Ok(users)
    }

    /// Fetch a single customer/user record (`GET /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] for an unknown id, or a transport
    /// error otherwise.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_user(&self, id: CustomerId) -> Result<Customer, GatewayError> {
        let key = CacheKey::User(id.as_i64());
        if let Some(CacheValue::User(user)) = self.inner.cache.get(&key).await {
            debug!("user served from cache");
            return Ok(user.as_ref().clone());
        }

        let user: Customer = self
            .get_json(self.endpoint(&format!("users/{id}"))?)
            .await?;
        self.inner
            .cache
            .insert(key, CacheValue::User(Arc::new(user.clone())))
            .await;
        Ok(user)
    }

    /// Submit a customer create (`POST /users`).
    ///
    /// The mock backend echoes an id back but does not persist the record;
    /// the local ledger assigns the authoritative id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn create_user(&self, draft: &CustomerDraft) -> Result<(), GatewayError> {
        let body = serde_json::json!({
            "name": draft.name,
            "username": draft.username,
            "email": draft.email,
            "phone": draft.phone,
            "website": draft.website,
            "company": { "name": draft.company_name },
        });

        let echo: serde_json::Value = self.post_json(self.endpoint("users")?, &body).await?;
        debug!(remote_id = ?echo.get("id"), "user created on mock backend");
        self.invalidate(CacheTag::Users);
        Ok(())
    }

    /// Submit a customer update (`PUT /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, record), fields(customer_id = %record.id))]
    pub async fn update_user(&self, record: &Customer) -> Result<(), GatewayError> {
        let body = serde_json::to_value(record)?;
        let _echo: serde_json::Value = self
            .put_json(self.endpoint(&format!("users/{}", record.id))?, &body)
            .await?;
        self.invalidate(CacheTag::Users);
        Ok(())
    }

    /// Submit a customer delete (`DELETE /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_user(&self, id: CustomerId) -> Result<(), GatewayError> {
        let url = self.endpoint(&format!("users/{id}"))?;
        let response = self.inner.http.delete(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }
        self.invalidate(CacheTag::Users);
        Ok(())
    }

    /// Fetch photo records for catalog seeding (`GET /photos?_limit=N`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_photos(&self, limit: u32) -> Result<Vec<PhotoRecord>, GatewayError> {
        let key = CacheKey::Photos { limit };
        if let Some(CacheValue::Photos(photos)) = self.inner.cache.get(&key).await {
            debug!("photos served from cache");
            return Ok(photos.as_ref().clone());
        }

        let mut url = self.endpoint("photos")?;
        url.query_pairs_mut()
            .append_pair("_limit", &limit.to_string());

        let photos: Vec<PhotoRecord> = self.get_json(url).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Photos(Arc::new(photos.clone())))
            .await;
        Ok(photos)
    }

    /// Submit an order (`POST /posts`).
    ///
    /// The order is JSON-serialized into the post's `body` field. The
    /// response id is logged only; the local order id stays authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the request fails.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn submit_order(&self, order: &Order) -> Result<(), GatewayError> {
        let payload = serde_json::to_string(order)?;
        let body = serde_json::json!({
            "title": format!("Order #{}", order.id),
            "body": payload,
            "userId": order.customer_id,
        });

        let receipt: PostReceipt = self.post_json(self.endpoint("posts")?, &body).await?;
        debug!(remote_id = receipt.id, "order submitted to mock backend");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Drop every cached read carrying the given tag.
    fn invalidate(&self, tag: CacheTag) {
        if let Err(e) = self
            .inner
            .cache
            .invalidate_entries_if(move |key, _| key.tag() == tag)
        {
            warn!("cache invalidation failed: {e}");
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let path = url.path().to_owned();
        let response = self.inner.http.get(url).send().await?;
        Self::decode(response, &path).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &serde_json::Value,
    ) -> Result<T, GatewayError> {
        let path = url.path().to_owned();
        let response = self.inner.http.post(url).json(body).send().await?;
        Self::decode(response, &path).await
    }

    async fn put_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &serde_json::Value,
    ) -> Result<T, GatewayError> {
        let path = url.path().to_owned();
        let response = self.inner.http.put(url).json(body).send().await?;
        Self::decode(response, &path).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(path.to_owned()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = DashboardConfig {
            api_base_url: Url::parse("https://jsonplaceholder.typicode.com").unwrap(),
            catalog_limit: 50,
            session_file: std::path::PathBuf::from("unused.json"),
            catalog_seed: None,
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = client();
        assert_eq!(
            client.endpoint("users/3").unwrap().as_str(),
            "https://jsonplaceholder.typicode.com/users/3"
        );
    }

    #[test]
    fn test_order_post_body_shape() {
        use crate::testutil;
        use chrono::{TimeZone, Utc};
        use retail_admin_core::{CustomerId, OrderId, OrderStatus};

        let order = Order {
            id: OrderId::new(1),
            customer_id: CustomerId::new(4),
            customer_name: "Patricia Lebsack".into(),
            items: vec![testutil::cart_item(testutil::product(9, "thing", 1999, 3), 2)],
            total: testutil::product(9, "thing", 1999, 3).price.times(2),
            created_at: Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap(),
            status: OrderStatus::Pending,
        };

        let payload = serde_json::to_value(&order).unwrap();
        assert_eq!(payload["customerId"], 4);
        assert_eq!(payload["customerName"], "Patricia Lebsack");
        assert_eq!(payload["items"][0]["quantity"], 2);
        assert_eq!(payload["items"][0]["product"]["id"], 9);
    }
}
