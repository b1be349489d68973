// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend abstraction over the hosted entity store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;
use crate::query::{Matcher, SortSpec};

/// Request timeout applied to every store call.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Profile of the authenticated account, as reported by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Store identifier of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Login email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Role assigned by the store, e.g. "admin".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Raw record access to the entity store.
///
/// Implementations speak in untyped JSON records. The typed layer on
/// top lives in [`crate::EntityHandle`]. Handles stay generic over the
/// backend, so the returned futures never cross a `dyn` boundary and
/// carry an explicit `Send` bound for multi-fetch callers.
pub trait EntityBackend: Sync {
    /// Lists records of a collection.
    ///
    /// # Arguments
    ///
    /// * `collection` - Name of the collection to list
    /// * `sort` - Optional sort order
    /// * `limit` - Optional maximum number of records
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects it.
    fn list(
        &self,
        collection: &str,
        sort: Option<&SortSpec>,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<Value>, ClientError>> + Send;

    /// Lists the records of a collection matching an exact-match predicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects it.
    fn filter(
        &self,
        collection: &str,
        matcher: &Matcher,
    ) -> impl Future<Output = Result<Vec<Value>, ClientError>> + Send;

    /// Creates a record and returns it as stored, id included.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects it.
    fn create(
        &self,
        collection: &str,
        record: Value,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;

    /// Updates the fields of an existing record and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the store rejects it, or
    /// no record has the given id.
    fn update(
        &self,
        collection: &str,
        id: &str,
        record: Value,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the store rejects it, or
    /// no record has the given id.
    fn delete(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Fetches the profile of the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    fn me(&self) -> impl Future<Output = Result<AccountProfile, ClientError>> + Send;
}

/// HTTP implementation of [`EntityBackend`] against a hosted store.
///
/// Every request carries the bearer token of an already-established
/// session. Auth failures surface as rejected calls.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Creates a backend for the store at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root URL of the store API, with or without a trailing slash
    /// * `token` - Bearer token of the authenticated session
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ClientError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/entities/{collection}", self.base_url)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message: String = response.text().await.unwrap_or_default();
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn read<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response: reqwest::Response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

impl EntityBackend for HttpBackend {
    async fn list(
        &self,
        collection: &str,
        sort: Option<&SortSpec>,
        limit: Option<u32>,
    ) -> Result<Vec<Value>, ClientError> {
        tracing::debug!(collection, "listing records");

        let mut request: reqwest::RequestBuilder = self
            .client
            .get(self.collection_url(collection))
            .bearer_auth(&self.token);
        if let Some(sort) = sort {
            request = request.query(&[("sort", sort.to_string())]);
        }
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        let response: reqwest::Response = request.send().await?;
        Self::read(response).await
    }

    async fn filter(&self, collection: &str, matcher: &Matcher) -> Result<Vec<Value>, ClientError> {
        tracing::debug!(collection, "filtering records");

        let response: reqwest::Response = self
            .client
            .post(format!("{}/filter", self.collection_url(collection)))
            .bearer_auth(&self.token)
            .json(matcher)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn create(&self, collection: &str, record: Value) -> Result<Value, ClientError> {
        tracing::debug!(collection, "creating record");

        let response: reqwest::Response = self
            .client
            .post(self.collection_url(collection))
            .bearer_auth(&self.token)
            .json(&record)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn update(&self, collection: &str, id: &str, record: Value) -> Result<Value, ClientError> {
        tracing::debug!(collection, id, "updating record");

        let response: reqwest::Response = self
            .client
            .patch(format!("{}/{id}", self.collection_url(collection)))
            .bearer_auth(&self.token)
            .json(&record)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), ClientError> {
        tracing::debug!(collection, id, "deleting record");

        let response: reqwest::Response = self
            .client
            .delete(format!("{}/{id}", self.collection_url(collection)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn me(&self) -> Result<AccountProfile, ClientError> {
        tracing::debug!("fetching account profile");

        let response: reqwest::Response = self
            .client
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::read(response).await
    }
}
