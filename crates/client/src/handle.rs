// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed access to the collections of the entity store.

use florian_domain::{Equipment, Member, Operation, Service, Vehicle};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

use crate::backend::{AccountProfile, EntityBackend, HttpBackend};
use crate::error::ClientError;
use crate::query::{Matcher, SortSpec};

/// A record type stored in a named collection.
pub trait EntityRecord: Serialize + DeserializeOwned {
    /// Collection holding records of this type.
    const COLLECTION: &'static str;
}

impl EntityRecord for Member {
    const COLLECTION: &'static str = "Member";
}

impl EntityRecord for Service {
    const COLLECTION: &'static str = "Service";
}

impl EntityRecord for Operation {
    const COLLECTION: &'static str = "Operation";
}

impl EntityRecord for Vehicle {
    const COLLECTION: &'static str = "Vehicle";
}

impl EntityRecord for Equipment {
    const COLLECTION: &'static str = "Equipment";
}

/// Typed view of one collection on a backend.
///
/// Converts between domain records and the raw JSON the backend
/// speaks. Obtained from [`EntityClient`], never constructed directly.
#[derive(Debug)]
pub struct EntityHandle<'a, R, B> {
    backend: &'a B,
    _record: PhantomData<fn() -> R>,
}

impl<'a, R, B> EntityHandle<'a, R, B>
where
    R: EntityRecord,
    B: EntityBackend,
{
    const fn new(backend: &'a B) -> Self {
        Self {
            backend,
            _record: PhantomData,
        }
    }

    /// Lists the records of the collection.
    ///
    /// # Arguments
    ///
    /// * `sort` - Optional sort order
    /// * `limit` - Optional maximum number of records
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or a record does not decode.
    pub async fn list(
        &self,
        sort: Option<&SortSpec>,
        limit: Option<u32>,
    ) -> Result<Vec<R>, ClientError> {
        let records: Vec<Value> = self.backend.list(R::COLLECTION, sort, limit).await?;
        decode_records(records)
    }

    /// Lists the records matching `matcher`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or a record does not decode.
    pub async fn filter(&self, matcher: &Matcher) -> Result<Vec<R>, ClientError> {
        let records: Vec<Value> = self.backend.filter(R::COLLECTION, matcher).await?;
        decode_records(records)
    }

    /// Creates a record and returns it as stored, id included.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the result does not decode.
    pub async fn create(&self, record: &R) -> Result<R, ClientError> {
        let payload: Value = serde_json::to_value(record)?;
        let created: Value = self.backend.create(R::COLLECTION, payload).await?;
        Ok(serde_json::from_value(created)?)
    }

    /// Updates the record with the given id and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails, no record has the id, or the
    /// result does not decode.
    pub async fn update(&self, id: &str, record: &R) -> Result<R, ClientError> {
        let payload: Value = serde_json::to_value(record)?;
        let updated: Value = self.backend.update(R::COLLECTION, id, payload).await?;
        Ok(serde_json::from_value(updated)?)
    }

    /// Deletes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or no record has the id.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.backend.delete(R::COLLECTION, id).await
    }
}

fn decode_records<R: EntityRecord>(records: Vec<Value>) -> Result<Vec<R>, ClientError> {
    records
        .into_iter()
        .map(|record| serde_json::from_value(record).map_err(ClientError::from))
        .collect()
}

/// Client over all collections of one entity store.
#[derive(Debug)]
pub struct EntityClient<B> {
    backend: B,
}

impl<B: EntityBackend> EntityClient<B> {
    /// Wraps a backend in a typed client.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Handle on the member roster.
    #[must_use]
    pub const fn members(&self) -> EntityHandle<'_, Member, B> {
        EntityHandle::new(&self.backend)
    }

    /// Handle on the service records.
    #[must_use]
    pub const fn services(&self) -> EntityHandle<'_, Service, B> {
        EntityHandle::new(&self.backend)
    }

    /// Handle on the operation records.
    #[must_use]
    pub const fn operations(&self) -> EntityHandle<'_, Operation, B> {
        EntityHandle::new(&self.backend)
    }

    /// Handle on the vehicle fleet.
    #[must_use]
    pub const fn vehicles(&self) -> EntityHandle<'_, Vehicle, B> {
        EntityHandle::new(&self.backend)
    }

    /// Handle on the equipment inventory.
    #[must_use]
    pub const fn equipment(&self) -> EntityHandle<'_, Equipment, B> {
        EntityHandle::new(&self.backend)
    }

    /// Fetches the profile of the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the session is invalid.
    pub async fn me(&self) -> Result<AccountProfile, ClientError> {
        self.backend.me().await
    }
}

/// Connects to the hosted entity store at `base_url`.
///
/// # Arguments
///
/// * `base_url` - Root URL of the store API
/// * `token` - Bearer token of the authenticated session
///
/// # Errors
///
/// Returns an error if the HTTP backend cannot be built.
pub fn connect(base_url: &str, token: &str) -> Result<EntityClient<HttpBackend>, ClientError> {
    Ok(EntityClient::new(HttpBackend::new(base_url, token)?))
}
