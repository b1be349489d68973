// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory entity store used by the client tests.

use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::backend::{AccountProfile, EntityBackend};
use crate::error::ClientError;
use crate::query::{Matcher, SortSpec};

/// Backend keeping its collections in memory.
///
/// Mirrors the semantics of the hosted store closely enough for the
/// handle tests: ids are assigned on create, updates merge fields, and
/// unknown ids come back as rejected calls.
pub struct InMemoryBackend {
    collections: Mutex<BTreeMap<String, Vec<Value>>>,
    next_id: AtomicU64,
    profile: AccountProfile,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
            profile: AccountProfile {
                id: Some("account-1".to_string()),
                email: Some("kommandant@example.org".to_string()),
                full_name: Some("Karl Wagner".to_string()),
                role: Some("admin".to_string()),
            },
        }
    }

    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(collection: &str, id: &str) -> ClientError {
    ClientError::Rejected {
        status: 404,
        message: format!("no {collection} record with id {id}"),
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or(0.0)
            .total_cmp(&y.as_f64().unwrap_or(0.0)),
        _ => Ordering::Equal,
    }
}

impl EntityBackend for InMemoryBackend {
    async fn list(
        &self,
        collection: &str,
        sort: Option<&SortSpec>,
        limit: Option<u32>,
    ) -> Result<Vec<Value>, ClientError> {
        let mut records: Vec<Value> = {
            let collections = self.collections.lock().unwrap();
            collections.get(collection).cloned().unwrap_or_default()
        };
        if let Some(sort) = sort {
            records.sort_by(|a, b| {
                let ordering: Ordering = compare_field(a, b, sort.field());
                if sort.is_descending() {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        if let Some(limit) = limit {
            records.truncate(limit as usize);
        }
        Ok(records)
    }

    async fn filter(&self, collection: &str, matcher: &Matcher) -> Result<Vec<Value>, ClientError> {
        let records: Vec<Value> = {
            let collections = self.collections.lock().unwrap();
            collections
                .get(collection)
                .map(|records| {
                    records
                        .iter()
                        .filter(|record| matcher.matches(record))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };
        Ok(records)
    }

    async fn create(&self, collection: &str, record: Value) -> Result<Value, ClientError> {
        let mut record: Value = record;
        if record.get("id").is_none() {
            let serial: u64 = self.next_id.fetch_add(1, AtomicOrdering::Relaxed) + 1;
            record["id"] = Value::String(format!("rec-{serial}"));
        }
        {
            let mut collections = self.collections.lock().unwrap();
            collections
                .entry(collection.to_string())
                .or_default()
                .push(record.clone());
        }
        Ok(record)
    }

    async fn update(&self, collection: &str, id: &str, record: Value) -> Result<Value, ClientError> {
        let mut collections = self.collections.lock().unwrap();
        let records: &mut Vec<Value> = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;
        let existing: &mut Value = records
            .iter_mut()
            .find(|candidate| record_id(candidate) == Some(id))
            .ok_or_else(|| not_found(collection, id))?;
        if let (Some(target), Some(fields)) = (existing.as_object_mut(), record.as_object()) {
            for (name, value) in fields {
                target.insert(name.clone(), value.clone());
            }
        }
        Ok(existing.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), ClientError> {
        let mut collections = self.collections.lock().unwrap();
        let records: &mut Vec<Value> = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;
        let before: usize = records.len();
        records.retain(|candidate| record_id(candidate) != Some(id));
        if records.len() == before {
            return Err(not_found(collection, id));
        }
        Ok(())
    }

    async fn me(&self) -> Result<AccountProfile, ClientError> {
        Ok(self.profile.clone())
    }
}
