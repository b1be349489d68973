// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client for the hosted entity store backing the Florian console.
//!
//! The store keeps one collection per record type and hands out
//! records as JSON. [`EntityClient`] wraps a backend in typed handles,
//! [`HttpBackend`] talks to the hosted API, and tests swap in their
//! own [`EntityBackend`] implementation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;
mod handle;
mod query;

#[cfg(test)]
mod tests;

pub use backend::{AccountProfile, EntityBackend, HttpBackend};
pub use error::ClientError;
pub use handle::{EntityClient, EntityHandle, EntityRecord, connect};
pub use query::{Matcher, SortSpec};
