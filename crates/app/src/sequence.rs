// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stale-response guard for overlapping fetches.
//!
//! A view that refetches while an earlier fetch is still in flight must
//! not apply the earlier result when it finally lands. Each fetch takes
//! a ticket from a monotonic sequence and applies its result only if
//! the ticket is still the newest one issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one fetch against a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Monotonic sequence of fetch tickets.
///
/// Issuing a new ticket invalidates every ticket issued before it.
#[derive(Debug, Default)]
pub struct RequestSequence {
    current: AtomicU64,
}

impl RequestSequence {
    /// Creates a sequence with no tickets issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
        }
    }

    /// Issues the ticket for a new fetch, invalidating all earlier ones.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Returns whether `ticket` is still the newest ticket issued.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current.load(Ordering::Relaxed) == ticket.0
    }
}
