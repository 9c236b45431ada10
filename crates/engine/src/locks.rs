//! In-process serialization of transfers.
//!
//! A transfer holds the lock of every account it touches until its database
//! transaction commits. Locks are taken in ascending id order, so two
//! transfers sharing one or both accounts cannot deadlock.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lock table keyed by account id.
///
/// Entries are created on first use and kept for the life of the engine.
#[derive(Debug, Default)]
pub(crate) struct AccountLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

/// Guards held by a transfer; dropping it releases the accounts.
#[derive(Debug)]
pub(crate) struct AccountsGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl AccountLocks {
    pub(crate) async fn acquire(&self, first: i64, second: i64) -> AccountsGuard {
        let mut ids = vec![first.min(second), first.max(second)];
        ids.dedup();

        let mut guards = Vec::with_capacity(ids.len());
        for id in ids {
            // Clone the mutex out of the map: a `DashMap` reference must not
            // be held across an await point.
            let lock = self.locks.entry(id).or_default().value().clone();
            guards.push(lock.lock_owned().await);
        }

        AccountsGuard { _guards: guards }
    }
}
