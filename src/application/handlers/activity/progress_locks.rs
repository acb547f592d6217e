//! Per (learner, module) serialization of progress updates.
//!
//! Answer submission and module completion read a record, derive the next
//! state and write it back. Two such sequences for the same key must not
//! interleave, or one update is lost.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::{ModuleId, UserId};

/// Keyed async locks, one per (learner, module) pair.
///
/// Different keys never contend. Module ids come straight from the request
/// path and are not checked against the catalog, so entries nobody holds or
/// waits on are pruned on every `acquire`; the map only tracks keys that are
/// currently in use.
#[derive(Debug, Clone, Default)]
pub struct ProgressLocks {
    locks: Arc<Mutex<HashMap<(UserId, ModuleId), Arc<Mutex<()>>>>>,
}

impl ProgressLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the key; released when the guard drops.
    pub async fn acquire(&self, user_id: &UserId, module_id: &ModuleId) -> OwnedMutexGuard<()> {
        let key_lock = {
            let mut locks = self.locks.lock().await;
            // A count of 1 means only the map holds it: no guard, no waiter.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry((user_id.clone(), module_id.clone()))
                .or_default()
                .clone()
        };
        key_lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked_keys(&self) -> usize {
        self.locks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn key(module: &str) -> (UserId, ModuleId) {
        (UserId::new("default-user").unwrap(), module.parse().unwrap())
    }

    #[tokio::test]
    async fn same_key_waits_for_release() {
        let locks = ProgressLocks::new();
        let (user, module) = key("mod-math-1");

        let guard = locks.acquire(&user, &module).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(&user, &module));
        assert!(second.await.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(50), locks.acquire(&user, &module));
        assert!(third.await.is_ok());
    }

    #[tokio::test]
    async fn different_keys_do_not_contend() {
        let locks = ProgressLocks::new();
        let (user, math) = key("mod-math-1");
        let (_, science) = key("mod-science-1");

        let _held = locks.acquire(&user, &math).await;
        let other = tokio::time::timeout(Duration::from_millis(50), locks.acquire(&user, &science));
        assert!(other.await.is_ok());
    }

    #[tokio::test]
    async fn released_keys_are_pruned() {
        let locks = ProgressLocks::new();
        let user = UserId::new("default-user").unwrap();

        for i in 0..50 {
            let module: ModuleId = format!("mod-typo-{}", i).parse().unwrap();
            drop(locks.acquire(&user, &module).await);
        }

        let (_, math) = key("mod-math-1");
        let _held = locks.acquire(&user, &math).await;
        assert_eq!(locks.tracked_keys().await, 1);
    }

    #[tokio::test]
    async fn held_keys_survive_pruning() {
        let locks = ProgressLocks::new();
        let (user, math) = key("mod-math-1");
        let (_, science) = key("mod-science-1");

        let held = locks.acquire(&user, &math).await;
        let _other = locks.acquire(&user, &science).await;
        assert_eq!(locks.tracked_keys().await, 2);

        // The held entry is still the one that serializes access.
        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.acquire(&user, &math));
        assert!(blocked.await.is_err());
        drop(held);
    }
}
