//! Mutex-guarded user sequence.

use std::sync::{Mutex, MutexGuard};

use crate::filter::MatchRule;
use crate::observability::metrics;
use crate::store::user::User;

/// A thread-safe, ordered collection of user records.
///
/// Shared between handlers as `Arc<UserStore>`.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Create a store holding `seed` in the given order.
    pub fn new(seed: Vec<User>) -> Self {
        metrics::record_store_size(seed.len());
        Self {
            users: Mutex::new(seed),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().expect("user store mutex poisoned")
    }

    /// Add a record at the end. No deduplication.
    pub fn append(&self, user: User) {
        let mut users = self.lock();
        users.push(user);
        metrics::record_store_size(users.len());
    }

    /// Snapshot of every record in current order.
    pub fn all(&self) -> Vec<User> {
        self.lock().clone()
    }

    /// First record whose email equals `email` exactly.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.lock().iter().find(|u| u.email == email).cloned()
    }

    /// Remove the first record whose email equals `email` exactly.
    ///
    /// Returns whether a record was removed along with the remaining records.
    pub fn remove_by_email(&self, email: &str) -> (bool, Vec<User>) {
        let mut users = self.lock();
        let removed = match users.iter().position(|u| u.email == email) {
            Some(index) => {
                users.remove(index);
                metrics::record_store_size(users.len());
                true
            }
            None => false,
        };
        (removed, users.clone())
    }

    /// Every record whose email matches `rule`, in store order.
    pub fn filter_by_rule(&self, rule: &MatchRule) -> Vec<User> {
        self.lock()
            .iter()
            .filter(|u| rule.matches(&u.email))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
