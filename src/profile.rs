//! Local persistence port for adopter-side flags (favorites, the per-pet
//! "already applied" marker). The platform front end keeps these in browser
//! storage; here the same contract is an injected key-value trait so the
//! service and tests can share an in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalog::domain::PetId;

/// Synchronous string storage keyed by stable string ids. No expiry
/// semantics.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// In-memory store backing tests and the demo server.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }
}

/// Adopter-scoped flags layered over the key-value port.
#[derive(Debug)]
pub struct AdopterLedger<S> {
    store: Arc<S>,
}

impl<S> Clone for AdopterLedger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> AdopterLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn is_favorite(&self, pet: &PetId) -> bool {
        flag_is_set(self.store.get(&favorite_key(pet)))
    }

    /// Flip the favorite flag, returning the new state.
    pub fn toggle_favorite(&self, pet: &PetId) -> bool {
        let next = !self.is_favorite(pet);
        self.store.set(&favorite_key(pet), next.to_string());
        next
    }

    pub fn mark_applied(&self, pet: &PetId) {
        self.store.set(&applied_key(pet), true.to_string());
    }

    pub fn has_applied(&self, pet: &PetId) -> bool {
        flag_is_set(self.store.get(&applied_key(pet)))
    }
}

fn favorite_key(pet: &PetId) -> String {
    format!("favorite:{}", pet.0)
}

fn applied_key(pet: &PetId) -> String {
    format!("applied:{}", pet.0)
}

fn flag_is_set(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> AdopterLedger<MemoryStore> {
        AdopterLedger::new(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn favorites_toggle_on_and_off() {
        let ledger = ledger();
        let pet = PetId("pet-001".to_string());

        assert!(!ledger.is_favorite(&pet));
        assert!(ledger.toggle_favorite(&pet));
        assert!(ledger.is_favorite(&pet));
        assert!(!ledger.toggle_favorite(&pet));
        assert!(!ledger.is_favorite(&pet));
    }

    #[test]
    fn applied_flag_is_scoped_per_pet() {
        let ledger = ledger();
        let luna = PetId("pet-001".to_string());
        let milo = PetId("pet-002".to_string());

        ledger.mark_applied(&luna);
        assert!(ledger.has_applied(&luna));
        assert!(!ledger.has_applied(&milo));
    }

    #[test]
    fn ledgers_sharing_a_store_see_the_same_flags() {
        let store = Arc::new(MemoryStore::default());
        let first = AdopterLedger::new(Arc::clone(&store));
        let second = AdopterLedger::new(store);

        let pet = PetId("pet-003".to_string());
        first.toggle_favorite(&pet);
        assert!(second.is_favorite(&pet));
    }
}
