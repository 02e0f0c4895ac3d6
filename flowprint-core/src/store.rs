//! Profile store
//!
//! A keyed, time-to-live cache for scored profiles. The engine itself
//! persists nothing; callers that want "submit once, fetch later" semantics
//! put the assembled profile here. The trait seam exists so a persistent
//! implementation can be added later without touching the engine.

use crate::types::Profile;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Keyed profile storage with expiry.
///
/// A `put` is atomic per key; a `get` observes either a complete prior
/// write or nothing. Entries for different keys are independent.
pub trait ProfileStore: Send + Sync {
    /// Fetch a previously stored profile, if present and not expired.
    fn get(&self, user_id: &str) -> Option<Profile>;

    /// Store a profile under a key, replacing any previous entry.
    fn put(&self, user_id: &str, profile: Profile);
}

struct StoredEntry {
    profile: Profile,
    expires_at: Instant,
}

/// In-memory TTL-keyed profile store.
pub struct MemoryProfileStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, StoredEntry>>,
}

impl MemoryProfileStore {
    /// Create a store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Create a store from a TTL in whole seconds.
    pub fn with_ttl_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, user_id: &str) -> Option<Profile> {
        let mut entries = self.entries.lock().expect("profile store lock poisoned");
        match entries.get(user_id) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.profile.clone()),
            Some(_) => {
                entries.remove(user_id);
                None
            }
            None => None,
        }
    }

    fn put(&self, user_id: &str, profile: Profile) {
        let entry = StoredEntry {
            profile,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries
            .lock()
            .expect("profile store lock poisoned")
            .insert(user_id.to_string(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn test_profile(driver: &str) -> Profile {
        Profile {
            headline: "h".to_string(),
            signature: "s".to_string(),
            driver: driver.to_string(),
            creation: "Architect".to_string(),
            growth_edge: "Rhythm".to_string(),
            category_bars: BTreeMap::new(),
            clashes: vec![],
            timestamp: Utc::now(),
            sub_style_scores: BTreeMap::new(),
            category_strengths: BTreeMap::new(),
        }
    }

    #[test]
    fn test_get_returns_stored_profile() {
        let store = MemoryProfileStore::with_ttl_secs(60);
        store.put("user-1", test_profile("Rhythm"));

        let fetched = store.get("user-1").expect("profile should be present");
        assert_eq!(fetched.driver, "Rhythm");
        assert!(store.get("user-2").is_none());
    }

    #[test]
    fn test_put_replaces_previous_entry() {
        let store = MemoryProfileStore::with_ttl_secs(60);
        store.put("user-1", test_profile("Rhythm"));
        store.put("user-1", test_profile("Tempo"));

        assert_eq!(store.get("user-1").unwrap().driver, "Tempo");
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let store = MemoryProfileStore::new(Duration::from_millis(0));
        store.put("user-1", test_profile("Rhythm"));

        std::thread::sleep(Duration::from_millis(5));
        assert!(store.get("user-1").is_none());
        // A second get stays empty; the entry was removed, not just hidden.
        assert!(store.get("user-1").is_none());
    }

    #[test]
    fn test_entries_are_independent_per_user() {
        let store = MemoryProfileStore::with_ttl_secs(60);
        store.put("a", test_profile("Rhythm"));
        store.put("b", test_profile("Tempo"));

        assert_eq!(store.get("a").unwrap().driver, "Rhythm");
        assert_eq!(store.get("b").unwrap().driver, "Tempo");
    }
}
