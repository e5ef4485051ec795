use crate::hash::hash_hex;
use crate::store::{IdentityStore, StoreError};
use std::env;
use time::UtcOffset;
use tracing::{debug, warn};
use uuid::Uuid;

pub const USER_ID_KEY: &str = "pokemon-daily-user-id";
pub const FALLBACK_USER_ID: &str = "server-default";

pub struct IdentityProvider {
    store: Option<Box<dyn IdentityStore>>,
    // Captured once at construction so the fingerprint stays stable for
    // the lifetime of this provider even if the environment shifts.
    signals: Vec<String>,
}

impl IdentityProvider {
    pub fn new(store: Box<dyn IdentityStore>, signals: Vec<String>) -> Self {
        Self {
            store: Some(store),
            signals,
        }
    }

    pub fn without_store() -> Self {
        Self {
            store: None,
            signals: Vec::new(),
        }
    }

    pub fn user_id(&self) -> String {
        let Some(store) = &self.store else {
            return FALLBACK_USER_ID.to_string();
        };
        match self.stored_or_generated(store.as_ref()) {
            Ok(id) => id,
            Err(err) => {
                warn!("identity store unavailable, falling back to fingerprint: {err}");
                self.fingerprint()
            }
        }
    }

    pub fn fingerprint(&self) -> String {
        hash_hex(&self.signals.join("|"))
    }

    pub fn reset(&self) -> Result<(), StoreError> {
        match &self.store {
            Some(store) => store.remove(USER_ID_KEY),
            None => Ok(()),
        }
    }

    fn stored_or_generated(&self, store: &dyn IdentityStore) -> Result<String, StoreError> {
        if let Some(existing) = store.get(USER_ID_KEY)? {
            return Ok(existing);
        }
        let id = generate_user_id();
        store.set(USER_ID_KEY, &id)?;
        debug!(user_id = %id, "generated new user id");
        Ok(id)
    }
}

pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

// Low-entropy ambient signals, the CLI-host stand-ins for the browser's
// user agent, locale, screen size and timezone offset.
pub fn default_signals() -> Vec<String> {
    let offset_minutes = UtcOffset::current_local_offset()
        .map(|offset| offset.whole_minutes())
        .unwrap_or(0);
    vec![
        env::var("HOSTNAME").unwrap_or_default(),
        format!("{}-{}", env::consts::OS, env::consts::ARCH),
        env::var("LANG").unwrap_or_default(),
        offset_minutes.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    struct FailingStore;

    impl IdentityStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        }
    }

    // Accepts reads but rejects writes, like a full or read-only backing.
    struct ReadOnlyStore;

    impl IdentityStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
    }

    fn signals() -> Vec<String> {
        vec!["agent".into(), "en-US".into(), "1920x1080".into()]
    }

    #[test]
    fn generated_id_is_uuid_shaped() {
        let id = generate_user_id();
        assert_eq!(id.len(), 36);
        let groups: Vec<&str> = id.split('-').collect();
        let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
        assert!(groups[2].starts_with('4'), "version marker missing in {id}");
    }

    #[test]
    fn user_id_is_stable_across_calls() {
        let provider = IdentityProvider::new(Box::new(MemoryStore::new()), signals());
        let first = provider.user_id();
        let second = provider.user_id();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn user_id_persists_under_the_fixed_key() {
        let store = MemoryStore::new();
        store.set(USER_ID_KEY, "stored-before").unwrap();
        let provider = IdentityProvider::new(Box::new(store), signals());
        assert_eq!(provider.user_id(), "stored-before");
    }

    #[test]
    fn failing_store_degrades_to_fingerprint() {
        let provider = IdentityProvider::new(Box::new(FailingStore), signals());
        let id = provider.user_id();
        assert!(!id.is_empty());
        assert_eq!(id, provider.fingerprint());
        assert_eq!(id, hash_hex("agent|en-US|1920x1080"));
    }

    #[test]
    fn write_failure_also_degrades_to_fingerprint() {
        let provider = IdentityProvider::new(Box::new(ReadOnlyStore), signals());
        let id = provider.user_id();
        assert_eq!(id, provider.fingerprint());
    }

    #[test]
    fn fingerprint_is_non_empty_even_without_signals() {
        let provider = IdentityProvider::new(Box::new(FailingStore), Vec::new());
        assert_eq!(provider.user_id(), "0");
    }

    #[test]
    fn no_store_context_uses_sentinel() {
        let provider = IdentityProvider::without_store();
        assert_eq!(provider.user_id(), FALLBACK_USER_ID);
    }

    #[test]
    fn reset_forces_regeneration() {
        let provider = IdentityProvider::new(Box::new(MemoryStore::new()), signals());
        let first = provider.user_id();
        provider.reset().unwrap();
        let second = provider.user_id();
        assert_ne!(first, second);
    }

    #[test]
    fn default_signals_are_present() {
        let signals = default_signals();
        assert_eq!(signals.len(), 4);
        assert!(signals[1].contains('-'));
    }
}
