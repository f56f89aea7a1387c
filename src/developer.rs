//! Developer API Settings
//!
//! API key and webhook configuration, persisted in local storage.
//! A webhook save validates first and writes nothing on failure. If the
//! secret write fails, the previous URL is put back.

use crate::config::{API_KEY_KEY, WEBHOOK_SECRET_KEY, WEBHOOK_URL_KEY};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("Webhook URL must use HTTPS")]
    InsecureScheme,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Saved webhook endpoint and signing secret
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebhookConfig {
    pub url: String,
    pub secret: String,
}

/// Everything the developer page loads on mount
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeveloperSettings {
    pub api_key: Option<String>,
    pub webhook: WebhookConfig,
}

// ========================
// Token Generation
// ========================

/// Source of uniform values in [0, 1)
pub trait TokenSource {
    fn next_fraction(&mut self) -> f64;
}

/// `Math.random()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl TokenSource for JsRandom {
    fn next_fraction(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

const FRAGMENT_LEN: usize = 13;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Base-36 digits of one random fraction
fn fragment(source: &mut impl TokenSource) -> String {
    let mut value = source.next_fraction().clamp(0.0, 1.0 - f64::EPSILON);
    let mut out = String::with_capacity(FRAGMENT_LEN);
    for _ in 0..FRAGMENT_LEN {
        value *= 36.0;
        let digit = value.floor();
        out.push(BASE36[digit as usize] as char);
        value -= digit;
    }
    out
}

/// `api_<13 base36>_<13 base36>`
pub fn generate_api_key(source: &mut impl TokenSource) -> String {
    let first = fragment(source);
    let second = fragment(source);
    format!("api_{}_{}", first, second)
}

/// `whsec_<13 base36>`
pub fn generate_webhook_secret(source: &mut impl TokenSource) -> String {
    format!("whsec_{}", fragment(source))
}

pub fn validate_webhook_url(url: &str) -> Result<(), WebhookError> {
    if url.starts_with("https://") {
        Ok(())
    } else {
        Err(WebhookError::InsecureScheme)
    }
}

// ========================
// Persistence
// ========================

#[derive(Debug, Clone, Copy)]
pub struct DeveloperStore<S> {
    store: S,
}

impl<S: KeyValueStore> DeveloperStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<DeveloperSettings, StorageError> {
        Ok(DeveloperSettings {
            api_key: self.store.get(API_KEY_KEY)?,
            webhook: WebhookConfig {
                url: self.store.get(WEBHOOK_URL_KEY)?.unwrap_or_default(),
                secret: self.store.get(WEBHOOK_SECRET_KEY)?.unwrap_or_default(),
            },
        })
    }

    /// Replace the API key with a fresh one
    pub fn regenerate_api_key(&self, source: &mut impl TokenSource) -> Result<String, StorageError> {
        let key = generate_api_key(source);
        self.store.set(API_KEY_KEY, &key)?;
        Ok(key)
    }

    /// Validate and persist; an empty secret is replaced by a generated one
    pub fn save_webhook(
        &self,
        url: &str,
        secret: &str,
        source: &mut impl TokenSource,
    ) -> Result<WebhookConfig, WebhookError> {
        validate_webhook_url(url)?;

        let secret = if secret.is_empty() {
            generate_webhook_secret(source)
        } else {
            secret.to_string()
        };
        let previous_url = self.store.get(WEBHOOK_URL_KEY)?;
        self.store.set(WEBHOOK_URL_KEY, url)?;
        if let Err(e) = self.store.set(WEBHOOK_SECRET_KEY, &secret) {
            // Put the old URL back so the pair never mixes two configs
            let restored = match previous_url {
                Some(prev) => self.store.set(WEBHOOK_URL_KEY, &prev),
                None => self.store.remove(WEBHOOK_URL_KEY),
            };
            if let Err(re) = restored {
                log::error!("[DEV] Failed to restore webhook URL: {}", re);
            }
            return Err(e.into());
        }
        Ok(WebhookConfig { url: url.to_string(), secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Cycles through fixed fractions
    struct Fixed(Vec<f64>, usize);

    impl TokenSource for Fixed {
        fn next_fraction(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    fn is_base36(s: &str) -> bool {
        s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    }

    #[test]
    fn test_api_key_format() {
        let key = generate_api_key(&mut Fixed(vec![0.123456, 0.987654], 0));
        let parts: Vec<&str> = key.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "api");
        assert_eq!(parts[1].len(), 13);
        assert_eq!(parts[2].len(), 13);
        assert!(is_base36(parts[1]) && is_base36(parts[2]));
        assert_ne!(parts[1], parts[2]);
    }

    #[test]
    fn test_fragment_digits() {
        // 0.5 * 36 = 18 -> 'i', nothing left after that
        assert_eq!(fragment(&mut Fixed(vec![0.5], 0)), "i000000000000");
        assert_eq!(fragment(&mut Fixed(vec![0.0], 0)), "0000000000000");
        // Upper bound never indexes past 'z'
        assert!(is_base36(&fragment(&mut Fixed(vec![1.0], 0))));
    }

    #[test]
    fn test_secret_format() {
        let secret = generate_webhook_secret(&mut Fixed(vec![0.25], 0));
        assert!(secret.starts_with("whsec_"));
        assert_eq!(secret.len(), "whsec_".len() + 13);
    }

    #[test]
    fn test_insecure_webhook_leaves_saved_config() {
        let store = MemoryStorage::new();
        let dev = DeveloperStore::new(&store);
        let mut rng = Fixed(vec![0.3], 0);

        let saved = dev.save_webhook("https://example.com/hook", "whsec_keep", &mut rng).unwrap();

        let err = dev.save_webhook("http://example.com/hook", "other", &mut rng).unwrap_err();
        assert_eq!(err, WebhookError::InsecureScheme);
        assert_eq!(err.to_string(), "Webhook URL must use HTTPS");

        let loaded = dev.load().unwrap();
        assert_eq!(loaded.webhook, saved);
    }

    #[test]
    fn test_insecure_webhook_on_empty_store_writes_nothing() {
        let store = MemoryStorage::new();
        let dev = DeveloperStore::new(&store);
        assert!(dev.save_webhook("ftp://x", "", &mut Fixed(vec![0.1], 0)).is_err());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_empty_secret_is_generated() {
        let store = MemoryStorage::new();
        let dev = DeveloperStore::new(&store);
        let saved = dev.save_webhook("https://example.com", "", &mut Fixed(vec![0.7], 0)).unwrap();
        assert!(saved.secret.starts_with("whsec_"));
        assert_eq!(store.get(WEBHOOK_SECRET_KEY).unwrap(), Some(saved.secret));
    }

    /// Delegates to memory but refuses writes to one key
    struct RejectKey<'a> {
        inner: &'a MemoryStorage,
        key: &'static str,
    }

    impl KeyValueStore for RejectKey<'_> {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Operation {
                    key: key.to_string(),
                    message: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_secret_write_restores_previous_url() {
        let memory = MemoryStorage::new();
        let mut rng = Fixed(vec![0.3], 0);
        let saved = DeveloperStore::new(&memory)
            .save_webhook("https://old.example.com/hook", "whsec_old", &mut rng)
            .unwrap();

        let failing = RejectKey { inner: &memory, key: WEBHOOK_SECRET_KEY };
        let err = DeveloperStore::new(&failing)
            .save_webhook("https://new.example.com/hook", "whsec_new", &mut rng)
            .unwrap_err();
        assert!(matches!(err, WebhookError::Storage(_)));

        let loaded = DeveloperStore::new(&memory).load().unwrap();
        assert_eq!(loaded.webhook, saved);
    }

    #[test]
    fn test_failed_first_save_leaves_no_url() {
        let memory = MemoryStorage::new();
        let failing = RejectKey { inner: &memory, key: WEBHOOK_SECRET_KEY };
        let result = DeveloperStore::new(&failing)
            .save_webhook("https://example.com/hook", "", &mut Fixed(vec![0.5], 0));
        assert!(matches!(result, Err(WebhookError::Storage(_))));
        assert_eq!(memory.get(WEBHOOK_URL_KEY).unwrap(), None);
        assert_eq!(memory.len(), 0);
    }

    #[test]
    fn test_api_key_persists() {
        let store = MemoryStorage::new();
        let dev = DeveloperStore::new(&store);
        assert_eq!(dev.load().unwrap().api_key, None);

        let key = dev.regenerate_api_key(&mut Fixed(vec![0.42, 0.17], 0)).unwrap();
        assert_eq!(dev.load().unwrap().api_key, Some(key));
    }
}
