use std::collections::HashMap;
use std::sync::Mutex;
use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::base::PreferenceStore;

/// Process-local preference store for tests and hosts without a disk
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| anyhow!("Preference map poisoned"))?;
        Ok(values.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| anyhow!("Preference map poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_entry() -> Result<()> {
        let store = MemoryPreferenceStore::with_entry("theme_mode", "dark");
        assert_eq!(store.get_string("theme_mode").await?, Some("dark".to_string()));
        assert_eq!(store.get_string("other").await?, None);
        Ok(())
    }
}
