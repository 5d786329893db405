use anyhow::Result;
use async_trait::async_trait;

/// Local key-value storage for small user preferences
///
/// Implementations must treat a missing key as `Ok(None)` rather than an
/// error; errors are reserved for storage that could not be reached.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get_string(&self, key: &str) -> Result<Option<String>>;
    async fn set_string(&self, key: &str, value: &str) -> Result<()>;
}
