//! Persistence trait for the whole-library state blob.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result::AppResult;

/// Key-value persistence backend holding a single state document.
///
/// The state is always read and written whole; there are no partial
/// writes. Implementations live in `promptdeck-storage`.
#[async_trait]
pub trait StateStore<S>: Send + Sync + std::fmt::Debug + 'static
where
    S: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Return the provider type name (e.g., "file", "memory").
    fn provider_type(&self) -> &str;

    /// Read the stored state. `None` when nothing has been stored yet.
    async fn get(&self) -> AppResult<Option<S>>;

    /// Replace the stored state.
    async fn set(&self, state: &S) -> AppResult<()>;
}
