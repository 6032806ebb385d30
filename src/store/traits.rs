//! `Database` trait — the flat key-value store the app persists into.

use async_trait::async_trait;

use crate::error::DatabaseError;

/// Settings store: JSON values keyed by `(user_id, key)`.
#[async_trait]
pub trait Database: Send + Sync {
    /// Read a setting. `None` if it was never written.
    async fn get_setting(
        &self,
        user_id: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, DatabaseError>;

    /// Write a setting, replacing any previous value.
    async fn set_setting(
        &self,
        user_id: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), DatabaseError>;
}
