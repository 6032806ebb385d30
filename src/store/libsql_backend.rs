//! libSQL implementation of [`Database`], over a single `settings` table.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, params};
use tracing::info;

use crate::error::DatabaseError;
use crate::store::traits::Database;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS settings (
    user_id TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (user_id, key)
)";

pub struct LibSqlBackend {
    // The connection is only valid while its database handle lives
    _db: libsql::Database,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open the settings file at `path`, creating the file and its directory
    /// when missing.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DatabaseError::Open(format!("{}: {e}", parent.display())))?;
        }
        let backend = Self::open(path).await?;
        info!(path = %path.display(), "Settings database opened");
        Ok(backend)
    }

    /// A throwaway store that lives as long as the backend.
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        Self::open(":memory:").await
    }

    async fn open(target: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(target)
            .build()
            .await
            .map_err(|e| DatabaseError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| DatabaseError::Open(e.to_string()))?;
        conn.execute(SCHEMA, ())
            .await
            .map_err(|e| DatabaseError::Schema(e.to_string()))?;
        Ok(Self { _db: db, conn })
    }
}

fn query_error(op: &'static str) -> impl Fn(libsql::Error) -> DatabaseError {
    move |e| DatabaseError::Query(format!("{op}: {e}"))
}

#[async_trait]
impl Database for LibSqlBackend {
    async fn get_setting(
        &self,
        user_id: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT value FROM settings WHERE user_id = ?1 AND key = ?2",
                params![user_id, key],
            )
            .await
            .map_err(query_error("get_setting"))?;

        let Some(row) = rows.next().await.map_err(query_error("get_setting"))? else {
            return Ok(None);
        };
        let raw: String = row.get(0).map_err(query_error("get_setting"))?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| DatabaseError::Serialization(e.to_string()))
    }

    async fn set_setting(
        &self,
        user_id: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), DatabaseError> {
        let raw =
            serde_json::to_string(value).map_err(|e| DatabaseError::Serialization(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO settings (user_id, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (user_id, key)
                 DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![user_id, key, raw, Utc::now().to_rfc3339()],
            )
            .await
            .map_err(query_error("set_setting"))?;
        Ok(())
    }
}
