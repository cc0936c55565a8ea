//! Saved-formula persistence
//!
//! SQLite-backed store for formula records, keyed by user id. The engine
//! never calls the store; callers persist the records it produces.
//!
//! Global invariants enforced:
//! - At most `MAX_FORMULAS_PER_USER` records per user, checked inside the
//!   insert transaction
//! - Ids and timestamps are store-assigned, never caller-supplied
//! - Listing order is deterministic (creation time, then id)

use crate::report::FormulationRecommendation;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-user cap on saved formulas
pub const MAX_FORMULAS_PER_USER: usize = 3;

/// A stored formula record with store-assigned id and timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SavedFormula {
    pub id: i64,
    pub user_id: String,
    pub label: String,
    /// Unix seconds, assigned at insert
    pub created_at: i64,
    pub recommendation: FormulationRecommendation,
}

/// SQLite-backed formula store
pub struct FormulaStore {
    conn: Connection,
}

impl FormulaStore {
    /// Open (or create) a store at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory: {}", parent.display()))?;
            }
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open formula store: {}", path.display()))?;
        init_schema(&conn)?;
        Ok(FormulaStore { conn })
    }

    /// Open an in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory store")?;
        init_schema(&conn)?;
        Ok(FormulaStore { conn })
    }

    /// Save a recommendation for a user, enforcing the per-user cap.
    ///
    /// Returns the stored record including the assigned id and timestamp.
    pub fn save(
        &mut self,
        user_id: &str,
        label: &str,
        recommendation: &FormulationRecommendation,
    ) -> Result<SavedFormula> {
        let tx = self.conn.transaction().context("failed to begin transaction")?;

        let count: i64 = tx
            .query_row(
                "SELECT COUNT(*) FROM formulas WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .context("failed to count saved formulas")?;
        if count as usize >= MAX_FORMULAS_PER_USER {
            anyhow::bail!(
                "user {} already has {} saved formulas (limit {})",
                user_id,
                count,
                MAX_FORMULAS_PER_USER
            );
        }

        let json = serde_json::to_string(recommendation)
            .context("failed to serialize recommendation")?;
        tx.execute(
            "INSERT INTO formulas (user_id, label, created_at, recommendation)
             VALUES (?1, ?2, strftime('%s', 'now'), ?3)",
            params![user_id, label, json],
        )
        .context("failed to insert formula")?;

        let id = tx.last_insert_rowid();
        let created_at: i64 = tx
            .query_row(
                "SELECT created_at FROM formulas WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .context("failed to read assigned timestamp")?;

        tx.commit().context("failed to commit formula insert")?;

        Ok(SavedFormula {
            id,
            user_id: user_id.to_string(),
            label: label.to_string(),
            created_at,
            recommendation: recommendation.clone(),
        })
    }

    /// List a user's saved formulas, oldest first
    pub fn list(&self, user_id: &str) -> Result<Vec<SavedFormula>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, label, created_at, recommendation
                 FROM formulas WHERE user_id = ?1
                 ORDER BY created_at ASC, id ASC",
            )
            .context("failed to prepare list query")?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .context("failed to query saved formulas")?;

        let mut formulas = Vec::new();
        for row in rows {
            let (id, label, created_at, json) = row.context("failed to read formula row")?;
            let recommendation: FormulationRecommendation = serde_json::from_str(&json)
                .with_context(|| format!("failed to parse stored formula {}", id))?;
            formulas.push(SavedFormula {
                id,
                user_id: user_id.to_string(),
                label,
                created_at,
                recommendation,
            });
        }
        Ok(formulas)
    }

    /// Delete a user's saved formula by id.
    ///
    /// Returns false when no matching record exists for that user.
    pub fn delete(&mut self, user_id: &str, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM formulas WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )
            .context("failed to delete formula")?;
        Ok(affected > 0)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS formulas (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             user_id TEXT NOT NULL,
             label TEXT NOT NULL,
             created_at INTEGER NOT NULL,
             recommendation TEXT NOT NULL
         );
         CREATE INDEX IF NOT EXISTS idx_formulas_user ON formulas (user_id);",
    )
    .context("failed to initialize formula store schema")
}
