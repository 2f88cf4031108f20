//! SQLite persistence for contact-form leads.
//!
//! RULE: Only store.rs talks to the database.
//! Configurator selections are never stored here.

use crate::{
    contact::ContactRequest,
    error::DealerResult,
    types::LeadId,
};
use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

pub struct LeadStore {
    conn: Connection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub lead_id:     LeadId,
    /// RFC 3339, UTC, millisecond precision.
    pub received_at: String,
    pub name:        String,
    pub email:       String,
    pub message:     String,
    pub delivered:   bool,
    pub error:       Option<String>,
}

impl LeadRecord {
    pub fn new(request: &ContactRequest, delivered: bool, error: Option<String>) -> Self {
        Self {
            lead_id:     uuid::Uuid::new_v4().to_string(),
            received_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            name:        request.name.trim().to_string(),
            email:       request.email.trim().to_string(),
            message:     request.message.trim().to_string(),
            delivered,
            error,
        }
    }
}

impl LeadStore {
    /// Open (or create) the lead database at `path`.
    pub fn open(path: &str) -> DealerResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DealerResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> DealerResult<()> {
        self.conn.execute_batch(include_str!("../../migrations/001_leads.sql"))?;
        Ok(())
    }

    pub fn record_lead(&self, lead: &LeadRecord) -> DealerResult<()> {
        self.conn.execute(
            "INSERT INTO lead (lead_id, received_at, name, email, message, delivered, error)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                lead.lead_id,
                lead.received_at,
                lead.name,
                lead.email,
                lead.message,
                lead.delivered,
                lead.error,
            ],
        )?;
        log::debug!("store: recorded lead {} delivered={}", lead.lead_id, lead.delivered);
        Ok(())
    }

    pub fn lead_count(&self) -> DealerResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM lead", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Most recent first.
    pub fn recent_leads(&self, limit: usize) -> DealerResult<Vec<LeadRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT lead_id, received_at, name, email, message, delivered, error
             FROM lead
             ORDER BY received_at DESC, rowid DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(LeadRecord {
                lead_id:     row.get(0)?,
                received_at: row.get(1)?,
                name:        row.get(2)?,
                email:       row.get(3)?,
                message:     row.get(4)?,
                delivered:   row.get(5)?,
                error:       row.get(6)?,
            })
        })?;
        let leads = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(leads)
    }
}
