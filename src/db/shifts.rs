use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::shift::Shift;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const SCHEMA_SHIFTS: &str = "CREATE TABLE IF NOT EXISTS shifts (
    id INTEGER NOT NULL PRIMARY KEY,
    date TEXT NOT NULL,
    shift_span TEXT NOT NULL,
    break_total TEXT NOT NULL DEFAULT '0:00',
    shift_total TEXT NOT NULL
)";

const INSERT_SHIFT: &str = "INSERT INTO shifts (date, shift_span, break_total, shift_total) VALUES (?1, ?2, ?3, ?4)";

const UPDATE_SHIFT: &str = "UPDATE shifts SET date = ?1, shift_span = ?2, break_total = ?3, shift_total = ?4 WHERE id = ?5";

const SELECT_ALL_SHIFTS: &str = "SELECT id, date, shift_span, break_total, shift_total FROM shifts ORDER BY date ASC, id ASC";

const SELECT_SHIFT_BY_ID: &str = "SELECT id, date, shift_span, break_total, shift_total FROM shifts WHERE id = ?1";

const DELETE_SHIFT: &str = "DELETE FROM shifts WHERE id = ?1";

/// Raw text columns of a `shifts` row.
struct ShiftRow {
    id: i64,
    date: String,
    shift_span: String,
    break_total: String,
    shift_total: String,
}

impl ShiftRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(ShiftRow {
            id: row.get(0)?,
            date: row.get(1)?,
            shift_span: row.get(2)?,
            break_total: row.get(3)?,
            shift_total: row.get(4)?,
        })
    }

    fn into_shift(self) -> Result<Shift> {
        Ok(Shift::from_stored(
            self.id,
            &self.date,
            &self.shift_span,
            &self.break_total,
            &self.shift_total,
        )?)
    }
}

pub struct Shifts {
    pub conn: Arc<Mutex<Connection>>,
}

impl Shifts {
    pub fn new() -> Result<Shifts> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Shifts> {
        Self::from_db(Db::open(path)?)
    }

    fn from_db(db: Db) -> Result<Shifts> {
        db.conn.execute(SCHEMA_SHIFTS, [])?;
        Ok(Shifts {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }

    /// Stores `shift` and returns it with its new id.
    pub fn insert(&self, shift: &Shift) -> Result<Shift> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(
            INSERT_SHIFT,
            params![
                shift.date_label(),
                shift.span.to_string(),
                shift.break_total.to_string(),
                shift.shift_total.to_string()
            ],
        )?;
        let id = conn_guard.last_insert_rowid();
        debug!("Inserted shift {} on {}", id, shift.date_label());

        Ok(Shift { id: Some(id), ..shift.clone() })
    }

    pub fn update(&self, shift: &Shift) -> Result<()> {
        let id = shift.id.ok_or_else(|| msg_error_anyhow!(Message::ShiftWithoutId))?;
        let conn_guard = self.conn.lock();
        let changed = conn_guard.execute(
            UPDATE_SHIFT,
            params![
                shift.date_label(),
                shift.span.to_string(),
                shift.break_total.to_string(),
                shift.shift_total.to_string(),
                id
            ],
        )?;
        if changed == 0 {
            return Err(msg_error_anyhow!(Message::ShiftNotFound(id)));
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn_guard = self.conn.lock();
        if conn_guard.execute(DELETE_SHIFT, params![id])? == 0 {
            msg_bail_anyhow!(Message::ShiftNotFound(id));
        }

        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<Shift>> {
        let conn_guard = self.conn.lock();
        let row = conn_guard
            .query_row(SELECT_SHIFT_BY_ID, params![id], ShiftRow::from_row)
            .optional()?;

        row.map(ShiftRow::into_shift).transpose()
    }

    /// Every stored shift, oldest date first.
    pub fn list_all(&self) -> Result<Vec<Shift>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_ALL_SHIFTS)?;
        let rows = stmt
            .query_map([], ShiftRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(ShiftRow::into_shift).collect()
    }
}
