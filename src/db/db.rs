use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "shiftlog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        Self::open(&DataStorage::new().get_path(DB_FILE_NAME)?)
    }

    pub fn open(path: &Path) -> Result<Db> {
        msg_debug!(format!("Opening database at {}", path.display()));
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }
}
