use crate::db::db::Db;
use crate::libs::data_storage::DataStorage;
use crate::libs::persistence::{PersistenceProvider, StorageError};
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";
const DELETE_VALUE: &str = "DELETE FROM kv WHERE key = ?1";
const SELECT_KEYS: &str = "SELECT key FROM kv ORDER BY key";

pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self { conn: Db::new()?.conn })
    }

    pub fn open(storage: &DataStorage) -> Result<Self, StorageError> {
        Ok(Self {
            conn: Db::open(storage)?.conn,
        })
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Db::in_memory()?.conn,
        })
    }

    pub fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        Ok(self.conn.execute(DELETE_VALUE, params![key])? > 0)
    }

    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare(SELECT_KEYS)?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl PersistenceProvider for KvStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}
