use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::persistence::StorageError;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskminder.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db, StorageError> {
        Self::open(&DataStorage::new())
    }

    pub fn open(storage: &DataStorage) -> Result<Db, StorageError> {
        let db_file_path = storage.get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db, StorageError> {
        let mut conn = Connection::open_in_memory()?;
        migrations::init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
