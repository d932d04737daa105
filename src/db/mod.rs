//! SQLite-backed persistence.
//!
//! The database holds a single key/value table; everything the application
//! saves is a JSON document under a fixed key (see
//! [`PersistenceProvider`](crate::libs::persistence::PersistenceProvider)).

/// Connection setup.
pub mod db;

/// Key/value table implementing the persistence provider.
pub mod kv;

/// Versioned schema changes.
pub mod migrations;
