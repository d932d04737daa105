pub mod analytics;
pub mod board;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod ledger;
pub mod messages;
pub mod notify;
pub mod persistence;
pub mod pomodoro;
pub mod preferences;
pub mod store;
pub mod tags;
pub mod task;
pub mod tracking;
pub mod view;
pub mod workspace;
