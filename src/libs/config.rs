//! Integration settings stored in `config.json`.
//!
//! User preferences live in the key/value store (see
//! [`Preferences`](crate::libs::preferences::Preferences)); this file only
//! carries connection details for external services. `taskminder init` walks
//! through both.

use super::data_storage::DataStorage;
use crate::api::calendar::CalendarConfig;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_in(&DataStorage::new())
    }

    pub fn read_in(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_in(&DataStorage::new())
    }

    pub fn save_in(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Setup wizard. Returns the updated config and preferences; the caller
    /// decides where to persist them.
    pub fn init(&self, preferences: &Preferences) -> Result<(Config, Preferences)> {
        let mut config = self.clone();
        let mut preferences = preferences.clone();

        let modules = vec![
            CalendarConfig::module(),
            ConfigModule {
                key: "preferences".to_string(),
                name: Message::ConfigModulePreferences.to_string(),
            },
            ConfigModule {
                key: "focus".to_string(),
                name: Message::ConfigModuleFocusMode.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectModulesToConfigure.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "calendar" => config.calendar = Some(CalendarConfig::init(&config.calendar)?),
                "preferences" => preferences = preferences.init_general()?,
                "focus" => preferences = preferences.init_focus_mode()?,
                _ => {}
            }
        }

        Ok((config, preferences))
    }
}
