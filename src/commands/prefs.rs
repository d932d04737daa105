use super::open_workspace;
use crate::{
    libs::{
        messages::Message,
        preferences::{PreferenceError, Preferences},
        view::View,
    },
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    command: Option<PrefsCommand>,
}

#[derive(Debug, Subcommand)]
enum PrefsCommand {
    /// Print every preference
    Show,
    /// Change one preference, e.g. `focus_mode.pomodoro_duration 50`
    Set { key: String, value: String },
    /// Restore defaults
    Reset,
}

pub fn cmd(args: PrefsArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;

    match args.command.unwrap_or(PrefsCommand::Show) {
        PrefsCommand::Show => {
            msg_print!(Message::PreferencesHeader, true);
            View::preferences(&workspace.preferences().entries());
            return Ok(());
        }
        PrefsCommand::Set { key, value } => {
            let mut preferences = workspace.preferences().clone();
            if let Err(error) = preferences.set(&key, &value) {
                match error {
                    PreferenceError::Unknown(key) => msg_bail_anyhow!(Message::UnknownPreference(key)),
                    PreferenceError::InvalidValue { key, value } => {
                        msg_bail_anyhow!(Message::InvalidPreferenceValue(key, value))
                    }
                }
            }
            workspace.update_preferences(preferences);
        }
        PrefsCommand::Reset => workspace.update_preferences(Preferences::default()),
    }

    workspace.save(&mut store)?;
    Ok(())
}
