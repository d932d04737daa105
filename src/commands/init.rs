use super::open_workspace;
use crate::{
    libs::{config::Config, messages::Message, preferences::Preferences},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Restore default preferences without prompting
    #[arg(long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;

    if init_args.reset {
        workspace.update_preferences(Preferences::default());
        workspace.save(&mut store)?;
        msg_success!(Message::PreferencesReset);
        return Ok(());
    }

    let (config, preferences) = Config::read()?.init(workspace.preferences())?;
    config.save()?;
    workspace.update_preferences(preferences);
    workspace.save(&mut store)?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
