use super::open_workspace;
use crate::{
    libs::{formatter::format_minutes, ledger, messages::Message},
    msg_info,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Task to start (or stop, if it is the one being tracked)
    id: Option<String>,
    /// Stop whatever is being tracked
    #[arg(short, long, conflicts_with = "id")]
    stop: bool,
}

pub fn cmd(args: TrackArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;

    match (args.id, args.stop) {
        (Some(id), _) => {
            workspace.toggle_tracking(&id);
        }
        (None, true) => {
            if workspace.stop_tracking().is_none() {
                msg_info!(Message::TrackingIdle);
                return Ok(());
            }
        }
        (None, false) => {
            match workspace.tracked_task() {
                Some(task) => msg_info!(Message::TrackingCurrent(
                    task.title.clone(),
                    format_minutes(ledger::elapsed_minutes(task, Utc::now()))
                )),
                None => msg_info!(Message::TrackingIdle),
            }
            return Ok(());
        }
    }

    workspace.save(&mut store)?;
    Ok(())
}
