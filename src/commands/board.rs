use super::open_workspace;
use crate::{
    libs::{
        board::{DropEvent, DropLocation, DropOutcome, ViewMode},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// list, kanban or calendar; prints the current board when omitted
    mode: Option<String>,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Pick-up location: the # column in list view, BUCKET:INDEX in kanban view
    from: String,
    /// Drop location; leaving it out cancels the move
    to: Option<String>,
    /// Override the current view for this move
    #[arg(long)]
    view: Option<String>,
}

fn parse_location(raw: &str) -> Result<DropLocation> {
    match raw.parse::<DropLocation>() {
        Ok(location) => Ok(location),
        Err(_) => msg_bail_anyhow!(Message::InvalidDropLocation(raw.to_string())),
    }
}

fn parse_view(raw: &str) -> Result<ViewMode> {
    match raw.parse::<ViewMode>() {
        Ok(view) => Ok(view),
        Err(_) => msg_bail_anyhow!(Message::InvalidViewMode(raw.to_string())),
    }
}

pub fn view_cmd(args: ViewArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;

    let Some(mode) = args.mode else {
        let now = Utc::now();
        match workspace.view() {
            ViewMode::Kanban => View::kanban(&workspace.kanban(), now),
            ViewMode::List | ViewMode::Calendar => {
                msg_print!(Message::TasksHeader, true);
                View::tasks(&workspace.visible_tasks(), workspace.tags(), now);
            }
        }
        return Ok(());
    };

    workspace.set_view(parse_view(&mode)?);
    workspace.save(&mut store)?;
    Ok(())
}

pub fn move_cmd(args: MoveArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;
    let saved_view = workspace.view();
    if let Some(view) = &args.view {
        workspace.set_view(parse_view(view)?);
    }

    let event = DropEvent {
        source: parse_location(&args.from)?,
        destination: args.to.as_deref().map(parse_location).transpose()?,
    };

    if workspace.apply_drop(&event) == DropOutcome::Ignored {
        msg_info!(Message::DropIgnored);
        return Ok(());
    }

    workspace.set_view(saved_view);
    workspace.save(&mut store)?;
    Ok(())
}
