use super::open_workspace;
use crate::{
    api::calendar::{sync_tasks, GoogleCalendar, MockCalendar},
    libs::{config::Config, messages::Message, notify::Level},
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Use the offline mock calendar
    #[arg(long)]
    mock: bool,
    /// Leave completed tasks out
    #[arg(long)]
    open_only: bool,
}

pub async fn cmd(args: SyncArgs) -> Result<()> {
    let Some(calendar) = Config::read()?.calendar else {
        msg_bail_anyhow!(Message::CalendarNotConfigured);
    };
    let (_, workspace) = open_workspace()?;

    let tasks = if args.open_only {
        workspace.open_calendar_tasks()
    } else {
        workspace.calendar_tasks()
    };
    if tasks.is_empty() {
        msg_info!(Message::CalendarNothingToSync);
        return Ok(());
    }

    msg_info!(Message::CalendarSyncStarted(tasks.len()));
    let report = if args.mock || calendar.mock {
        sync_tasks(&MockCalendar::new(), &tasks, &calendar.time_zone).await
    } else {
        sync_tasks(&GoogleCalendar::new(&calendar), &tasks, &calendar.time_zone).await
    };

    for failure in report.results.iter().filter(|result| !result.success) {
        workspace.announce(
            Level::Error,
            Message::CalendarSyncTaskFailed(failure.title.clone(), failure.error.clone().unwrap_or_default()),
        );
    }
    let level = if report.failed == 0 { Level::Success } else { Level::Warning };
    workspace.announce(level, Message::CalendarSyncFinished(report.synced, report.failed));
    Ok(())
}
