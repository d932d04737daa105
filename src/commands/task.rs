use super::open_workspace;
use crate::{
    libs::{
        board::ViewMode,
        formatter::parse_due_date,
        messages::Message,
        task::{Recurrence, TaskDraft, TaskPatch, TaskPriority, TaskStatus},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a task
    Add {
        title: String,
        #[arg(short, long)]
        description: Option<String>,
        /// YYYY-MM-DD or "YYYY-MM-DD HH:MM"
        #[arg(long)]
        due: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Estimated minutes
        #[arg(short, long)]
        estimate: Option<u32>,
        /// e.g. weekly or 2:weekly
        #[arg(short, long)]
        recurrence: Option<String>,
    },
    /// List tasks in the current view
    List {
        /// Include completed tasks regardless of preferences
        #[arg(short, long)]
        all: bool,
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Toggle completion
    Done { id: String },
    /// Set the status directly
    Status { id: String, status: String },
    /// Change task details
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
        #[arg(short, long)]
        estimate: Option<u32>,
        #[arg(short, long)]
        recurrence: Option<String>,
    },
    /// Delete a task
    Delete {
        id: String,
        #[arg(short, long)]
        force: bool,
    },
    /// Add a tag, creating it if needed
    Tag { id: String, tag: String },
    /// Remove a tag
    Untag { id: String, tag: String },
}

fn parse_due(input: Option<String>) -> Result<Option<DateTime<Utc>>> {
    input
        .map(|raw| parse_due_date(&raw).ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(raw))))
        .transpose()
}

fn parse_priority(input: Option<String>) -> Result<Option<TaskPriority>> {
    input
        .map(|raw| raw.parse::<TaskPriority>().map_err(|_| msg_error_anyhow!(Message::InvalidPriority(raw))))
        .transpose()
}

fn parse_recurrence(input: Option<String>) -> Result<Option<Recurrence>> {
    input
        .map(|raw| raw.parse::<Recurrence>().map_err(|e| msg_error_anyhow!(e)))
        .transpose()
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;

    match args.command {
        TaskCommand::Add {
            title,
            description,
            due,
            priority,
            tags,
            estimate,
            recurrence,
        } => {
            let mut draft = TaskDraft::new(title);
            draft.description = description.unwrap_or_default();
            draft.due_date = parse_due(due)?;
            draft.priority = parse_priority(priority)?;
            draft.recurrence = parse_recurrence(recurrence)?;
            draft.estimated_time = estimate;
            let task = workspace.create_task(draft);
            for tag in tags {
                workspace.tag_task(&task.id, &tag);
            }
        }
        TaskCommand::List { all, status } => {
            let status = match status {
                Some(raw) => match raw.parse::<TaskStatus>() {
                    Ok(status) => Some(status),
                    Err(_) => msg_bail_anyhow!(Message::InvalidStatus(raw)),
                },
                None => None,
            };
            let now = Utc::now();
            if workspace.view() == ViewMode::Kanban && status.is_none() {
                View::kanban(&workspace.kanban(), now);
                return Ok(());
            }
            let tasks: Vec<_> = if all {
                workspace.tasks().iter().enumerate().collect()
            } else {
                workspace.visible_tasks()
            };
            let tasks: Vec<_> = tasks
                .into_iter()
                .filter(|(_, task)| status.map_or(true, |s| task.status == s))
                .collect();
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks, workspace.tags(), now);
            return Ok(());
        }
        TaskCommand::Done { id } => {
            workspace.toggle_complete(&id);
        }
        TaskCommand::Status { id, status: raw } => {
            let Ok(status) = raw.parse::<TaskStatus>() else {
                msg_bail_anyhow!(Message::InvalidStatus(raw));
            };
            workspace.set_status(&id, status);
        }
        TaskCommand::Edit {
            id,
            title,
            description,
            due,
            priority,
            estimate,
            recurrence,
        } => {
            let patch = TaskPatch {
                title,
                description,
                due_date: parse_due(due)?,
                priority: parse_priority(priority)?,
                recurrence: parse_recurrence(recurrence)?,
                estimated_time: estimate,
            };
            workspace.edit_task(&id, patch);
        }
        TaskCommand::Delete { id, force } => {
            let Some(task) = workspace.task(&id) else {
                msg_bail_anyhow!(Message::TaskNotFound(id));
            };
            if !force
                && !Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                    .default(false)
                    .interact()?
            {
                return Ok(());
            }
            workspace.delete_task(&id);
        }
        TaskCommand::Tag { id, tag } => {
            workspace.tag_task(&id, &tag);
        }
        TaskCommand::Untag { id, tag } => {
            workspace.untag_task(&id, &tag);
        }
    }

    workspace.save(&mut store)?;
    Ok(())
}
