pub mod board;
pub mod init;
pub mod pomodoro;
pub mod prefs;
pub mod stats;
pub mod sync;
pub mod tag;
pub mod task;
pub mod track;

use crate::db::kv::KvStore;
use crate::libs::notify::ConsoleSink;
use crate::libs::workspace::Workspace;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure preferences and integrations")]
    Init(init::InitArgs),
    #[command(about = "Show or change preferences")]
    Prefs(prefs::PrefsArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage tags")]
    Tag(tag::TagArgs),
    #[command(about = "Start, stop or switch time tracking")]
    Track(track::TrackArgs),
    #[command(about = "Show the board or switch between list, kanban and calendar")]
    View(board::ViewArgs),
    #[command(about = "Move a task the way a drag and drop would")]
    Move(board::MoveArgs),
    #[command(about = "Show task analytics")]
    Stats,
    #[command(about = "Push tasks with a due date to the calendar")]
    Sync(sync::SyncArgs),
    #[command(about = "Run a pomodoro timer")]
    Pomodoro(pomodoro::PomodoroArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Prefs(args) => prefs::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Tag(args) => tag::cmd(args),
            Commands::Track(args) => track::cmd(args),
            Commands::View(args) => board::view_cmd(args),
            Commands::Move(args) => board::move_cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Sync(args) => sync::cmd(args).await,
            Commands::Pomodoro(args) => pomodoro::cmd(args).await,
        }
    }
}

/// Loads the saved workspace from the default database.
pub(crate) fn open_workspace() -> Result<(KvStore, Workspace)> {
    let store = KvStore::new()?;
    let workspace = Workspace::load(&store, ConsoleSink)?;
    Ok((store, workspace))
}
