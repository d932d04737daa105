use super::open_workspace;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: Option<TagCommand>,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    Create {
        name: String,
        #[arg(short, long)]
        color: Option<String>,
    },
    List,
    /// Delete by id or name; tasks keep the stale reference
    Delete { tag: String },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    let (mut store, mut workspace) = open_workspace()?;

    match args.command.unwrap_or(TagCommand::List) {
        TagCommand::Create { name, color } => {
            workspace.create_tag(&name, color);
        }
        TagCommand::List => {
            let tags = workspace.tags().list();
            if tags.is_empty() {
                msg_info!(Message::NoTagsFound);
            } else {
                msg_print!(Message::TagsHeader, true);
                View::tags(tags);
            }
            return Ok(());
        }
        TagCommand::Delete { tag } => {
            workspace.delete_tag(&tag);
        }
    }

    workspace.save(&mut store)?;
    Ok(())
}
