use super::open_workspace;
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (_, workspace) = open_workspace()?;
    msg_print!(Message::AnalyticsHeader, true);
    View::analytics(&workspace.analytics());
    Ok(())
}
