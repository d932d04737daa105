//! Terminal tables.

use super::analytics::TaskAnalytics;
use super::formatter::{format_due, format_minutes};
use super::ledger;
use super::messages::Message;
use super::tags::{TagRegistry, TaskTag};
use super::task::{Task, TaskStatus};
use crate::msg_print;
use chrono::{DateTime, Utc};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Rows carry the task's position in the full list, the index `move` takes.
    pub fn tasks(rows: &[(usize, &Task)], tags: &TagRegistry, now: DateTime<Utc>) {
        let mut table = Table::new();
        table.add_row(row!["#", "ID", "TITLE", "STATUS", "PRIORITY", "DUE", "TRACKED", "TAGS"]);
        for (index, task) in rows {
            table.add_row(row![
                index,
                task.id,
                task.title,
                Self::status_cell(task),
                task.priority,
                task.due_date.as_ref().map(format_due).unwrap_or_default(),
                Self::tracked_cell(task, now),
                Self::tag_names(tags.resolve(&task.tags)),
            ]);
        }
        table.printstd();
    }

    pub fn kanban(columns: &[(TaskStatus, Vec<&Task>)], now: DateTime<Utc>) {
        for (status, tasks) in columns {
            msg_print!(Message::KanbanColumnHeader(status.to_string(), tasks.len()));
            if tasks.is_empty() {
                continue;
            }
            let mut table = Table::new();
            table.add_row(row!["#", "ID", "TITLE", "PRIORITY", "TRACKED"]);
            for (index, task) in tasks.iter().enumerate() {
                table.add_row(row![index, task.id, task.title, task.priority, Self::tracked_cell(task, now)]);
            }
            table.printstd();
        }
    }

    pub fn tags(tags: &[TaskTag]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "COLOR"]);
        for tag in tags {
            table.add_row(row![tag.id, tag.name, tag.color]);
        }
        table.printstd();
    }

    pub fn analytics(stats: &TaskAnalytics) {
        let mut table = Table::new();
        table.add_row(row!["TOTAL", "COMPLETED", "IN PROGRESS", "OVERDUE", "UPCOMING", "DONE %"]);
        table.add_row(row![
            stats.total_tasks,
            stats.completed_tasks,
            stats.in_progress_tasks,
            stats.overdue_tasks,
            stats.upcoming_tasks,
            format!("{:.0}%", stats.completion_rate()),
        ]);
        table.printstd();

        let mut chart = Table::new();
        chart.add_row(row!["PRIORITY", "TASKS", ""]);
        for (label, count) in stats.priority_chart() {
            chart.add_row(row![label, count, "█".repeat(count)]);
        }
        chart.printstd();

        let mut time = Table::new();
        time.add_row(row!["ESTIMATED", "TRACKED"]);
        time.add_row(row![format_minutes(stats.estimated_minutes), format_minutes(stats.tracked_minutes)]);
        time.printstd();
    }

    pub fn preferences(entries: &[(&'static str, String)]) {
        let mut table = Table::new();
        table.add_row(row!["KEY", "VALUE"]);
        for (key, value) in entries {
            table.add_row(row![key, value]);
        }
        table.printstd();
    }

    fn status_cell(task: &Task) -> String {
        if task.is_tracking() {
            format!("{} ⏱", task.status)
        } else {
            task.status.to_string()
        }
    }

    fn tracked_cell(task: &Task, now: DateTime<Utc>) -> String {
        match &task.time_tracking {
            Some(tracking) => format!(
                "{} / {}",
                format_minutes(ledger::elapsed_minutes(task, now)),
                format_minutes(u64::from(tracking.estimated_time))
            ),
            None => String::new(),
        }
    }

    fn tag_names(tags: Vec<&TaskTag>) -> String {
        tags.iter().map(|tag| tag.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}
