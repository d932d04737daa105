use crate::libs::task::generate_id;
use serde::{Deserialize, Serialize};

const COLORS: &[&str] = &["blue", "green", "yellow", "red", "purple", "cyan", "orange"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTag {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Tag definitions. Tasks hold tag ids, so deleting a tag here never touches
/// tasks; their stale ids simply stop resolving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<TaskTag>,
    next_color: usize,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: Vec<TaskTag>) -> Self {
        let next_color = tags.len();
        Self { tags, next_color }
    }

    pub fn list(&self) -> &[TaskTag] {
        &self.tags
    }

    pub fn get(&self, id: &str) -> Option<&TaskTag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&TaskTag> {
        self.tags.iter().find(|tag| tag.name.eq_ignore_ascii_case(name))
    }

    /// Looks a tag up by id first, then by name.
    pub fn lookup(&self, key: &str) -> Option<&TaskTag> {
        self.get(key).or_else(|| self.find_by_name(key))
    }

    /// Creates a tag, or returns the existing one with the same name.
    pub fn create(&mut self, name: &str, color: Option<String>) -> TaskTag {
        if let Some(existing) = self.find_by_name(name) {
            return existing.clone();
        }
        let tag = TaskTag {
            id: self.fresh_id(),
            name: name.trim().to_string(),
            color: color.unwrap_or_else(|| self.rotate_color()),
        };
        self.tags.push(tag.clone());
        tag
    }

    pub fn get_or_create(&mut self, names: &[String]) -> Vec<String> {
        names.iter().map(|name| self.create(name, None).id).collect()
    }

    pub fn delete(&mut self, id: &str) -> Option<TaskTag> {
        let pos = self.tags.iter().position(|tag| tag.id == id)?;
        Some(self.tags.remove(pos))
    }

    /// Resolves a task's tag ids, skipping dangling references.
    pub fn resolve<'a>(&'a self, ids: &[String]) -> Vec<&'a TaskTag> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn rotate_color(&mut self) -> String {
        let color = COLORS[self.next_color % COLORS.len()];
        self.next_color += 1;
        color.to_string()
    }
}
