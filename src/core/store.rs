use uuid::Uuid;

use super::task::{Task, TaskDraft};

/// The in-memory working set. Insertion order is display order; nothing is
/// ever persisted back to the seed document.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task built from a validated draft; returns its id.
    pub fn add(&mut self, draft: TaskDraft) -> Uuid {
        let task = Task::new(draft);
        let id = task.id;
        self.tasks.push(task);
        id
    }

    /// Replace title/description of the task with `id`, keeping its
    /// completion flag and refreshing the last-modified instant.
    /// Returns false when no task has that id.
    pub fn update(&mut self, id: Uuid, draft: TaskDraft) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = draft.title;
                task.description = draft.description;
                task.updated = chrono::Local::now().naive_local();
                true
            }
            None => false,
        }
    }

    /// Remove and return the task with `id`; later tasks keep their order.
    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Flip the completion flag in place. The last-modified instant is not
    /// touched; completion is not an edit.
    pub fn toggle_done(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }
}
