// In-memory reactive store backing the task-list UI

use crate::filter::FilterMode;
use crate::task::Task;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether form submission creates a new task or updates an existing one.
///
/// Shared by the form and list views: the list enters edit mode via a task's
/// Edit affordance, the form leaves it again on submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Create,
    Edit,
}

/// One observed state change, delivered to registered watchers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    Created(u64),
    Renamed(u64),
    Toggled(u64),
    /// Completed tasks were cleared; carries the number removed.
    Cleared(usize),
    FilterSet(FilterMode),
    ModeSet(EditMode),
    TargetSet(Option<u64>),
}

/// Lossless copy of every state field, for on-screen debug inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub tasks: Vec<Task>,
    pub next_id: u64,
    pub filter_mode: FilterMode,
    pub edit_mode: EditMode,
    pub target_id: Option<u64>,
}

/// Canonical task list plus the UI-mode flags, with derived views recomputed
/// from canonical state on every read.
///
/// Constructed once per session and passed by reference to the rendering
/// collaborator. Every operation is total: lookups by an absent id degrade to
/// silent no-ops rather than errors. `target_id` is `Some` exactly while
/// `edit_mode` is `Edit`; `clear_completed` re-establishes this when it
/// removes the task being edited.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    filter_mode: FilterMode,
    edit_mode: EditMode,
    target_id: Option<u64>,
    watchers: Vec<Box<dyn FnMut(Change)>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
            filter_mode: FilterMode::All,
            edit_mode: EditMode::Create,
            target_id: None,
            watchers: Vec::new(),
        }
    }

    // ========================================================================
    // Mutation operations
    // ========================================================================

    /// Append a new task and return its id.
    ///
    /// Ids are assigned strictly increasing from 0 and never reused, even
    /// after tasks are cleared. Empty names are accepted.
    pub fn create_task(&mut self, name: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            name: name.to_string(),
            completed: false,
        });
        debug!(id, name, "created task");
        self.emit(Change::Created(id));
        id
    }

    /// Rename the task the edit target points at.
    ///
    /// Silent no-op when no target is set or no task has the target id.
    /// Leaves `edit_mode` and `target_id` untouched; resetting back to create
    /// mode is the submitter's job (see [`TaskStore::submit`]).
    pub fn update_task(&mut self, name: &str) {
        let target = match self.target_id {
            Some(id) => id,
            None => return,
        };

        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == target) {
            task.name = name.to_string();
            debug!(id = target, name, "renamed task");
            self.emit(Change::Renamed(target));
        }
    }

    /// Flip the completion flag of the task with the given id, if present.
    pub fn toggle_task(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            debug!(id, completed = task.completed, "toggled task");
            self.emit(Change::Toggled(id));
        }
    }

    /// Remove every completed task, preserving the relative order of the
    /// remainder. Returns the number of tasks removed.
    ///
    /// When the current edit target is among the removed tasks, the store
    /// falls back to create mode so `target_id` cannot dangle.
    pub fn clear_completed(&mut self) -> usize {
        let target_removed = self
            .target_id
            .map(|id| self.tasks.iter().any(|t| t.id == id && t.completed))
            .unwrap_or(false);

        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        debug!(removed, remaining = self.tasks.len(), "cleared completed tasks");
        self.emit(Change::Cleared(removed));

        if target_removed {
            self.set_edit_mode(EditMode::Create);
            self.set_target_id(None);
        }

        removed
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        debug!(%mode, "set filter mode");
        self.emit(Change::FilterSet(mode));
    }

    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.edit_mode = mode;
        self.emit(Change::ModeSet(mode));
    }

    /// Set the edit target. The id is not checked against the task list.
    pub fn set_target_id(&mut self, id: Option<u64>) {
        self.target_id = id;
        self.emit(Change::TargetSet(id));
    }

    /// Form submission: create a task in create mode; in edit mode, rename
    /// the target and reset back to create mode with no target.
    pub fn submit(&mut self, name: &str) {
        match self.edit_mode {
            EditMode::Create => {
                self.create_task(name);
            }
            EditMode::Edit => {
                self.update_task(name);
                self.set_edit_mode(EditMode::Create);
                self.set_target_id(None);
            }
        }
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Tasks visible under the current filter mode, in canonical order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter_mode.matches(t))
            .collect()
    }

    /// Count of completed tasks, independent of the filter mode.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Label for the form's submit control.
    pub fn submit_label(&self) -> &'static str {
        match self.edit_mode {
            EditMode::Create => "Create Task",
            EditMode::Edit => "Update Task",
        }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// The canonical task list, insertion-ordered.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn target_id(&self) -> Option<u64> {
        self.target_id
    }

    // ========================================================================
    // Change notification & snapshot
    // ========================================================================

    /// Register a watcher invoked synchronously after every state change, on
    /// the mutating thread, before the operation returns.
    pub fn watch(&mut self, watcher: impl FnMut(Change) + 'static) {
        self.watchers.push(Box::new(watcher));
    }

    fn emit(&mut self, change: Change) {
        for watcher in &mut self.watchers {
            watcher(change);
        }
    }

    /// Owned copy of all state fields.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
            next_id: self.next_id,
            filter_mode: self.filter_mode,
            edit_mode: self.edit_mode,
            target_id: self.target_id,
        }
    }

    /// The snapshot as JSON text.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string(&self.snapshot()).context("Failed to serialize store snapshot")
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
