use super::task::Task;

/// Which tasks the list shows. A view selector only — it never touches
/// storage or storage order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Unfinished,
    Finished,
}

impl Filter {
    pub const ALL: &'static [Filter] = &[Filter::All, Filter::Unfinished, Filter::Finished];

    fn admits(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Unfinished => !task.completed,
            Self::Finished => task.completed,
        }
    }
}

/// A position in the filtered list as rendered. Not an index into storage:
/// the two only coincide while the filter is `All`, so row-referencing
/// operations translate before mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow(pub usize);

/// The task list and the transient state that belongs to it: the draft
/// being composed, the edit cursor, the deletion awaiting confirmation,
/// and the active filter. All mutation goes through the methods here;
/// out-of-range rows are no-ops.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    draft: String,
    editing: Option<usize>,
    pending_delete: Option<usize>,
    filter: Filter,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// True while a task is being edited; submit then rewrites its text
    /// instead of appending.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Text of the task awaiting delete confirmation. Drives the dialog.
    pub fn pending_delete_text(&self) -> Option<&str> {
        self.pending_delete.map(|i| self.tasks[i].text.as_str())
    }

    /// Tasks admitted by the active filter, in storage order.
    pub fn visible(&self) -> impl Iterator<Item = &Task> + '_ {
        let filter = self.filter;
        self.tasks.iter().filter(move |t| filter.admits(t))
    }

    /// Translate a row of the filtered view to an index into storage.
    fn storage_index(&self, row: VisibleRow) -> Option<usize> {
        let filter = self.filter;
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, t)| filter.admits(t))
            .nth(row.0)
            .map(|(i, _)| i)
    }

    /// Replace the draft verbatim; trimming happens at commit.
    pub fn set_draft(&mut self, value: String) {
        self.draft = value;
    }

    /// Commit the draft: append a new task, or rewrite the edited task's
    /// text when an edit is in progress. A blank draft commits nothing and
    /// keeps both the draft and the edit cursor.
    pub fn commit_draft(&mut self) {
        let text = self.draft.trim();
        if text.is_empty() {
            return;
        }
        match self.editing.take() {
            Some(i) => self.tasks[i].text = text.to_string(),
            None => self.tasks.push(Task::new(text)),
        }
        self.draft.clear();
    }

    /// Stage a deletion; the removal happens on `confirm_delete`. A second
    /// request before confirmation replaces the first.
    pub fn request_delete(&mut self, row: VisibleRow) {
        if let Some(i) = self.storage_index(row) {
            self.pending_delete = Some(i);
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(i) = self.pending_delete.take() else {
            return;
        };
        self.tasks.remove(i);
        // The edit cursor keeps pointing at the same task, or is dropped
        // when that task is the one removed.
        self.editing = match self.editing {
            Some(e) if e == i => None,
            Some(e) if e > i => Some(e - 1),
            other => other,
        };
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn move_up(&mut self, row: VisibleRow) {
        if let Some(i) = self.storage_index(row) {
            if i > 0 {
                self.tasks.swap(i, i - 1);
            }
        }
    }

    pub fn move_down(&mut self, row: VisibleRow) {
        if let Some(i) = self.storage_index(row) {
            if i + 1 < self.tasks.len() {
                self.tasks.swap(i, i + 1);
            }
        }
    }

    /// Start editing: the draft is overwritten with the task's current
    /// text, discarding whatever was being composed.
    pub fn begin_edit(&mut self, row: VisibleRow) {
        if let Some(i) = self.storage_index(row) {
            self.editing = Some(i);
            self.draft = self.tasks[i].text.clone();
        }
    }

    pub fn toggle_completed(&mut self, row: VisibleRow) {
        if let Some(i) = self.storage_index(row) {
            self.tasks[i].completed = !self.tasks[i].completed;
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }
}
