//! Todo lists.
//!
//! The same manager backs the plain task list and the goals list. Only
//! the storage key and the extras differ. The goals list adds reminders,
//! proof attachments and appreciation messages on completion.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, AchievementSink};
use crate::collection::{CollectionEditor, Record};
use crate::storage::{keys, Persistence};
use crate::types::{now_millis, ItemId};

pub const APPRECIATION_MESSAGES: &[&str] = &[
    "🌟 Incredible! You're absolutely amazing!",
    "🎉 Wow! Look at you achieving your goals!",
    "✨ You're doing phenomenally well!",
    "💫 Outstanding work! Keep shining!",
    "🏆 You're a true champion!",
    "🎊 Spectacular job! So proud of you!",
    "💖 You're absolutely wonderful!",
    "🌈 Fantastic! Dreams becoming reality!",
    "⭐ Marvelous! Dedication pays off!",
    "💝 You're simply the best!",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Priority::Low => "🌱",
            Priority::Medium => "⚡",
            Priority::High => "🔥",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn all() -> &'static [TodoFilter] {
        &[TodoFilter::All, TodoFilter::Active, TodoFilter::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    fn accepts(&self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !item.completed,
            TodoFilter::Completed => item.completed,
        }
    }
}

/// Which list a manager backs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoKind {
    Basic,
    Goals,
}

impl TodoKind {
    fn key(&self) -> &'static str {
        match self {
            TodoKind::Basic => keys::TODOS,
            TodoKind::Goals => keys::GOALS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub reminder_time: Option<NaiveTime>,
    /// Names of files attached as proof of completion
    #[serde(default)]
    pub proof: Vec<String>,
    pub created_at: i64,
    #[serde(default)]
    pub completed_at: Option<i64>,
}

impl Record for TodoItem {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Outcome of toggling an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub completed: bool,
    /// Set when the item was just completed
    pub appreciation: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub percent: f64,
}

#[derive(Debug)]
pub struct TodoManager {
    kind: TodoKind,
    todos: CollectionEditor<TodoItem>,
}

impl TodoManager {
    pub fn mount(persistence: Persistence, kind: TodoKind) -> Self {
        Self {
            kind,
            todos: CollectionEditor::mount(persistence, kind.key()),
        }
    }

    /// The plain task list
    pub fn basic(persistence: Persistence) -> Self {
        Self::mount(persistence, TodoKind::Basic)
    }

    /// The goals list with reminders and proof
    pub fn goals(persistence: Persistence) -> Self {
        Self::mount(persistence, TodoKind::Goals)
    }

    pub fn kind(&self) -> TodoKind {
        self.kind
    }

    pub fn items(&self) -> &[TodoItem] {
        self.todos.items()
    }

    pub fn filtered(&self, filter: TodoFilter) -> Vec<&TodoItem> {
        self.todos.items().iter().filter(|item| filter.accepts(item)).collect()
    }

    /// Add a task. Blank text is rejected.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        deadline: Option<NaiveDate>,
        reminder_time: Option<NaiveTime>,
        achievements: &mut dyn AchievementSink,
    ) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self
            .todos
            .insert_with(|id| TodoItem {
                id,
                text: text.to_string(),
                completed: false,
                priority,
                deadline,
                reminder_time,
                proof: Vec::new(),
                created_at: now_millis(),
                completed_at: None,
            })
            .id
            .clone();

        tracing::debug!(%id, ?priority, list = ?self.kind, "Task added");
        achievements.unlock(Achievement::TaskCreator);
        Some(id)
    }

    /// Flip completion. Returns `None` if the item does not exist.
    pub fn toggle(&mut self, id: &ItemId, achievements: &mut dyn AchievementSink) -> Option<Toggled> {
        let mut completed = false;
        let found = self.todos.update(id, |item| {
            item.completed = !item.completed;
            item.completed_at = item.completed.then(now_millis);
            completed = item.completed;
        });
        if !found {
            return None;
        }

        let appreciation = if completed {
            achievements.unlock(Achievement::TaskCompleter);
            APPRECIATION_MESSAGES.choose(&mut rand::rng()).copied()
        } else {
            None
        };

        tracing::debug!(%id, completed, "Task toggled");
        Some(Toggled {
            completed,
            appreciation,
        })
    }

    pub fn delete(&mut self, id: &ItemId) -> Option<TodoItem> {
        self.todos.delete(id)
    }

    /// Append proof file names to an item
    pub fn attach_proof<I, S>(&mut self, id: &ItemId, files: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files: Vec<String> = files.into_iter().map(Into::into).collect();
        if files.is_empty() {
            return false;
        }
        let count = files.len();
        let attached = self.todos.update(id, |item| item.proof.extend(files));
        if attached {
            tracing::debug!(%id, count, "Proof attached");
        }
        attached
    }

    /// Incomplete items whose reminder falls on the same minute as `now`
    pub fn due_reminders(&self, now: NaiveTime) -> Vec<&TodoItem> {
        let minute = now.hour() * 60 + now.minute();
        self.todos
            .items()
            .iter()
            .filter(|item| !item.completed)
            .filter(|item| {
                item.reminder_time
                    .is_some_and(|time| time.hour() * 60 + time.minute() == minute)
            })
            .collect()
    }

    pub fn stats(&self) -> TodoStats {
        let total = self.todos.len();
        let completed = self.todos.items().iter().filter(|item| item.completed).count();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        TodoStats {
            total,
            completed,
            percent,
        }
    }
}
