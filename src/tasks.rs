//! Task Checklist
//!
//! Completion set keyed by `category#index`, plus the highlighted category.

use std::collections::BTreeSet;
use std::fmt;

/// Task identity: category title and zero-based position within it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    pub category: String,
    pub index: usize,
}

impl TaskId {
    pub fn new(category: impl Into<String>, index: usize) -> Self {
        Self { category: category.into(), index }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.category, self.index)
    }
}

/// Set of completed tasks; absent means pending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    completed: BTreeSet<TaskId>,
}

impl Checklist {
    /// Flip membership; returns whether the task is now completed
    pub fn toggle(&mut self, id: TaskId) -> bool {
        if self.completed.remove(&id) {
            false
        } else {
            self.completed.insert(id);
            true
        }
    }

    pub fn is_completed(&self, id: &TaskId) -> bool {
        self.completed.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn completed_in(&self, category: &str) -> usize {
        self.completed.iter().filter(|id| id.category == category).count()
    }
}

/// Clicking the focused category clears focus, any other category takes it
pub fn toggle_focus(current: Option<String>, clicked: &str) -> Option<String> {
    match current {
        Some(title) if title == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::new("Python + Docker", 2).to_string(), "Python + Docker#2");
    }

    #[test]
    fn test_toggle_and_count() {
        let mut list = Checklist::default();
        assert!(list.toggle(TaskId::new("Docker", 0)));
        assert!(list.toggle(TaskId::new("Docker", 3)));
        assert!(list.toggle(TaskId::new("Github", 0)));
        assert_eq!(list.completed_count(), 3);
        assert_eq!(list.completed_in("Docker"), 2);

        assert!(!list.toggle(TaskId::new("Docker", 0)));
        assert!(!list.is_completed(&TaskId::new("Docker", 0)));
        assert!(list.is_completed(&TaskId::new("Docker", 3)));
        assert_eq!(list.completed_count(), 2);
    }

    #[test]
    fn test_same_index_in_other_category_is_distinct() {
        let mut list = Checklist::default();
        list.toggle(TaskId::new("Python", 1));
        assert!(!list.is_completed(&TaskId::new("Terminal", 1)));
    }

    #[test]
    fn test_toggle_focus() {
        let focus = toggle_focus(None, "Docker");
        assert_eq!(focus.as_deref(), Some("Docker"));
        let focus = toggle_focus(focus, "Github");
        assert_eq!(focus.as_deref(), Some("Github"));
        assert_eq!(toggle_focus(focus, "Github"), None);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores(
            seed in proptest::collection::vec((0usize..4, 0usize..6), 0..20),
            category in 0usize..4,
            index in 0usize..6,
        ) {
            const TITLES: [&str; 4] = ["Docker", "Terminal", "Python", "Other"];
            let mut list = Checklist::default();
            for (c, i) in seed {
                list.toggle(TaskId::new(TITLES[c], i));
            }
            let before = list.clone();
            let id = TaskId::new(TITLES[category], index);
            list.toggle(id.clone());
            prop_assert_ne!(&list, &before);
            list.toggle(id);
            prop_assert_eq!(list, before);
        }
    }
}
