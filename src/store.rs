//! Global View State Store
//!
//! All ephemeral UI state lives in one `ViewState`. Every change goes through
//! `ViewState::apply`; the reactive layer wraps it in a reactive_stores Store
//! so components subscribe per field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::gallery::{columns_for_width, Filter, DEFAULT_COLUMNS};
use crate::navbar::NavbarState;
use crate::selection::{Selection, SelectionEvent};
use crate::tasks::{toggle_focus, Checklist, TaskId};

/// Page session state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ViewState {
    /// Gallery category filter
    pub active_filter: Filter,
    /// Gallery columns derived from the last observed viewport width
    pub column_count: usize,
    /// Project modal
    pub selection: Selection,
    /// Completed checklist tasks
    pub checklist: Checklist,
    /// Highlighted checklist category
    pub focused_task_category: Option<String>,
    pub navbar: NavbarState,
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_filter: Filter::All,
            column_count: DEFAULT_COLUMNS,
            selection: Selection::Closed,
            checklist: Checklist::default(),
            focused_task_category: None,
            navbar: NavbarState::default(),
            sidebar_open: false,
            dark_mode: false,
        }
    }
}

/// Discrete user or viewport input
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    SetFilter(Filter),
    /// Observed viewport width in CSS pixels
    Resize(f64),
    Selection(SelectionEvent),
    ToggleTask(TaskId),
    FocusTaskCategory(String),
    /// Observed vertical scroll offset
    Scroll(f64),
    ToggleSidebar,
    CloseSidebar,
    ToggleDarkMode,
}

impl ViewState {
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SetFilter(filter) => self.active_filter = filter,
            ViewEvent::Resize(width) => self.column_count = columns_for_width(width),
            ViewEvent::Selection(ev) => self.selection = self.selection.apply(ev),
            ViewEvent::ToggleTask(id) => {
                self.checklist.toggle(id);
            }
            ViewEvent::FocusTaskCategory(title) => {
                self.focused_task_category = toggle_focus(self.focused_task_category.take(), &title);
            }
            ViewEvent::Scroll(y) => self.navbar = self.navbar.on_scroll(y),
            ViewEvent::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            ViewEvent::CloseSidebar => self.sidebar_open = false,
            ViewEvent::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
    }

    /// `(State, Event) -> State`
    pub fn next(mut self, event: ViewEvent) -> Self {
        self.apply(event);
        self
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Apply an event to the store, notifying only the fields that changed
pub fn dispatch(store: ViewStore, event: ViewEvent) {
    log::debug!("[STORE] {:?}", event);
    let before = store.with_untracked(|state| state.clone());
    let after = before.clone().next(event);

    if after.active_filter != before.active_filter {
        store.active_filter().set(after.active_filter);
    }
    if after.column_count != before.column_count {
        store.column_count().set(after.column_count);
    }
    if after.selection != before.selection {
        store.selection().set(after.selection);
    }
    if after.checklist != before.checklist {
        store.checklist().set(after.checklist);
    }
    if after.focused_task_category != before.focused_task_category {
        store.focused_task_category().set(after.focused_task_category);
    }
    if after.navbar != before.navbar {
        store.navbar().set(after.navbar);
    }
    if after.sidebar_open != before.sidebar_open {
        store.sidebar_open().set(after.sidebar_open);
    }
    if after.dark_mode != before.dark_mode {
        store.dark_mode().set(after.dark_mode);
    }
}
