//! Project Selection
//!
//! Modal state machine: at most one project is open at a time.

/// What closed the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The × control in the modal header
    Button,
    /// Click on the dimmed overlay around the panel
    Backdrop,
    /// "Select none" from outside the modal, e.g. the Escape key
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A gallery card was clicked
    Select(u32),
    Close(CloseTrigger),
}

/// Modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(u32),
}

impl Selection {
    /// Clicking a card always opens (or re-targets) it; only close events close.
    pub fn apply(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::Select(id) => Selection::Open(id),
            SelectionEvent::Close(_) => Selection::Closed,
        }
    }

    pub fn open_id(self) -> Option<u32> {
        match self {
            Selection::Open(id) => Some(id),
            Selection::Closed => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Selection::Open(_))
    }
}

/// Key that clears the selection from anywhere on the page
pub const CLEAR_KEY: &str = "Escape";

/// Map a window keydown to a selection event
pub fn key_event(key: &str) -> Option<SelectionEvent> {
    (key == CLEAR_KEY).then_some(SelectionEvent::Close(CloseTrigger::Clear))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSES: [CloseTrigger; 3] = [CloseTrigger::Button, CloseTrigger::Backdrop, CloseTrigger::Clear];

    #[test]
    fn test_initially_closed() {
        assert_eq!(Selection::default(), Selection::Closed);
        assert_eq!(Selection::default().open_id(), None);
    }

    #[test]
    fn test_retarget_without_close() {
        let s = Selection::Closed.apply(SelectionEvent::Select(2));
        assert_eq!(s, Selection::Open(2));
        let s = s.apply(SelectionEvent::Select(5));
        assert_eq!(s, Selection::Open(5));
    }

    #[test]
    fn test_same_project_is_not_a_toggle() {
        let s = Selection::Open(3).apply(SelectionEvent::Select(3));
        assert_eq!(s, Selection::Open(3));
        assert!(s.is_open());
    }

    #[test]
    fn test_every_close_trigger_closes() {
        for trigger in CLOSES {
            assert_eq!(Selection::Open(7).apply(SelectionEvent::Close(trigger)), Selection::Closed);
            // Closing while closed is a no-op
            assert_eq!(Selection::Closed.apply(SelectionEvent::Close(trigger)), Selection::Closed);
        }
    }

    #[test]
    fn test_only_select_reaches_open() {
        for trigger in CLOSES {
            assert!(!Selection::Closed.apply(SelectionEvent::Close(trigger)).is_open());
        }
        assert!(Selection::Closed.apply(SelectionEvent::Select(1)).is_open());
    }

    #[test]
    fn test_escape_clears_selection() {
        let event = key_event("Escape").unwrap();
        assert_eq!(event, SelectionEvent::Close(CloseTrigger::Clear));
        assert_eq!(Selection::Open(4).apply(event), Selection::Closed);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(key_event("Enter"), None);
        assert_eq!(key_event("escape"), None);
    }
}
