//! Key-to-action table for navigating and deleting tags.
//!
//! | Key | Nothing selected | Tag `i` selected |
//! |-----|------------------|------------------|
//! | Backspace / Delete | select last | remove `i` |
//! | Left | select last | select `i - 1`, stopping at the first |
//! | Right | - | select `i + 1`, or focus the text field after the last |
//! | Tab | - | focus the text field |

use crossterm::event::KeyCode;
use tagbox_core::command::Command;

/// Operations a key action needs from the widget it drives.
pub trait TagNavigation {
    type Message;

    fn item_count(&self) -> usize;

    /// Select the tag at `index`, or clear the selection.
    fn select_at(&mut self, index: Option<usize>) -> Command<Self::Message>;

    /// Remove the tag at `index`.
    fn remove_at(&mut self, index: usize) -> Command<Self::Message>;

    /// Move focus to the text field, clearing the selection.
    fn focus_input(&mut self) -> Command<Self::Message>;
}

/// A navigation or deletion behaviour bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Backspace / Delete.
    Delete,
    /// Left arrow.
    SelectPrevious,
    /// Right arrow.
    SelectNext,
    /// Tab.
    LeaveTags,
}

impl KeyAction {
    /// Look up the action bound to `code`.  Unmapped keys yield `None`.
    pub fn from_key(code: KeyCode) -> Option<KeyAction> {
        match code {
            KeyCode::Backspace | KeyCode::Delete => Some(KeyAction::Delete),
            KeyCode::Left => Some(KeyAction::SelectPrevious),
            KeyCode::Right => Some(KeyAction::SelectNext),
            KeyCode::Tab => Some(KeyAction::LeaveTags),
            _ => None,
        }
    }

    /// Perform the action.  `index` is the position of the current tag, or
    /// `None` when there is none; an out-of-range index counts as `None`.
    pub fn apply<N: TagNavigation>(self, target: &mut N, index: Option<usize>) -> Command<N::Message> {
        let count = target.item_count();
        let index = index.filter(|&i| i < count);
        let last = count.checked_sub(1);

        match (self, index) {
            (KeyAction::Delete | KeyAction::SelectPrevious, None) => match last {
                Some(last) => target.select_at(Some(last)),
                None => Command::none(),
            },
            (KeyAction::Delete, Some(i)) => target.remove_at(i),
            (KeyAction::SelectPrevious, Some(i)) => target.select_at(Some(i.saturating_sub(1))),
            (KeyAction::SelectNext, Some(i)) if i + 1 < count => target.select_at(Some(i + 1)),
            (KeyAction::SelectNext | KeyAction::LeaveTags, Some(_)) => target.focus_input(),
            (KeyAction::SelectNext | KeyAction::LeaveTags, None) => Command::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Tags {
        items: Vec<&'static str>,
        selected: Option<usize>,
        input_focused: bool,
    }

    impl TagNavigation for Tags {
        type Message = ();

        fn item_count(&self) -> usize {
            self.items.len()
        }

        fn select_at(&mut self, index: Option<usize>) -> Command<()> {
            self.selected = index;
            if index.is_some() {
                self.input_focused = false;
            }
            Command::none()
        }

        fn remove_at(&mut self, index: usize) -> Command<()> {
            self.items.remove(index);
            self.focus_input()
        }

        fn focus_input(&mut self) -> Command<()> {
            self.selected = None;
            self.input_focused = true;
            Command::none()
        }
    }

    fn tags(items: &[&'static str]) -> Tags {
        Tags {
            items: items.to_vec(),
            ..Tags::default()
        }
    }

    #[test]
    fn mapping() {
        assert_eq!(KeyAction::from_key(KeyCode::Backspace), Some(KeyAction::Delete));
        assert_eq!(KeyAction::from_key(KeyCode::Delete), Some(KeyAction::Delete));
        assert_eq!(KeyAction::from_key(KeyCode::Left), Some(KeyAction::SelectPrevious));
        assert_eq!(KeyAction::from_key(KeyCode::Right), Some(KeyAction::SelectNext));
        assert_eq!(KeyAction::from_key(KeyCode::Tab), Some(KeyAction::LeaveTags));
        assert_eq!(KeyAction::from_key(KeyCode::Char('x')), None);
        assert_eq!(KeyAction::from_key(KeyCode::Enter), None);
    }

    #[test]
    fn backspace_without_selection_selects_last() {
        let mut t = tags(&["a", "b", "c"]);
        KeyAction::Delete.apply(&mut t, None);
        assert_eq!(t.selected, Some(2));
        assert_eq!(t.items.len(), 3);
    }

    #[test]
    fn backspace_on_selection_deletes_it() {
        let mut t = tags(&["a", "b", "c"]);
        KeyAction::Delete.apply(&mut t, Some(1));
        assert_eq!(t.items, vec!["a", "c"]);
        assert_eq!(t.selected, None);
        assert!(t.input_focused);
    }

    #[test]
    fn left_walks_back_and_stops_at_first() {
        let mut t = tags(&["a", "b", "c"]);
        KeyAction::SelectPrevious.apply(&mut t, None);
        assert_eq!(t.selected, Some(2));
        for expected in [1, 0, 0] {
            let current = t.selected;
            KeyAction::SelectPrevious.apply(&mut t, current);
            assert_eq!(t.selected, Some(expected));
        }
    }

    #[test]
    fn right_past_last_returns_to_input() {
        let mut t = tags(&["a", "b"]);
        KeyAction::SelectNext.apply(&mut t, Some(0));
        assert_eq!(t.selected, Some(1));
        KeyAction::SelectNext.apply(&mut t, Some(1));
        assert_eq!(t.selected, None);
        assert!(t.input_focused);
    }

    #[test]
    fn tab_returns_to_input() {
        let mut t = tags(&["a", "b"]);
        t.selected = Some(0);
        KeyAction::LeaveTags.apply(&mut t, Some(0));
        assert_eq!(t.selected, None);
        assert!(t.input_focused);
    }

    #[test]
    fn missing_index_never_panics() {
        for action in [
            KeyAction::Delete,
            KeyAction::SelectPrevious,
            KeyAction::SelectNext,
            KeyAction::LeaveTags,
        ] {
            let mut empty = tags(&[]);
            action.apply(&mut empty, None);
            assert_eq!(empty.selected, None);

            let mut t = tags(&["a"]);
            action.apply(&mut t, Some(9));
        }
    }

    #[test]
    fn right_and_tab_without_selection_do_nothing() {
        let mut t = tags(&["a"]);
        KeyAction::SelectNext.apply(&mut t, None);
        KeyAction::LeaveTags.apply(&mut t, None);
        assert_eq!(t.selected, None);
        assert!(!t.input_focused);
    }
}
