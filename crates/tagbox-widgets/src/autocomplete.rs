//! Autocomplete for the tag input: candidate filtering and dropdown wiring.
//!
//! While autocomplete is enabled, every keystroke in the text field refilters
//! the candidate list and pushes the matches into the widget's
//! [`Dropdown`](crate::dropdown::Dropdown).  Picking a match commits it as a
//! tag flagged as autocomplete-sourced.
//!
//! Matching is case-insensitive substring containment.  An empty query is a
//! substring of everything, so an empty text field matches every candidate.

use tagbox_core::command::Command;

use crate::listeners::ListenerEvent;
use crate::tag_input::{Message, TagInput};

/// Candidates containing `query`, ignoring case, in their original order.
pub fn matching(candidates: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Key-up listener: refilter against the current text and update the dropdown.
pub(crate) fn autocomplete_listener(
    widget: &mut TagInput,
    _event: &mut ListenerEvent,
) -> Command<Message> {
    let matches = matching(widget.autocomplete_items(), &widget.value());
    tracing::trace!(count = matches.len(), "autocomplete matches");
    widget.dropdown_mut().set_items(matches);
    Command::none()
}

/// A dropdown item was picked: commit it as an autocomplete-sourced tag.
pub(crate) fn on_item_selected(widget: &mut TagInput, value: String) -> Command<Message> {
    widget.set_value(&value);
    let cmd = widget.add_item(true);
    widget.dropdown_mut().clear();
    cmd
}

/// The dropdown was dismissed: forget the matches.
pub(crate) fn on_dismissed(widget: &mut TagInput) -> Command<Message> {
    widget.dropdown_mut().clear();
    Command::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec!["item1".into(), "item2".into(), "itam3".into()]
    }

    #[test]
    fn substring_match_narrows() {
        assert_eq!(matching(&candidates(), "i").len(), 3);
        assert_eq!(matching(&candidates(), "ite"), vec!["item1", "item2"]);
        assert_eq!(matching(&candidates(), "ita"), vec!["itam3"]);
        assert!(matching(&candidates(), "zz").is_empty());
    }

    #[test]
    fn match_ignores_case() {
        assert_eq!(matching(&candidates(), "ITEM2"), vec!["item2"]);
        let mixed = vec!["TypeScript".to_string()];
        assert_eq!(matching(&mixed, "script"), vec!["TypeScript"]);
    }

    #[test]
    fn matches_inside_the_word() {
        assert_eq!(matching(&candidates(), "m3"), vec!["itam3"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(matching(&candidates(), ""), candidates());
    }
}
