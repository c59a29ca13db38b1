//! Keyboard focus inside a tag input: the text field, one tag, or neither.
//!
//! Input focus and tag selection are mutually exclusive, so they live in one
//! enum instead of two flags.

/// Where keyboard focus sits within a tag input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Neither the text field nor a tag has focus.
    #[default]
    Idle,
    /// The text field has focus.
    Input,
    /// The tag at this index is selected.
    Tag(usize),
}

impl FocusState {
    /// Focus the text field, dropping any tag selection.
    ///
    /// Returns `false` when the text field already had focus.
    pub fn focus_input(&mut self) -> bool {
        if self.is_input_focused() {
            return false;
        }
        *self = FocusState::Input;
        true
    }

    /// Take focus away from the text field.  A selected tag stays selected.
    pub fn blur(&mut self) {
        if self.is_input_focused() {
            *self = FocusState::Idle;
        }
    }

    /// Select a tag by index, or clear the selection with `None`.
    ///
    /// Clearing never touches text-field focus.
    pub fn select(&mut self, index: Option<usize>) {
        match index {
            Some(i) => *self = FocusState::Tag(i),
            None => {
                if let FocusState::Tag(_) = self {
                    *self = FocusState::Idle;
                }
            }
        }
    }

    /// Index of the selected tag, if any.
    pub fn selected(&self) -> Option<usize> {
        match self {
            FocusState::Tag(i) => Some(*i),
            _ => None,
        }
    }

    /// Return whether the text field has focus.
    pub fn is_input_focused(&self) -> bool {
        matches!(self, FocusState::Input)
    }

    /// Return whether either the text field or a tag has focus.
    pub fn is_active(&self) -> bool {
        !matches!(self, FocusState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = FocusState::default();
        assert_eq!(state, FocusState::Idle);
        assert!(!state.is_active());
    }

    #[test]
    fn focus_input_is_noop_when_focused() {
        let mut state = FocusState::Idle;
        assert!(state.focus_input());
        assert!(!state.focus_input());
        assert!(state.is_input_focused());
    }

    #[test]
    fn focus_input_clears_selection() {
        let mut state = FocusState::Tag(2);
        assert!(state.focus_input());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn selecting_a_tag_unfocuses_input() {
        let mut state = FocusState::Input;
        state.select(Some(1));
        assert_eq!(state.selected(), Some(1));
        assert!(!state.is_input_focused());
    }

    #[test]
    fn clearing_selection_keeps_input_focus() {
        let mut state = FocusState::Input;
        state.select(None);
        assert!(state.is_input_focused());

        let mut state = FocusState::Tag(0);
        state.select(None);
        assert_eq!(state, FocusState::Idle);
    }

    #[test]
    fn blur_only_affects_input() {
        let mut state = FocusState::Input;
        state.blur();
        assert_eq!(state, FocusState::Idle);

        let mut state = FocusState::Tag(3);
        state.blur();
        assert_eq!(state, FocusState::Tag(3));
    }
}
