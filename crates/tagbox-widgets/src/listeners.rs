//! Per-category callback lists fired by a widget in registration order.
//!
//! Listeners are plain function values taking the widget and the triggering
//! event.  A widget owns its registry; to fire a category it copies the
//! listener list out first, so listeners are free to mutate the widget.

use crossterm::event::KeyEvent;
use tagbox_core::command::Command;

/// Event categories a listener can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A key went down, before the text field has seen it.
    KeyDown,
    /// A key was processed by the text field.
    KeyUp,
    /// The entry list changed.
    Change,
}

/// The event handed to each listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerEvent {
    kind: EventKind,
    key: Option<KeyEvent>,
    default_prevented: bool,
}

impl ListenerEvent {
    /// A keyboard event of the given kind.
    pub fn key(kind: EventKind, key: KeyEvent) -> Self {
        Self {
            kind,
            key: Some(key),
            default_prevented: false,
        }
    }

    /// A list-changed event.
    pub fn change() -> Self {
        Self {
            kind: EventKind::Change,
            key: None,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The key that triggered this event, for keyboard kinds.
    pub fn key_event(&self) -> Option<&KeyEvent> {
        self.key.as_ref()
    }

    /// Stop the widget's default handling of this key (text editing, Enter
    /// to commit).  Later listeners still run.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A listener callback.
pub type Listener<T, M> = fn(&mut T, &mut ListenerEvent) -> Command<M>;

/// Ordered listener lists for each [`EventKind`].
pub struct ListenerRegistry<T, M> {
    key_down: Vec<Listener<T, M>>,
    key_up: Vec<Listener<T, M>>,
    change: Vec<Listener<T, M>>,
}

impl<T, M> ListenerRegistry<T, M> {
    pub fn new() -> Self {
        Self {
            key_down: Vec::new(),
            key_up: Vec::new(),
            change: Vec::new(),
        }
    }

    /// Append `listener` to `kind`'s list when `when` holds.
    ///
    /// Returns whether the listener was registered.
    pub fn add(&mut self, kind: EventKind, listener: Listener<T, M>, when: bool) -> bool {
        if when {
            self.list_mut(kind).push(listener);
        }
        when
    }

    /// The listeners registered for `kind`, in registration order.
    pub fn get(&self, kind: EventKind) -> &[Listener<T, M>] {
        match kind {
            EventKind::KeyDown => &self.key_down,
            EventKind::KeyUp => &self.key_up,
            EventKind::Change => &self.change,
        }
    }

    pub fn len(&self, kind: EventKind) -> usize {
        self.get(kind).len()
    }

    pub fn is_empty(&self, kind: EventKind) -> bool {
        self.get(kind).is_empty()
    }

    fn list_mut(&mut self, kind: EventKind) -> &mut Vec<Listener<T, M>> {
        match kind {
            EventKind::KeyDown => &mut self.key_down,
            EventKind::KeyUp => &mut self.key_up,
            EventKind::Change => &mut self.change,
        }
    }
}

impl<T, M> Default for ListenerRegistry<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `listeners` against `target` in order and batch their commands.
pub fn fire<T, M>(
    listeners: &[Listener<T, M>],
    target: &mut T,
    event: &mut ListenerEvent,
) -> Command<M> {
    Command::batch(listeners.iter().map(|listener| listener(target, event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    #[derive(Default)]
    struct Target {
        calls: Vec<&'static str>,
    }

    fn first(t: &mut Target, _: &mut ListenerEvent) -> Command<&'static str> {
        t.calls.push("first");
        Command::message("first")
    }

    fn second(t: &mut Target, ev: &mut ListenerEvent) -> Command<&'static str> {
        t.calls.push("second");
        ev.prevent_default();
        Command::message("second")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn fires_in_registration_order() {
        let mut registry: ListenerRegistry<Target, &'static str> = ListenerRegistry::new();
        registry.add(EventKind::KeyDown, first, true);
        registry.add(EventKind::KeyDown, second, true);

        let mut target = Target::default();
        let mut event = ListenerEvent::key(EventKind::KeyDown, key(KeyCode::Enter));
        let listeners = registry.get(EventKind::KeyDown).to_vec();
        let cmd = fire(&listeners, &mut target, &mut event);

        assert_eq!(target.calls, vec!["first", "second"]);
        assert_eq!(cmd.into_messages(), vec!["first", "second"]);
        assert!(event.is_default_prevented());
    }

    #[test]
    fn gated_registration_is_skipped() {
        let mut registry: ListenerRegistry<Target, &'static str> = ListenerRegistry::new();
        assert!(!registry.add(EventKind::KeyDown, first, false));
        assert!(registry.is_empty(EventKind::KeyDown));
        assert!(registry.add(EventKind::KeyDown, first, true));
        assert_eq!(registry.len(EventKind::KeyDown), 1);
    }

    #[test]
    fn categories_are_independent() {
        let mut registry: ListenerRegistry<Target, &'static str> = ListenerRegistry::new();
        registry.add(EventKind::KeyUp, first, true);
        registry.add(EventKind::Change, second, true);

        let mut target = Target::default();
        let mut event = ListenerEvent::change();
        let listeners = registry.get(EventKind::Change).to_vec();
        fire(&listeners, &mut target, &mut event);
        assert_eq!(target.calls, vec!["second"]);
        assert!(registry.is_empty(EventKind::KeyDown));
        assert_eq!(registry.len(EventKind::KeyUp), 1);
    }

    #[test]
    fn change_events_carry_no_key() {
        let event = ListenerEvent::change();
        assert_eq!(event.kind(), EventKind::Change);
        assert!(event.key_event().is_none());
        assert!(!event.is_default_prevented());
    }
}
