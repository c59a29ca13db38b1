//! Observable values for two-way binding between a component and its host.
//!
//! A [`Bound`] value is owned by the component.  The host reads it with
//! [`get`](Bound::get), writes it with [`set`](Bound::set), and registers
//! observers that run after every change, whichever side made it.

/// Handle returned by [`Bound::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Box<dyn FnMut(&T) + Send>;

/// A value plus the observers to notify when it changes.
pub struct Bound<T> {
    value: T,
    observers: Vec<(ObserverId, Observer<T>)>,
    next_id: u64,
}

impl<T> Bound<T> {
    /// Wrap an initial value.  No observers are notified.
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify observers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place and notify observers.
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    /// Register an observer.  It is not called for the current value.
    pub fn subscribe(&mut self, observer: impl FnMut(&T) + Send + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer.  Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
    }
}

impl<T: Default> Default for Bound<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bound")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_does_not_notify() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bound = Bound::new(1);
        let sink = Arc::clone(&seen);
        bound.subscribe(move |v| sink.lock().unwrap().push(*v));
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(*bound.get(), 1);
    }

    #[test]
    fn set_and_modify_notify_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bound = Bound::new(vec!["a".to_string()]);
        let sink = Arc::clone(&seen);
        bound.subscribe(move |v: &Vec<String>| sink.lock().unwrap().push(v.len()));

        bound.modify(|items| items.push("b".into()));
        bound.set(Vec::new());
        assert_eq!(*seen.lock().unwrap(), vec![2, 0]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Arc::new(Mutex::new(0));
        let mut bound = Bound::new(0);
        let sink = Arc::clone(&count);
        let id = bound.subscribe(move |_| *sink.lock().unwrap() += 1);

        bound.set(1);
        assert!(bound.unsubscribe(id));
        bound.set(2);
        assert_eq!(*count.lock().unwrap(), 1);
        assert!(!bound.unsubscribe(id));
    }
}
