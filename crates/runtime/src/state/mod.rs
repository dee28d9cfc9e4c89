//! Observable value cells.
//!
//! [`State`] holds a value, remembers the value it was created with, and
//! notifies registered observers whenever the value actually changes. A new
//! observer is called once right away with the current value, so it never has
//! to read the cell separately before its first update.
//!
//! Observers run synchronously on the thread that calls [`State::set`], in the
//! order they subscribed.

mod bit;

pub use bit::{State2Bit, State2BitValue};

use std::fmt;

/// Handle returned by [`State::observe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// Value cell with change notification.
pub struct State<T> {
    value: T,
    initial: T,
    observers: Vec<(Subscription, Observer<T>)>,
    next_subscription: u64,
}

impl<T: Clone + PartialEq> State<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial.clone(),
            initial,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// The value this cell was created with; [`State::delete_state`] restores it.
    pub fn initial(&self) -> &T {
        &self.initial
    }

    /// Stores `value`, notifying observers only if it differs from the current
    /// value. Returns whether a change happened.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        tracing::trace!(observers = self.observers.len(), "state changed");
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
        true
    }

    /// Replaces the value with `f(current)`.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    /// Registers `observer`, calling it immediately with the current value.
    pub fn observe(&mut self, mut observer: impl FnMut(&T) + 'static) -> Subscription {
        observer(&self.value);

        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Removes an observer. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    /// Restores the initial value, notifying observers if that is a change.
    pub fn delete_state(&mut self) -> bool {
        let initial = self.initial.clone();
        self.set(initial)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.value)
            .field("initial", &self.initial)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl FnMut(&i32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &i32| sink.borrow_mut().push(*value))
    }

    #[test]
    fn observe_replays_current_value() {
        let mut state = State::new(7);
        let (seen, observer) = recorder();
        state.observe(observer);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn set_notifies_only_on_change() {
        let mut state = State::new(0);
        let (seen, observer) = recorder();
        state.observe(observer);

        assert!(state.set(1));
        assert!(!state.set(1));
        assert!(state.set(2));
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut state = State::new(0);
        let (seen, observer) = recorder();
        let subscription = state.observe(observer);

        assert!(state.unsubscribe(subscription));
        assert!(!state.unsubscribe(subscription));
        state.set(5);
        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(state.observer_count(), 0);
    }

    #[test]
    fn delete_state_restores_initial_value() {
        let mut state = State::new(3);
        let (seen, observer) = recorder();
        state.observe(observer);

        state.set(9);
        assert!(state.delete_state());
        assert_eq!(*state.get(), 3);
        assert!(!state.delete_state());
        assert_eq!(*seen.borrow(), vec![3, 9, 3]);
    }

    #[test]
    fn observers_fire_in_subscription_order() {
        let mut state = State::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            state.observe(move |_| order.borrow_mut().push(tag));
        }
        order.borrow_mut().clear();

        state.update(|v| v + 1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
