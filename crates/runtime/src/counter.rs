//! Observable click counter.

use golden_age_core::Calculator;

use crate::state::State;

/// Counter whose value is published through a [`State`] cell.
#[derive(Debug, Default)]
pub struct CounterModel {
    count: State<i64>,
}

impl CounterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        *self.count.get()
    }

    pub fn count(&self) -> &State<i64> {
        &self.count
    }

    /// Mutable access for subscribing and unsubscribing observers.
    pub fn count_mut(&mut self) -> &mut State<i64> {
        &mut self.count
    }

    /// Adds one using the counting calculator.
    pub fn increment(&mut self) {
        self.count.update(|&count| Calculator::add(count, 1));
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.count.delete_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn increments_are_published() {
        let mut counter = CounterModel::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        counter
            .count_mut()
            .observe(move |count| sink.borrow_mut().push(*count));

        counter.increment();
        counter.increment();
        counter.reset();

        assert_eq!(*seen.borrow(), vec![0, 1, 2, 0]);
        assert_eq!(counter.value(), 0);
    }
}
