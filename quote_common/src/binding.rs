//! Observable values for view-model bindings.
//!
//! An `Observable` holds a value and broadcasts every new value to all of its
//! subscribers through `crossbeam_channel` senders. A fresh subscription first
//! receives the current value, then each later value in the order it was set.
//! Emission happens synchronously inside `set`; subscribers whose receiver has
//! been dropped are removed on the next emission.
use std::cell::RefCell;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

/// A value whose changes can be observed.
pub struct Observable<T: Clone> {
    value: RefCell<T>,
    observers: RefCell<Vec<Sender<T>>>,
}

impl<T: Clone> Observable<T> {
    /// Creates an observable holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Registers a new observer. The current value is delivered immediately.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = unbounded::<T>();
        if tx.send(self.get()).is_err() {
            debug!("Initial value was not delivered to a new subscriber");
        }
        self.observers.borrow_mut().push(tx);
        rx
    }

    /// Replaces the value and broadcasts it to every live observer.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        let mut observers = self.observers.borrow_mut();
        observers.retain(|observer_tx| observer_tx.send(value.clone()).is_ok());
        debug!("Observable updated, {} observer(s)", observers.len());
    }

    /// Number of observers still registered.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_starts_with_current_value() {
        let observable = Observable::new(String::from("initial"));
        let rx = observable.subscribe();
        assert_eq!(rx.try_recv().unwrap(), "initial");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn updates_arrive_in_order() {
        let observable = Observable::new(0);
        let rx = observable.subscribe();
        observable.set(1);
        observable.set(2);
        observable.set(3);
        let seen: Vec<i32> = rx.try_iter().collect();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(observable.get(), 3);
    }

    #[test]
    fn every_observer_gets_every_update() {
        let observable = Observable::new(0);
        let a = observable.subscribe();
        observable.set(5);
        let b = observable.subscribe();
        observable.set(6);
        assert_eq!(a.try_iter().collect::<Vec<_>>(), vec![0, 5, 6]);
        assert_eq!(b.try_iter().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn dropped_observers_are_pruned() {
        let observable = Observable::new(0);
        let kept = observable.subscribe();
        drop(observable.subscribe());
        assert_eq!(observable.observer_count(), 2);
        observable.set(1);
        assert_eq!(observable.observer_count(), 1);
        assert_eq!(kept.try_iter().last(), Some(1));
    }
}
