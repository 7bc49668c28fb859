//! Observer pattern for progress tracking.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Subject that fans updates out to a collection of observers.
///
/// A subject is itself an observer, so it can be handed to the generator
/// wherever a single observer is expected.
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn ProgressObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of a progress update.
    pub fn notify(&self, update: &ProgressUpdate) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_progress(update);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ProgressSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressSubject {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.notify(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Counter(AtomicU32);

    impl ProgressObserver for Counter {
        fn on_progress(&self, _update: &ProgressUpdate) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn subject_register_and_notify() {
        let subject = ProgressSubject::new();
        let a = Arc::new(Counter(AtomicU32::new(0)));
        let b = Arc::new(Counter(AtomicU32::new(0)));
        subject.register(a.clone());
        subject.register(b.clone());
        assert_eq!(subject.count(), 2);

        subject.notify(&ProgressUpdate::new(1, 2));
        subject.on_progress(&ProgressUpdate::done(2));
        assert_eq!(a.0.load(Ordering::Relaxed), 2);
        assert_eq!(b.0.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn subject_clear() {
        let subject = ProgressSubject::default();
        subject.register(Arc::new(Counter(AtomicU32::new(0))));
        subject.clear();
        assert_eq!(subject.count(), 0);
    }
}
