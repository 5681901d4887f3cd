//! Single-writer observable cell.

use std::sync::{Arc, Mutex};

type Listener<T> = Box<dyn Fn(&T) + Send>;

struct Inner<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

/// A value cell with a subscribe/notify contract.
///
/// Designed for one writer and any number of readers. Listeners run on the
/// writer's thread while the cell is locked, so they must stay small and
/// must not call back into the same cell.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: initial,
                listeners: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Replaces the value and notifies every listener with the new one.
    pub fn set(&self, value: T) {
        let mut inner = self.lock();
        inner.value = value;
        for listener in &inner.listeners {
            listener(&inner.value);
        }
    }

    /// Registers a listener invoked on every subsequent `set`.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + 'static) {
        self.lock().listeners.push(Box::new(listener));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        // A poisoned cell only ever means a listener panicked; the value
        // itself is still the last written one.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
