//! Observable values.
//!
//! A [`Property`] owns a value and the [`Signal`] announcing its changes.
//! Writing an equal value is not a change and emits nothing, so observers of
//! a widget flag hear about each real transition exactly once.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use lattice_select_core::Property;
//!
//! let expanded = Property::new(false);
//! let flips = Arc::new(AtomicUsize::new(0));
//! let counter = flips.clone();
//! expanded.changed().connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert!(expanded.set(true));
//! assert!(!expanded.set(true));
//! assert_eq!(flips.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::signal::Signal;

/// A value paired with its change notification.
pub struct Property<T: 'static> {
    value: RwLock<T>,
    changed: Signal<T>,
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Create a property holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            changed: Signal::new(),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Store `value` and emit [`changed`](Self::changed) if it differs from
    /// the current one. Returns whether it differed.
    ///
    /// The lock is released before emission; slots may read the property.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.changed.emit(value);
        true
    }

    /// The signal emitted with the new value after each change.
    pub fn changed(&self) -> &Signal<T> {
        &self.changed
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .field("connections", &self.changed.connection_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_only_real_changes_notify() {
        let expanded = Property::new(false);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        expanded.changed().connect(move |open| sink.lock().push(*open));

        assert!(!expanded.set(false));
        assert!(expanded.set(true));
        assert!(!expanded.set(true));
        assert!(expanded.set(false));

        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_slot_can_read_property_during_emit() {
        let index = Arc::new(Property::new(-1));
        let observed = Arc::new(Mutex::new(None));

        let reader = index.clone();
        let sink = observed.clone();
        index
            .changed()
            .connect(move |_| *sink.lock() = Some(reader.get()));

        index.set(3);
        assert_eq!(*observed.lock(), Some(3));
    }

    #[test]
    fn test_default_and_debug() {
        let flag: Property<bool> = Property::default();
        assert!(!flag.get());
        assert!(format!("{flag:?}").contains("value: false"));
    }
}
