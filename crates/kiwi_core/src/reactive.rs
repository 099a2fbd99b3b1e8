//! Shared state handles for component-owned values
//!
//! A [`State`] wraps a single value behind shared ownership so that a
//! container component and every control it hands the state to observe the
//! same value. Writes bump a version counter and raise a shared dirty flag;
//! a host render loop polls the flag (see [`State::take_dirty`]) and rebuilds
//! its element tree, at which point all readers observe the new value in the
//! same build pass.
//!
//! # Example
//!
//! ```rust
//! use kiwi_core::State;
//!
//! let active = State::new("preview".to_string());
//! let shared = active.clone();
//!
//! shared.set("html".to_string());
//! assert_eq!(active.get(), "html");
//! assert!(active.take_dirty());
//! assert!(!active.take_dirty());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Shared flag marking that a state change requires a tree rebuild
pub type DirtyFlag = Arc<AtomicBool>;

struct StateInner<T> {
    value: T,
    version: u64,
}

/// A bound state value with direct get/set methods
///
/// Cloning a `State` clones the handle, not the value: all clones read and
/// write the same underlying slot. The interior mutex exists for shared
/// ownership; execution is single-threaded and the lock is uncontended by
/// construction.
pub struct State<T> {
    inner: Arc<Mutex<StateInner<T>>>,
    dirty: DirtyFlag,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Clone> State<T> {
    /// Create a new state slot with its own dirty flag
    pub fn new(value: T) -> Self {
        Self::with_dirty_flag(value, Arc::new(AtomicBool::new(false)))
    }

    /// Create a new state slot attached to an existing dirty flag
    ///
    /// Use this when several independent states should funnel into one
    /// host rebuild signal.
    pub fn with_dirty_flag(value: T, dirty: DirtyFlag) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StateInner { value, version: 0 })),
            dirty,
        }
    }

    /// Get the current value
    pub fn get(&self) -> T {
        self.inner.lock().unwrap().value.clone()
    }

    /// Set a new value
    ///
    /// Bumps the version and marks the dirty flag. Every observable
    /// consequence of a state change in this library is structural (hidden
    /// flags, class lists, ARIA attributes are computed at build time), so
    /// a rebuild is always scheduled.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.lock().unwrap();
        inner.value = value;
        inner.version += 1;
        self.dirty.store(true, Ordering::SeqCst);
        tracing::trace!(version = inner.version, "state written, rebuild scheduled");
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let mut inner = self.inner.lock().unwrap();
        inner.value = f(inner.value.clone());
        inner.version += 1;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Current write count, usable to detect spurious writes in tests
    pub fn version(&self) -> u64 {
        self.inner.lock().unwrap().version
    }

    /// The shared dirty flag backing this state
    pub fn dirty_flag(&self) -> DirtyFlag {
        Arc::clone(&self.dirty)
    }

    /// Whether a rebuild is pending
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Consume the pending-rebuild flag, returning whether it was set
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}
