//! The shared is-navigating flag
//!
//! `NavigationSignal` is the single source of truth the bar animates from.
//! Link interceptors raise it, the location observer clears it once the
//! route has actually changed, and any number of watchers see the flips.
//!
//! # Lifecycle
//!
//! 1. Activation classified as a route transition → `set_navigating(true)`
//! 2. Bar watcher wakes and starts ticking
//! 3. Router commits, observed path changes → `set_navigating(false)`
//! 4. Bar watcher wakes, completes and hides

use std::sync::{Arc, OnceLock};

use tokio::sync::watch;
use tracing::debug;

static SHARED: OnceLock<NavigationSignal> = OnceLock::new();

/// Observable navigation-in-flight flag
///
/// Clones share one underlying flag. Redundant sets are dropped before
/// they reach watchers, so raising an already-raised signal wakes nobody.
#[derive(Debug, Clone)]
pub struct NavigationSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl NavigationSignal {
    /// Fresh flag, scoped to whoever holds a clone
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Process-wide flag; every call yields a clone of the same instance
    ///
    /// Use this to drive several independently mounted bars from one
    /// navigation state. The instance lives for the rest of the process.
    pub fn shared() -> Self {
        SHARED.get_or_init(Self::new).clone()
    }

    /// Current value, without subscribing
    pub fn is_navigating(&self) -> bool {
        *self.tx.borrow()
    }

    /// Set the flag
    ///
    /// Setting it to its current value is a no-op and does not wake
    /// watchers.
    pub fn set_navigating(&self, navigating: bool) {
        let flipped = self.tx.send_if_modified(|current| {
            if *current == navigating {
                false
            } else {
                *current = navigating;
                true
            }
        });
        if flipped {
            debug!(navigating, "navigation signal flipped");
        }
    }

    /// Subscribe to flips
    pub fn watch(&self) -> NavigationWatch {
        NavigationWatch {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for NavigationSignal {
    fn default() -> Self {
        Self::new()
    }
}

// Handles are equal when they share the same underlying flag.
impl PartialEq for NavigationSignal {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tx, &other.tx)
    }
}

impl Eq for NavigationSignal {}

/// Subscription handle for one watcher
#[derive(Debug)]
pub struct NavigationWatch {
    rx: watch::Receiver<bool>,
}

impl NavigationWatch {
    /// Current value, leaving any pending flip unconsumed
    pub fn get(&self) -> bool {
        *self.rx.borrow()
    }

    /// Current value, marking it seen
    pub fn latest(&mut self) -> bool {
        *self.rx.borrow_and_update()
    }

    /// Whether a flip is pending since the last `latest`/`changed`
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next flip and return the new value
    ///
    /// Returns `None` once every handle of the signal has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
