//! Navigation state shared through context
//!
//! [`NavigationProgress`](crate::NavigationProgress) provides a
//! [`NavigationContext`] to its subtree; links and bars reach it through
//! [`use_navigation`]. The context bundles the raw signal with the reactive
//! flag and the router delegates the provider was configured with.

use dioxus::prelude::*;
use headway_core::NavigationSignal;

/// Handle to the enclosing provider's navigation state
///
/// Cheap to clone; all clones refer to the same provider instance.
#[derive(Clone)]
pub struct NavigationContext {
    signal: NavigationSignal,
    navigating: ReadOnlySignal<bool>,
    current_path: ReadOnlySignal<String>,
    on_navigate: EventHandler<String>,
}

impl NavigationContext {
    pub(crate) fn new(
        signal: NavigationSignal,
        navigating: ReadOnlySignal<bool>,
        current_path: ReadOnlySignal<String>,
        on_navigate: EventHandler<String>,
    ) -> Self {
        Self {
            signal,
            navigating,
            current_path,
            on_navigate,
        }
    }

    /// Whether a navigation is in flight
    ///
    /// Reactive: reading it inside a component or effect subscribes to flips.
    pub fn is_navigating(&self) -> bool {
        *self.navigating.read()
    }

    /// The navigation flag as a read-only signal
    pub fn navigating(&self) -> ReadOnlySignal<bool> {
        self.navigating
    }

    /// Set the flag; raising it while already raised is a no-op
    pub fn set_navigating(&self, navigating: bool) {
        self.signal.set_navigating(navigating);
    }

    /// The router's current location path
    pub fn current_path(&self) -> String {
        self.current_path.read().clone()
    }

    /// Delegate a route change to the host router
    pub fn navigate(&self, to: impl Into<String>) {
        self.on_navigate.call(to.into());
    }

    /// The underlying signal, for wiring up interceptors outside the tree
    pub fn signal(&self) -> &NavigationSignal {
        &self.signal
    }
}

/// The enclosing provider's [`NavigationContext`]
///
/// # Panics
///
/// Panics when called outside a `NavigationProgress` subtree. Use
/// [`try_use_navigation`] for components that render with or without one.
pub fn use_navigation() -> NavigationContext {
    match try_use_navigation() {
        Some(context) => context,
        None => panic!("`use_navigation` must be called inside a `NavigationProgress` provider"),
    }
}

/// The enclosing provider's [`NavigationContext`], if any
pub fn try_use_navigation() -> Option<NavigationContext> {
    try_use_context::<NavigationContext>()
}
