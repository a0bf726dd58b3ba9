//! Navigation progress bars for Dioxus
//!
//! A thin top/bottom/side bar that animates while a client-side route
//! transition is in flight. The pieces:
//!
//! - [`NavigationProgress`]: provider that owns the navigation signal,
//!   observes the host router's current path, and renders the bar.
//! - [`Link`]: anchor component that classifies clicks and raises the
//!   signal before delegating the navigation to the host router.
//! - [`ProgressBar`]: the bar itself, for mounting extra bars under an
//!   existing provider.
//! - [`use_navigation`] / [`try_use_navigation`]: access to the provider's
//!   [`NavigationContext`] from any descendant.
//!
//! The crate is router-agnostic: the host supplies the current path as a
//! reactive value and a callback that performs the actual route change.
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_headway::{Link, NavigationProgress};
//!
//! #[component]
//! fn App() -> Element {
//!     let mut path = use_signal(|| String::from("/"));
//!
//!     rsx! {
//!         NavigationProgress {
//!             current_path: path,
//!             on_navigate: move |to: String| {
//!                 // hand off to the router; `path` updates once it commits
//!                 path.set(to);
//!             },
//!             Link { to: "/reports", "Reports" }
//!         }
//!     }
//! }
//! ```
//!
//! State machine, click classification, and geometry live in
//! [`headway_core`]; this crate binds them to a reactive tree.

mod components;
mod context;
mod style;

#[cfg(test)]
mod render_tests;

pub use components::{
    DEFAULT_COLOR, DEFAULT_THICKNESS, Link, LinkProps, NavigationProgress,
    NavigationProgressProps, ProgressBar, ProgressBarProps,
};
pub use context::{NavigationContext, try_use_navigation, use_navigation};

// Core types that appear in this crate's props and hooks.
pub use headway_core::{
    AnimatorConfig, AnimatorPhase, Destination, DestinationParts, Direction, NavigationIntent,
    NavigationSignal,
};
