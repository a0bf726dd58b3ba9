//! Components
//!
//! One file per component: the provider that owns the navigation state,
//! the bar that animates it, and the link that raises it.

pub mod bar;
pub mod link;
pub mod provider;

pub use bar::{DEFAULT_COLOR, DEFAULT_THICKNESS, ProgressBar, ProgressBarProps};
pub use link::{Link, LinkProps};
pub use provider::{NavigationProgress, NavigationProgressProps};
