//! Core state machine for client-side navigation progress bars
//!
//! This crate provides:
//! - **Signal**: the observable is-navigating flag that link interceptors
//!   raise and the location observer clears
//! - **Intent**: classification of link activations (new tab, same page,
//!   fragment jump, real route transition)
//! - **Animator**: the Idle → Ticking → Completing simulated-progress machine
//! - **Direction**: bar placement and fill-growth geometry
//!
//! Everything here is plain state with no DOM, timer, or framework types;
//! rendering and scheduling live in companion crates (`dioxus-headway`).

pub mod animator;
pub mod direction;
pub mod intent;
pub mod signal;

#[cfg(test)]
mod flow_tests;

pub use animator::{AnimatorConfig, AnimatorPhase, ProgressAnimator};
pub use direction::{Axis, Direction, DirectionParseError, Edge, GrowthOrigin};
pub use intent::{Destination, DestinationParts, NavigationIntent};
pub use signal::{NavigationSignal, NavigationWatch};
