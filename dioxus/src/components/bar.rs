//! The progress bar overlay
//!
//! Observes the enclosing provider's navigation flag and drives a
//! [`ProgressAnimator`] through its episode: a repeating tick task fabricates
//! progress while navigating, and a one-shot task dismisses the bar after the
//! completion delay. The ticker is always cancelled before the completion
//! delay starts, so no late tick can land after the jump to 100.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use headway_core::{AnimatorConfig, AnimatorPhase, Direction, ProgressAnimator};

use crate::context::use_navigation;
use crate::style;

/// Default fill color
pub const DEFAULT_COLOR: &str = "#00b207";

/// Default bar thickness in pixels
pub const DEFAULT_THICKNESS: f32 = 4.0;

/// Props for the ProgressBar component
#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// Edge placement and fill growth, see [`Direction`]
    #[props(default)]
    pub direction: Direction,
    /// Fill color, also used for the glow shadow
    #[props(default = DEFAULT_COLOR.to_string())]
    pub color: String,
    /// Bar thickness in pixels
    #[props(default = DEFAULT_THICKNESS)]
    pub thickness: f32,
    /// Extra class for the overlay container
    #[props(default)]
    pub container_class: String,
    /// Extra inline style for the overlay container, appended after the defaults
    #[props(default)]
    pub container_style: String,
    /// Extra class for the fill element
    #[props(default)]
    pub bar_class: String,
    /// Extra inline style for the fill element, appended after the defaults
    #[props(default)]
    pub bar_style: String,
    /// Tick and completion timing; read once when the bar mounts
    #[props(default)]
    pub timing: AnimatorConfig,
}

/// A thin bar pinned to a screen edge, animating while navigation is in flight
///
/// Must be mounted under a [`NavigationProgress`](crate::NavigationProgress)
/// provider (the provider mounts one itself; extra instances share its
/// signal). Renders nothing while idle.
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let navigation = use_navigation();
    let navigating = navigation.navigating();

    let mut animator = use_signal(|| ProgressAnimator::new(props.timing.clone()));
    let mut ticker: Signal<Option<Task>> = use_signal(|| None);
    let mut dismisser: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let navigating = navigating();
        let phase = animator.peek().phase();

        if navigating && phase != AnimatorPhase::Ticking {
            // Raised, possibly during the completion window of the previous
            // episode: drop the pending dismissal and restart from zero.
            if let Some(task) = dismisser.write().take() {
                task.cancel();
            }
            animator.write().start();

            let tick = animator.peek().config().tick_interval.as_millis() as u32;
            let task = spawn(async move {
                loop {
                    TimeoutFuture::new(tick).await;
                    animator.write().advance();
                }
            });
            if let Some(stale) = ticker.write().replace(task) {
                stale.cancel();
            }
        } else if !navigating && phase == AnimatorPhase::Ticking {
            // Cleared: stop the ticker before the completion delay starts.
            if let Some(task) = ticker.write().take() {
                task.cancel();
            }
            animator.write().complete();

            let delay = animator.peek().config().completion_delay.as_millis() as u32;
            let task = spawn(async move {
                TimeoutFuture::new(delay).await;
                animator.write().dismiss();
            });
            dismisser.set(Some(task));
        }
    });

    // Unmounting must not leave a task mutating disposed state
    use_drop(move || {
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        if let Some(task) = dismisser.write().take() {
            task.cancel();
        }
    });

    let (visible, percent) = {
        let state = animator.read();
        (state.is_visible(), state.percent())
    };
    let container = style::container_style(props.direction, props.thickness, &props.container_style);
    let fill = style::fill_style(props.direction, percent, &props.color, &props.bar_style);
    let container_class = (!props.container_class.is_empty()).then(|| props.container_class.clone());
    let bar_class = (!props.bar_class.is_empty()).then(|| props.bar_class.clone());

    rsx! {
        if visible {
            div {
                class: container_class,
                style: "{container}",
                div {
                    class: bar_class,
                    style: "{fill}",
                }
            }
        }
    }
}
