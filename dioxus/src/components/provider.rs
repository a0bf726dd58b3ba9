//! Navigation progress provider
//!
//! Owns the [`NavigationSignal`] for a subtree, mirrors it into a reactive
//! flag, watches the current path, and provides [`NavigationContext`] to
//! descendants. Mounts the progress bar itself, so wrapping an app in
//! [`NavigationProgress`] is all the setup a caller needs.

use dioxus::prelude::*;
use headway_core::{AnimatorConfig, Direction, NavigationSignal};
use tracing::debug;

use crate::components::bar::{DEFAULT_COLOR, DEFAULT_THICKNESS, ProgressBar};
use crate::context::NavigationContext;

/// Props for the NavigationProgress provider
#[derive(Props, Clone, PartialEq)]
pub struct NavigationProgressProps {
    /// Signal to observe; defaults to a signal scoped to this provider.
    /// Pass [`NavigationSignal::shared`] to cooperate with code that raises
    /// the process-wide signal.
    pub signal: Option<NavigationSignal>,
    /// Current route path; the bar completes when this changes
    #[props(into)]
    pub current_path: ReadOnlySignal<String>,
    /// Called with the destination href when an intercepted link navigates
    pub on_navigate: EventHandler<String>,
    /// Edge placement and fill growth for the mounted bar
    #[props(default)]
    pub direction: Direction,
    /// Fill color for the mounted bar
    #[props(default = DEFAULT_COLOR.to_string())]
    pub color: String,
    /// Bar thickness in pixels
    #[props(default = DEFAULT_THICKNESS)]
    pub thickness: f32,
    /// Extra class for the bar's overlay container
    #[props(default)]
    pub container_class: String,
    /// Extra inline style for the bar's overlay container
    #[props(default)]
    pub container_style: String,
    /// Extra class for the bar's fill element
    #[props(default)]
    pub bar_class: String,
    /// Extra inline style for the bar's fill element
    #[props(default)]
    pub bar_style: String,
    /// Tick and completion timing for the mounted bar
    #[props(default)]
    pub timing: AnimatorConfig,
    pub children: Element,
}

/// Provides navigation state to descendants and renders the progress bar
///
/// The provider is the only writer that clears the signal: it observes
/// `current_path` and lowers the flag when the path settles on a new value.
/// Raising is left to [`Link`](crate::Link) or to callers holding the signal.
#[component]
pub fn NavigationProgress(props: NavigationProgressProps) -> Element {
    let signal = use_hook(|| props.signal.clone().unwrap_or_default());
    let mut navigating = use_signal(|| signal.is_navigating());
    let current_path = props.current_path;

    // Bridge the watch channel into the reactive flag. The task parks on
    // `changed` and ends on its own once every signal handle is gone.
    use_future({
        let signal = signal.clone();
        move || {
            let mut watch = signal.watch();
            async move {
                while let Some(value) = watch.changed().await {
                    navigating.set(value);
                }
            }
        }
    });

    // Completion trigger: the path settling on a new value means the route
    // finished loading. Skips the mount-time observation so a bar is not
    // completed before anything started.
    let mut last_path = use_signal(|| None::<String>);
    use_effect({
        let signal = signal.clone();
        move || {
            let path = current_path.read().clone();
            match &*last_path.peek() {
                Some(previous) if *previous != path => {
                    debug!(path = %path, "location changed, navigation settled");
                    signal.set_navigating(false);
                }
                Some(_) => return,
                None => {}
            }
            last_path.set(Some(path));
        }
    });

    use_context_provider(|| {
        NavigationContext::new(
            signal.clone(),
            navigating.into(),
            current_path,
            props.on_navigate,
        )
    });

    rsx! {
        ProgressBar {
            direction: props.direction,
            color: props.color.clone(),
            thickness: props.thickness,
            container_class: props.container_class.clone(),
            container_style: props.container_style.clone(),
            bar_class: props.bar_class.clone(),
            bar_style: props.bar_style.clone(),
            timing: props.timing.clone(),
        }
        {props.children}
    }
}
