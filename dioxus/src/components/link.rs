//! The intercepting link
//!
//! Renders a plain anchor. A click is classified against the current
//! location first; only a real route transition raises the navigation
//! signal, and the navigation itself is always delegated, either to the
//! host router or, for new tabs and fragment jumps, to the browser.

use dioxus::prelude::*;
use headway_core::{Destination, NavigationIntent};
use tracing::debug;

use crate::context::try_use_navigation;

/// Props for the Link component
#[derive(Props, Clone, PartialEq)]
pub struct LinkProps {
    /// Where the link points; accepts a path string or [`DestinationParts`]
    ///
    /// [`DestinationParts`]: headway_core::DestinationParts
    #[props(into)]
    pub to: Destination,
    /// The anchor's `target` attribute; `_blank` activations never show the bar
    pub target: Option<String>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub id: Option<String>,
    pub rel: Option<String>,
    /// Called after classification for every activation
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// An anchor that shows the progress bar while its navigation is in flight
///
/// Inside a [`NavigationProgress`](crate::NavigationProgress) provider, a
/// click on a cross-page destination raises the navigation signal and hands
/// the route change to the provider's `on_navigate`. Clicks on the current
/// path still delegate but show no bar; `target="_blank"` and `#fragment`
/// destinations keep their default browser behavior. Without a provider the
/// component degrades to a plain anchor.
#[component]
pub fn Link(props: LinkProps) -> Element {
    let navigation = try_use_navigation();
    let href = props.to.href();

    let to = props.to.clone();
    let target = props.target.clone();
    let onclick = props.onclick;

    let handle_click = move |event: MouseEvent| {
        if let Some(navigation) = &navigation {
            let current = navigation.current_path();
            let intent = NavigationIntent::classify(&to, target.as_deref(), &current);
            debug!(href = %to, ?intent, "link activated");

            if intent.delegates() {
                // The anchor default would be a full page load; the host
                // router performs the transition instead.
                event.prevent_default();
                if intent.raises_signal() {
                    navigation.set_navigating(true);
                }
                navigation.navigate(to.href());
            }
        }
        if let Some(onclick) = onclick {
            onclick.call(event);
        }
    };

    rsx! {
        a {
            href: "{href}",
            target: props.target.clone(),
            class: props.class.clone(),
            style: props.style.clone(),
            id: props.id.clone(),
            rel: props.rel.clone(),
            onclick: handle_click,
            {props.children}
        }
    }
}
