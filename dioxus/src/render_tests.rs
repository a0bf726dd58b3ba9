use dioxus::prelude::*;

use crate::{Direction, Link, NavigationProgress, ProgressBar, try_use_navigation, use_navigation};

fn render_once(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
fn IdleApp() -> Element {
    let path = use_signal(|| String::from("/home"));
    rsx! {
        NavigationProgress {
            current_path: path,
            on_navigate: move |_| {},
            main { "welcome home" }
        }
    }
}

#[test]
fn test_idle_provider_renders_children_without_bar() {
    let html = render_once(IdleApp);
    assert!(html.contains("welcome home"), "children missing: {html}");
    assert!(
        !html.contains("position:fixed"),
        "idle bar leaked into markup: {html}"
    );
}

#[component]
fn DualBarApp() -> Element {
    let path = use_signal(|| String::from("/home"));
    rsx! {
        NavigationProgress {
            current_path: path,
            on_navigate: move |_| {},
            ProgressBar { direction: Direction::BottomToLeft, color: "#ff3366" }
            p { "content" }
        }
    }
}

#[test]
fn test_extra_bar_mounts_under_provider() {
    let html = render_once(DualBarApp);
    assert!(html.contains("content"), "children missing: {html}");
    assert!(!html.contains("position:fixed"), "idle bars must render nothing: {html}");
}

#[component]
fn PlainLink() -> Element {
    rsx! {
        Link {
            to: "/pricing",
            target: "_blank",
            class: "cta",
            id: "pricing",
            rel: "noopener",
            "See pricing"
        }
    }
}

#[test]
fn test_link_renders_anchor_passthrough() {
    let html = render_once(PlainLink);
    assert!(html.contains(r#"href="/pricing""#), "{html}");
    assert!(html.contains(r#"target="_blank""#), "{html}");
    assert!(html.contains(r#"class="cta""#), "{html}");
    assert!(html.contains(r#"id="pricing""#), "{html}");
    assert!(html.contains(r#"rel="noopener""#), "{html}");
    assert!(html.contains("See pricing"), "{html}");
}

#[component]
fn LinkedApp() -> Element {
    let path = use_signal(|| String::from("/docs"));
    rsx! {
        NavigationProgress {
            current_path: path,
            on_navigate: move |_| {},
            Link { to: "/docs/install", "Install" }
        }
    }
}

#[test]
fn test_link_inside_provider_renders_anchor() {
    let html = render_once(LinkedApp);
    assert!(html.contains(r#"href="/docs/install""#), "{html}");
    assert!(html.contains("Install"), "{html}");
}

#[component]
fn ContextProbe() -> Element {
    let status = if try_use_navigation().is_some() {
        "reachable"
    } else {
        "unreachable"
    };
    rsx! { span { "navigation {status}" } }
}

#[component]
fn OrphanProbe() -> Element {
    rsx! { ContextProbe {} }
}

#[test]
fn test_context_absent_outside_provider() {
    let html = render_once(OrphanProbe);
    assert!(html.contains("navigation unreachable"), "{html}");
}

#[component]
fn ProvidedProbe() -> Element {
    let path = use_signal(|| String::from("/home"));
    rsx! {
        NavigationProgress {
            current_path: path,
            on_navigate: move |_| {},
            ContextProbe {}
        }
    }
}

#[test]
fn test_context_provided_to_descendants() {
    let html = render_once(ProvidedProbe);
    assert!(html.contains("navigation reachable"), "{html}");
}

#[component]
fn PathProbe() -> Element {
    let navigation = use_navigation();
    let path = navigation.current_path();
    rsx! { span { "at {path}" } }
}

#[component]
fn PathApp() -> Element {
    let path = use_signal(|| String::from("/reports/weekly"));
    rsx! {
        NavigationProgress {
            current_path: path,
            on_navigate: move |_| {},
            PathProbe {}
        }
    }
}

#[test]
fn test_current_path_flows_through_context() {
    let html = render_once(PathApp);
    assert!(html.contains("at /reports/weekly"), "{html}");
}

#[component]
fn OrphanConsumer() -> Element {
    let _navigation = use_navigation();
    rsx! { div {} }
}

#[test]
#[should_panic(expected = "NavigationProgress")]
fn test_use_navigation_panics_without_provider() {
    render_once(OrphanConsumer);
}

#[component]
fn OrphanBar() -> Element {
    rsx! { ProgressBar {} }
}

#[test]
#[should_panic(expected = "NavigationProgress")]
fn test_progress_bar_panics_without_provider() {
    render_once(OrphanBar);
}
