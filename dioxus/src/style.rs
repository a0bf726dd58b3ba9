//! Inline styles for the overlay bar
//!
//! The bar renders as two plain `div`s: a fixed-position container pinned to
//! one screen edge, and a fill that spans it and is scaled along the growth
//! axis. Everything is assembled as inline CSS so the bar needs no stylesheet
//! and survives ancestor clipping.

use headway_core::{Axis, Direction, Edge};

/// Style for the fixed overlay container
///
/// Pins the bar to the edge implied by `direction`, spanning the full edge
/// at `thickness` pixels. Caller-supplied styles are appended last so they
/// win over the defaults.
pub(crate) fn container_style(direction: Direction, thickness: f32, extra: &str) -> String {
    let placement = match direction.edge() {
        Edge::Top => format!("top:0;left:0;width:100%;height:{thickness}px;"),
        Edge::Bottom => format!("bottom:0;left:0;width:100%;height:{thickness}px;"),
        Edge::Left => format!("top:0;left:0;width:{thickness}px;height:100%;"),
        Edge::Right => format!("top:0;right:0;width:{thickness}px;height:100%;"),
    };

    let mut style = format!("position:fixed;z-index:50;{placement}");
    style.push_str(extra);
    style
}

/// Style for the fill element
///
/// The fill spans the container and is scaled to `percent / 100` along the
/// direction's axis, anchored at its growth origin so it stretches the right
/// way. The short transform transition smooths the jumps between ticks.
pub(crate) fn fill_style(direction: Direction, percent: f32, color: &str, extra: &str) -> String {
    let scale = percent / 100.0;
    let transform = match direction.axis() {
        Axis::X => format!("scaleX({scale})"),
        Axis::Y => format!("scaleY({scale})"),
    };

    let mut style = format!(
        "width:100%;height:100%;background-color:{color};box-shadow:0 2px 10px {color};\
        transform:{transform};transform-origin:{origin};transition:transform 300ms ease-out;",
        origin = direction.origin().as_str(),
    );
    style.push_str(extra);
    style
}
