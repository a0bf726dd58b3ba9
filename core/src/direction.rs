//! Bar placement and fill-growth geometry
//!
//! A `Direction` names the screen edge a progress bar sits on and the way
//! its fill grows along that edge. The renderer derives everything it needs
//! from the three projections here: anchoring edge, scale axis, and the
//! fixed origin the fill grows away from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the bar sits and which way its fill grows
///
/// The first half is the anchoring edge, the second the growth direction.
/// `TopToRight` is a bar along the top edge filling left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Top edge, filling left → right
    #[default]
    TopToRight,
    /// Top edge, filling right → left
    TopToLeft,
    /// Bottom edge, filling left → right
    BottomToRight,
    /// Bottom edge, filling right → left
    BottomToLeft,
    /// Left edge, filling top → bottom
    LeftToBottom,
    /// Left edge, filling bottom → top
    LeftToTop,
    /// Right edge, filling top → bottom
    RightToBottom,
    /// Right edge, filling bottom → top
    RightToTop,
}

/// Screen edge a bar is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis the fill scales along
///
/// Horizontal bars (top/bottom edges) scale along X, vertical bars
/// (left/right edges) along Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Fixed end of the fill; the bar grows away from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOrigin {
    Left,
    Right,
    Top,
    Bottom,
}

impl GrowthOrigin {
    /// CSS keyword for `transform-origin`
    pub fn as_str(self) -> &'static str {
        match self {
            GrowthOrigin::Left => "left",
            GrowthOrigin::Right => "right",
            GrowthOrigin::Top => "top",
            GrowthOrigin::Bottom => "bottom",
        }
    }
}

impl Direction {
    /// Every direction, in declaration order
    pub const ALL: [Direction; 8] = [
        Direction::TopToRight,
        Direction::TopToLeft,
        Direction::BottomToRight,
        Direction::BottomToLeft,
        Direction::LeftToBottom,
        Direction::LeftToTop,
        Direction::RightToBottom,
        Direction::RightToTop,
    ];

    /// Edge the bar is anchored to
    pub fn edge(self) -> Edge {
        match self {
            Direction::TopToRight | Direction::TopToLeft => Edge::Top,
            Direction::BottomToRight | Direction::BottomToLeft => Edge::Bottom,
            Direction::LeftToBottom | Direction::LeftToTop => Edge::Left,
            Direction::RightToBottom | Direction::RightToTop => Edge::Right,
        }
    }

    /// Axis the fill scales along
    pub fn axis(self) -> Axis {
        match self.edge() {
            Edge::Top | Edge::Bottom => Axis::X,
            Edge::Left | Edge::Right => Axis::Y,
        }
    }

    /// Fixed end the fill grows away from
    ///
    /// A left-to-right fill is pinned at the left, so scaling stretches it
    /// rightward; the vertical pairs work the same way.
    pub fn origin(self) -> GrowthOrigin {
        match self {
            Direction::TopToRight | Direction::BottomToRight => GrowthOrigin::Left,
            Direction::TopToLeft | Direction::BottomToLeft => GrowthOrigin::Right,
            Direction::LeftToBottom | Direction::RightToBottom => GrowthOrigin::Top,
            Direction::LeftToTop | Direction::RightToTop => GrowthOrigin::Bottom,
        }
    }

    /// Kebab-case token, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopToRight => "top-to-right",
            Direction::TopToLeft => "top-to-left",
            Direction::BottomToRight => "bottom-to-right",
            Direction::BottomToLeft => "bottom-to-left",
            Direction::LeftToBottom => "left-to-bottom",
            Direction::LeftToTop => "left-to-top",
            Direction::RightToBottom => "right-to-bottom",
            Direction::RightToTop => "right-to-top",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown direction token in a configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bar direction `{token}`")]
pub struct DirectionParseError {
    pub token: String,
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DirectionParseError {
                token: s.to_string(),
            })
    }
}
