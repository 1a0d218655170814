//! Navigation state and the derived per-slide render tag.

use std::fmt;

/// Current/previous slide tracking.
///
/// Only [`Navigator`](super::Navigator) mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) current_index: usize,
    pub(crate) prev_index: Option<usize>,
    pub(crate) animating: bool,
}

impl NavigationState {
    pub(crate) const fn initial() -> Self {
        Self {
            current_index: 0,
            prev_index: None,
            animating: false,
        }
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Departing slide; `Some` only while animating.
    pub const fn prev_index(&self) -> Option<usize> {
        self.prev_index
    }

    pub const fn is_animating(&self) -> bool {
        self.animating
    }
}

/// Where a slide sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTag {
    /// On screen
    Current,
    /// Departing to the left (forward motion)
    Prev,
    /// Departing to the right (backward motion)
    Next,
    PrevHidden,
    NextHidden,
}

impl RenderTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::PrevHidden => "prev-hidden",
            Self::NextHidden => "next-hidden",
        }
    }

    /// Whether the slide is drawn at all.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Current | Self::Prev | Self::Next)
    }
}

impl fmt::Display for RenderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render tag of slide `index` under `state`.
pub fn render_tag(index: usize, state: &NavigationState) -> RenderTag {
    let current = state.current_index;
    if index == current {
        return RenderTag::Current;
    }
    if state.animating
        && let Some(prev) = state.prev_index
        && index == prev
    {
        return if current > prev {
            RenderTag::Prev
        } else {
            RenderTag::Next
        };
    }
    if index < current {
        RenderTag::PrevHidden
    } else {
        RenderTag::NextHidden
    }
}

/// Human-readable position, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}
