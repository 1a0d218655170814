//! Input router: discrete inputs to navigation intents.
//!
//! | Input                                           | Intent  |
//! |-------------------------------------------------|---------|
//! | `ArrowRight` `ArrowDown` `Space` `PageDown` Next | `Next`  |
//! | `ArrowLeft` `ArrowUp` `PageUp` Prev             | `Prev`  |
//! | `Home`                                          | `First` |
//! | `End`                                           | `Last`  |
//! | `Escape`                                        | `Exit`  |

use log::trace;

use crate::navigation::{Clock, Navigator};

/// Keys the router knows about. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Space,
    PageDown,
    PageUp,
    Home,
    End,
    Escape,
    Other,
}

/// On-screen navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Click(NavButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Prev,
    First,
    Last,
    /// Leave the presentation; handled by the shell, not the navigator
    Exit,
}

/// Outcome of [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Not a navigation input
    Ignored,
    /// Matched, but a transition is in flight; the input is discarded
    Dropped,
    /// Matched and handed to the navigator
    Navigated { accepted: bool },
    /// Escape: the shell should return to the listing view
    Exit,
}

impl Routed {
    /// Matched inputs swallow their default effect (scrolling and the like).
    pub const fn suppresses_default(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Mapping table.
pub const fn route(input: Input) -> Option<NavIntent> {
    match input {
        Input::Key(Key::ArrowRight | Key::ArrowDown | Key::Space | Key::PageDown)
        | Input::Click(NavButton::Next) => Some(NavIntent::Next),
        Input::Key(Key::ArrowLeft | Key::ArrowUp | Key::PageUp) | Input::Click(NavButton::Prev) => {
            Some(NavIntent::Prev)
        }
        Input::Key(Key::Home) => Some(NavIntent::First),
        Input::Key(Key::End) => Some(NavIntent::Last),
        Input::Key(Key::Escape) => Some(NavIntent::Exit),
        Input::Key(Key::Other) => None,
    }
}

/// Route `input` and apply it to `nav` if the navigator is idle.
///
/// The idle check happens here, before the navigator is called. `Exit` is not
/// gated.
pub fn dispatch<C: Clock>(nav: &mut Navigator<C>, input: Input) -> Routed {
    let Some(intent) = route(input) else {
        return Routed::Ignored;
    };
    let operation: fn(&mut Navigator<C>) -> bool = match intent {
        NavIntent::Next => Navigator::next,
        NavIntent::Prev => Navigator::prev,
        NavIntent::First => Navigator::first,
        NavIntent::Last => Navigator::last,
        NavIntent::Exit => return Routed::Exit,
    };

    // a reset that is already due counts as idle
    nav.tick();
    if !nav.is_idle() {
        trace!("[Input] {input:?} dropped mid-transition");
        return Routed::Dropped;
    }

    Routed::Navigated {
        accepted: operation(nav),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::num::NonZeroUsize;
    use std::time::Duration;

    use super::*;
    use crate::navigation::ManualClock;

    fn navigator(len: usize) -> (Navigator<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let nav = Navigator::new(
            NonZeroUsize::new(len).unwrap(),
            Duration::from_millis(500),
            clock.clone(),
        );
        (nav, clock)
    }

    // ==================== route tests ====================

    #[test]
    fn test_route_table() {
        for key in [Key::ArrowRight, Key::ArrowDown, Key::Space, Key::PageDown] {
            assert_eq!(route(Input::Key(key)), Some(NavIntent::Next));
        }
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::PageUp] {
            assert_eq!(route(Input::Key(key)), Some(NavIntent::Prev));
        }
        assert_eq!(route(Input::Click(NavButton::Next)), Some(NavIntent::Next));
        assert_eq!(route(Input::Click(NavButton::Prev)), Some(NavIntent::Prev));
        assert_eq!(route(Input::Key(Key::Home)), Some(NavIntent::First));
        assert_eq!(route(Input::Key(Key::End)), Some(NavIntent::Last));
        assert_eq!(route(Input::Key(Key::Escape)), Some(NavIntent::Exit));
        assert_eq!(route(Input::Key(Key::Other)), None);
    }

    // ==================== dispatch tests ====================

    #[test]
    fn test_dispatch_unmatched_is_ignored() {
        let (mut nav, _) = navigator(3);
        let routed = dispatch(&mut nav, Input::Key(Key::Other));
        assert_eq!(routed, Routed::Ignored);
        assert!(!routed.suppresses_default());
    }

    #[test]
    fn test_dispatch_navigates_when_idle() {
        let (mut nav, _) = navigator(3);
        let routed = dispatch(&mut nav, Input::Key(Key::Space));
        assert_eq!(routed, Routed::Navigated { accepted: true });
        assert!(routed.suppresses_default());
        assert_eq!(nav.state().current_index(), 1);
    }

    #[test]
    fn test_dispatch_drops_mid_transition() {
        let (mut nav, clock) = navigator(3);
        dispatch(&mut nav, Input::Key(Key::End));
        let before = *nav.state();

        clock.advance(Duration::from_millis(100));
        let routed = dispatch(&mut nav, Input::Click(NavButton::Prev));
        assert_eq!(routed, Routed::Dropped);
        assert!(routed.suppresses_default());
        assert_eq!(*nav.state(), before);

        // not buffered: after the transition ends nothing happens on its own
        clock.advance(Duration::from_millis(400));
        nav.tick();
        assert_eq!(nav.state().current_index(), 2);
    }

    #[test]
    fn test_dispatch_boundary_is_navigated_but_rejected() {
        let (mut nav, _) = navigator(3);
        let routed = dispatch(&mut nav, Input::Key(Key::ArrowLeft));
        assert_eq!(routed, Routed::Navigated { accepted: false });
        assert!(routed.suppresses_default());
    }

    #[test]
    fn test_dispatch_exit_not_gated() {
        let (mut nav, _) = navigator(3);
        dispatch(&mut nav, Input::Key(Key::ArrowRight));
        assert!(!nav.is_idle());
        assert_eq!(dispatch(&mut nav, Input::Key(Key::Escape)), Routed::Exit);
    }
}
