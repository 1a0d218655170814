//! Slide navigation state machine.
//!
//! Two states:
//! - **Idle**: `animating == false`, any valid `go_to` is accepted
//! - **Transitioning**: entered on an accepted `go_to`, left only when the
//!   reset alarm fires `duration` later
//!
//! The alarm is a deadline, not a thread. The owner calls [`Navigator::tick`]
//! from its event loop; [`Navigator::go_to`] also fires a due alarm before
//! evaluating its guards, so a timer that expired before an input arrived is
//! always processed first.

mod state;
mod timer;

use std::num::NonZeroUsize;
use std::time::Duration;

use log::debug;

pub use state::{NavigationState, Position, RenderTag, render_tag};
pub use timer::{Clock, ManualClock, SystemClock};

use timer::ResetAlarm;

/// Navigation over a fixed number of slides.
#[derive(Debug)]
pub struct Navigator<C: Clock = SystemClock> {
    len: NonZeroUsize,
    duration: Duration,
    state: NavigationState,
    alarm: ResetAlarm,
    clock: C,
}

impl<C: Clock> Navigator<C> {
    /// Start at slide 0, idle.
    pub fn new(len: NonZeroUsize, duration: Duration, clock: C) -> Self {
        Self {
            len,
            duration,
            state: NavigationState::initial(),
            alarm: ResetAlarm::default(),
            clock,
        }
    }

    /// Request slide `requested`.
    ///
    /// Out of range, same as current, or mid-transition requests are
    /// absorbed without any effect. Returns whether the request was accepted.
    pub fn go_to(&mut self, requested: isize) -> bool {
        self.tick();

        let Ok(requested) = usize::try_from(requested) else {
            return false;
        };
        if requested >= self.len.get() {
            return false;
        }
        if requested == self.state.current_index {
            return false;
        }
        if self.state.animating {
            return false;
        }

        debug!("[Navigator] {} -> {requested}", self.state.current_index);
        self.state = NavigationState {
            current_index: requested,
            prev_index: Some(self.state.current_index),
            animating: true,
        };
        self.alarm.arm(self.clock.now() + self.duration);
        true
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.go_to(self.current_signed() + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current_signed() - 1)
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.last_signed())
    }

    /// Fire the reset alarm if it is due. Returns whether the state changed.
    pub fn tick(&mut self) -> bool {
        if !self.alarm.fire_if_due(self.clock.now()) {
            return false;
        }
        self.state.prev_index = None;
        self.state.animating = false;
        true
    }

    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn is_idle(&self) -> bool {
        !self.state.animating
    }

    pub fn render_tag(&self, index: usize) -> RenderTag {
        render_tag(index, &self.state)
    }

    /// Tags for every slide, in order.
    pub fn render_tags(&self) -> Vec<RenderTag> {
        (0..self.len.get()).map(|i| self.render_tag(i)).collect()
    }

    pub const fn position(&self) -> Position {
        Position {
            current: self.state.current_index + 1,
            total: self.len.get(),
        }
    }

    /// `prev()` has somewhere to go.
    pub const fn can_go_prev(&self) -> bool {
        self.state.current_index > 0
    }

    /// `next()` has somewhere to go.
    pub const fn can_go_next(&self) -> bool {
        self.state.current_index + 1 < self.len.get()
    }

    /// Fraction of the running transition that has elapsed, `None` when idle.
    pub fn transition_progress(&self) -> Option<f32> {
        if !self.state.animating {
            return None;
        }
        let remaining = self.alarm.remaining(self.clock.now())?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = self.duration.saturating_sub(remaining);
        Some((elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Time left until the alarm is due, `None` when idle.
    pub fn time_until_idle(&self) -> Option<Duration> {
        self.alarm.remaining(self.clock.now())
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn current_signed(&self) -> isize {
        self.state.current_index as isize
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn last_signed(&self) -> isize {
        (self.len.get() - 1) as isize
    }
}
