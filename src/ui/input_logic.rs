//! Pure helpers behind button handling: cyclic stepping and debounce.

use crate::ui::ButtonEvent;

/// Step `value` forward by one inside `0..count`, wrapping to 0.
pub fn wrap_next(value: u8, count: u8) -> u8 {
    if value + 1 < count {
        value + 1
    } else {
        0
    }
}

/// Step `value` back by one inside `0..count`, wrapping to `count - 1`.
pub fn wrap_prev(value: u8, count: u8) -> u8 {
    if value == 0 {
        count.saturating_sub(1)
    } else {
        value - 1
    }
}

/// Which presses share a debounce timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// Every button has its own window.
    PerButton,
    /// One window across all buttons.
    Shared,
}

/// Time-window debounce over millisecond timestamps.
///
/// A press is accepted when no press was accepted yet for its slot, or
/// when at least `window_ms` elapsed since the last accepted one.
/// Rejected presses do not move the window.
#[derive(Clone, Debug)]
pub struct Debouncer {
    scope: DebounceScope,
    window_ms: u64,
    last_accepted: [Option<u64>; ButtonEvent::COUNT],
}

impl Debouncer {
    pub const fn new(scope: DebounceScope, window_ms: u64) -> Self {
        Self {
            scope,
            window_ms,
            last_accepted: [None; ButtonEvent::COUNT],
        }
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Decide whether a press of `button` at `now_ms` is a real press.
    pub fn accept(&mut self, button: ButtonEvent, now_ms: u64) -> bool {
        let slot = match self.scope {
            DebounceScope::PerButton => button.index(),
            DebounceScope::Shared => 0,
        };

        let settled = match self.last_accepted[slot] {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.window_ms,
        };

        if settled {
            self.last_accepted[slot] = Some(now_ms);
        }
        settled
    }
}
