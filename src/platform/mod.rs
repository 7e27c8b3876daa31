//! Platform abstraction layer
//!
//! The window, keyboard and clock belong to whoever hosts the game. This
//! module defines what the game needs from them, plus implementations for
//! headless runs and tests:
//! - `InputSource` / `Key`: polled key state
//! - `Clock`: monotonic seconds
//! - `FrameTimer`: clamped per-frame delta time
//! - `Autopilot`: an input source that plays the game by itself

pub mod autopilot;

pub use autopilot::Autopilot;

use std::collections::HashSet;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Jump / start
    Space,
}

/// Polled keyboard state
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Monotonic time in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Clock advanced by hand (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }

    pub fn set(&mut self, now: f64) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}

/// Set of currently held keys, driven by press/release calls
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }
}

impl InputSource for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Turns consecutive clock samples into a delta time
///
/// Deltas are clamped to `[0, max_dt]` so a stalled frame (window drag,
/// debugger pause) can't teleport obstacles through the player.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last: f64,
    max_dt: f32,
}

impl FrameTimer {
    pub fn new(start: f64, max_dt: f32) -> Self {
        Self { last: start, max_dt }
    }

    /// Delta since the previous sample
    pub fn advance(&mut self, now: f64) -> f32 {
        let raw = (now - self.last) as f32;
        self.last = now;
        if raw > self.max_dt {
            log::debug!("Frame stall of {:.3}s clamped to {:.3}s", raw, self.max_dt);
        }
        raw.clamp(0.0, self.max_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timer_delta() {
        let mut timer = FrameTimer::new(0.0, 0.1);
        assert!((timer.advance(0.016) - 0.016).abs() < 1e-6);
        assert!((timer.advance(0.032) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_frame_timer_clamps_stall() {
        let mut timer = FrameTimer::new(0.0, 0.1);
        assert_eq!(timer.advance(5.0), 0.1);
        // Next frame measures from the stalled sample, not from the clamp
        assert!((timer.advance(5.02) - 0.02).abs() < 1e-5);
    }

    #[test]
    fn test_frame_timer_never_negative() {
        let mut timer = FrameTimer::new(10.0, 0.1);
        assert_eq!(timer.advance(9.0), 0.0);
    }

    #[test]
    fn test_key_state() {
        let mut keys = KeyState::default();
        assert!(!keys.is_key_down(Key::Space));
        keys.press(Key::Space);
        assert!(keys.is_key_down(Key::Space));
        keys.release(Key::Space);
        assert!(!keys.is_key_down(Key::Space));
    }

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::new(1.0);
        clock.advance(0.5);
        assert_eq!(clock.now(), 1.5);
        clock.set(3.0);
        assert_eq!(clock.now(), 3.0);
    }
}
