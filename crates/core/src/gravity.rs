//! Gravity clock - the timer that drives automatic descent
//!
//! The session owns one `GravityClock`. After every transition it computes
//! the desired clock state (`Some(key)` while playing and not frozen, `None`
//! otherwise) and calls [`GravityClock::reconcile`]. A changed key re-arms the
//! clock, which restarts its accumulator; `None` disarms it.
//!
//! The clock is driven by elapsed time from the fixed-timestep loop. Each fire
//! restarts the accumulator at zero; there is no drift compensation.

use crate::types::{GRAVITY_DECAY, GRAVITY_FLOOR_MS};

/// Descent interval for a level: `max(50, base * 0.9^(level - 1))`, rounded
/// to the nearest millisecond.
pub fn gravity_interval_ms(level: u32, base_speed_ms: u32) -> u32 {
    let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let interval = (base_speed_ms as f64 * GRAVITY_DECAY.powi(exponent)).round();
    (interval as u32).max(GRAVITY_FLOOR_MS)
}

/// Inputs the armed interval depends on. A change re-arms the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GravityKey {
    pub level: u32,
    pub base_speed_ms: u32,
}

impl GravityKey {
    pub fn interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level, self.base_speed_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    key: GravityKey,
    interval_ms: u32,
    elapsed_ms: u32,
}

/// Arm/disarm scheduler for automatic soft drops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GravityClock {
    armed: Option<Armed>,
}

impl GravityClock {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Arm (or re-arm) with a fresh accumulator.
    pub fn arm(&mut self, key: GravityKey) {
        self.armed = Some(Armed {
            key,
            interval_ms: key.interval_ms(),
            elapsed_ms: 0,
        });
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Current interval, if armed
    pub fn interval_ms(&self) -> Option<u32> {
        self.armed.map(|a| a.interval_ms)
    }

    /// Time accumulated toward the next fire, if armed
    pub fn elapsed_ms(&self) -> Option<u32> {
        self.armed.map(|a| a.elapsed_ms)
    }

    /// Bring the clock in line with the desired state.
    ///
    /// Returns true if the clock was armed, re-armed or disarmed.
    pub fn reconcile(&mut self, desired: Option<GravityKey>) -> bool {
        match (self.armed, desired) {
            (None, None) => false,
            (Some(current), Some(key)) if current.key == key => false,
            (_, Some(key)) => {
                self.arm(key);
                true
            }
            (Some(_), None) => {
                self.disarm();
                true
            }
        }
    }

    /// Advance by `elapsed_ms`. Returns true when the interval elapsed, at
    /// most once per call.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };

        armed.elapsed_ms = armed.elapsed_ms.saturating_add(elapsed_ms);
        if armed.elapsed_ms >= armed.interval_ms {
            armed.elapsed_ms = 0;
            return true;
        }
        false
    }
}
