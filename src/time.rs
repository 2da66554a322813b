use std::fmt;

use chrono::Timelike;

/// Wrap-around maximum substituted for a zero hour.
pub const HOURS_MAX: i32 = 24;
/// Wrap-around maximum substituted for a zero minute.
pub const MINUTES_MAX: i32 = 60;
/// Wrap-around maximum substituted for a zero second.
pub const SECONDS_MAX: i32 = 60;

/// An hours/minutes/seconds triple. Components are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClockTime {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl ClockTime {
    pub const fn new(hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// All three components zero, the "use the current time" sentinel.
    pub const fn is_unset(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Replaces the all-zero sentinel with `clock.now()`; otherwise substitutes
    /// the range maximum for each zero component.
    pub fn normalize(self, clock: &impl Clock) -> Self {
        if self.is_unset() {
            return clock.now();
        }
        Self {
            hours: or_max(self.hours, HOURS_MAX),
            minutes: or_max(self.minutes, MINUTES_MAX),
            seconds: or_max(self.seconds, SECONDS_MAX),
        }
    }

    /// One second later.
    ///
    /// A component carries only once it exceeds its maximum, so `60` is a
    /// reachable seconds or minutes value and `24` a reachable hour. The hour
    /// wraps without carrying into a date. Components are unvalidated, so the
    /// increments wrap at the `i32` bounds instead of overflowing.
    pub fn advance(self) -> Self {
        let (seconds, carry_minutes) = carry(self.seconds.wrapping_add(1), SECONDS_MAX);
        let (minutes, carry_hours) = carry(self.minutes.wrapping_add(carry_minutes), MINUTES_MAX);
        let (hours, _) = carry(self.hours.wrapping_add(carry_hours), HOURS_MAX);
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

fn or_max(value: i32, max: i32) -> i32 {
    if value == 0 {
        max
    } else {
        value
    }
}

/// Returns `(value, carry)`, subtracting `max` once when `value > max`.
fn carry(value: i32, max: i32) -> (i32, i32) {
    if value > max {
        (value - max, 1)
    } else {
        (value, 0)
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> ClockTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        let now = chrono::Local::now();
        ClockTime::new(now.hour() as i32, now.minute() as i32, now.second() as i32)
    }
}

/// A clock stuck at one time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
