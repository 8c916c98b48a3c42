use crate::error::ParseError;
use crate::parser;

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use std::time::Duration;

const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

/// A timestamp in the `HH:MM:SS,mmm` form used by SRT files.
///
/// The fields are not range-checked, so a hand-built `Time` may carry
/// `minute = 75`. Comparison and arithmetic all go through
/// [`Time::to_millis`], which means two differently-normalised values
/// describing the same instant compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
    pub millisecond: u64,
}

impl Time {
    pub fn new(hour: u64, minute: u64, second: u64, millisecond: u64) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    pub fn from_millis(total: u64) -> Self {
        Self {
            hour: total / MILLIS_PER_HOUR,
            minute: (total / MILLIS_PER_MINUTE) % 60,
            second: (total / MILLIS_PER_SECOND) % 60,
            millisecond: total % MILLIS_PER_SECOND,
        }
    }

    /// Absolute offset in milliseconds, or `None` if it does not fit in a `u64`.
    pub fn checked_millis(&self) -> Option<u64> {
        self.hour
            .checked_mul(MILLIS_PER_HOUR)?
            .checked_add(self.minute.checked_mul(MILLIS_PER_MINUTE)?)?
            .checked_add(self.second.checked_mul(MILLIS_PER_SECOND)?)?
            .checked_add(self.millisecond)
    }

    /// Absolute offset in milliseconds. Saturates at `u64::MAX` for
    /// hand-built values too large to represent.
    pub fn to_millis(&self) -> u64 {
        self.checked_millis().unwrap_or(u64::MAX)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.to_millis() == other.to_millis()
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_millis().cmp(&other.to_millis())
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time::from_millis(self.to_millis().saturating_add(rhs.to_millis()))
    }
}

/// Subtraction yields the distance between two timestamps, so the operand
/// order does not matter and the result is never negative.
impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        let (lhs, rhs) = (self.to_millis(), rhs.to_millis());
        Time::from_millis(if lhs > rhs { lhs - rhs } else { rhs - lhs })
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        *self = *self + rhs;
    }
}

impl SubAssign for Time {
    fn sub_assign(&mut self, rhs: Time) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Time {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{:02}:{:02}:{:02},{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_time(s)
    }
}

impl From<Duration> for Time {
    fn from(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Time::from_millis(millis)
    }
}

impl From<Time> for Duration {
    fn from(time: Time) -> Self {
        Duration::from_millis(time.to_millis())
    }
}

/// The display window of a single cue. Both ends are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: Time,
    pub end: Time,
}

impl TimeInterval {
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Length of the window. Only meaningful when `start <= end`.
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    pub fn to_millis(&self) -> u64 {
        self.duration().to_millis()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} --> {}", self.start, self.end)
    }
}

impl FromStr for TimeInterval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_interval(s)
    }
}
