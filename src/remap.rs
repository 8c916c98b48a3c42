use crate::error::RemapError;
use crate::srt::Subtitle;
use crate::time::{Time, TimeInterval};

use std::convert::TryFrom;

use log::debug;

/// Maps `[x0, x1]` onto `[y0, y1]` with truncating integer division.
struct LinearMap {
    x0: i128,
    x1: i128,
    y0: i128,
    y1: i128,
}

impl LinearMap {
    /// `None` when the scaled offset cannot be held in an `i128`.
    fn apply(&self, x: u64) -> Option<i128> {
        let dx = i128::from(x) - self.x0;
        let dy = self.y1 - self.y0;
        let span = self.x1 - self.x0;

        // Each factor is below 2^64, so the product always fits in a u128.
        let scaled = dx.unsigned_abs() * dy.unsigned_abs() / span.unsigned_abs();
        let scaled = i128::try_from(scaled).ok()?;
        if (dx < 0) ^ (dy < 0) ^ (span < 0) {
            self.y0.checked_sub(scaled)
        } else {
            self.y0.checked_add(scaled)
        }
    }
}

/// Stretches every subtitle so that the first one starts at `target.start`
/// and the last one ends at `target.end`, scaling everything in between by
/// the same factor.
///
/// Only the intervals change; order, indices and content are untouched. On
/// error `subs` is left exactly as it was.
pub fn remap(subs: &mut [Subtitle], target: &TimeInterval) -> Result<(), RemapError> {
    let (first, last) = match (subs.first(), subs.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RemapError::EmptySequence),
    };
    let (y0, y1) = match (target.start.checked_millis(), target.end.checked_millis()) {
        (Some(y0), Some(y1)) => (y0, y1),
        _ => return Err(RemapError::TargetOverflow),
    };
    if y0 == y1 {
        return Err(RemapError::DegenerateTarget);
    }

    let x0 = millis_of(first.interval.start, 1)?;
    let x1 = millis_of(last.interval.end, subs.len())?;
    if x0 == x1 {
        return Err(RemapError::DegenerateSource);
    }
    debug!(
        "Remapping [{} --> {}] onto [{}]",
        first.interval.start, last.interval.end, target
    );

    let map = LinearMap {
        x0: i128::from(x0),
        x1: i128::from(x1),
        y0: i128::from(y0),
        y1: i128::from(y1),
    };

    let intervals = subs
        .iter()
        .enumerate()
        .map(|(pos, sub)| -> Result<TimeInterval, RemapError> {
            let cue = pos + 1;
            let shift = |time: Time| -> Result<Time, RemapError> {
                let millis = map
                    .apply(millis_of(time, cue)?)
                    .ok_or(RemapError::Overflow { cue })?;
                u64::try_from(millis)
                    .map(Time::from_millis)
                    .map_err(|_| RemapError::OutOfRange { cue, millis })
            };
            Ok(TimeInterval::new(
                shift(sub.interval.start)?,
                shift(sub.interval.end)?,
            ))
        })
        .collect::<Result<Vec<_>, RemapError>>()?;

    for (sub, interval) in subs.iter_mut().zip(intervals) {
        sub.interval = interval;
    }
    Ok(())
}

fn millis_of(time: Time, cue: usize) -> Result<u64, RemapError> {
    time.checked_millis().ok_or(RemapError::Overflow { cue })
}
