use time::{Date, OffsetDateTime};

/// Source of "now" for days-since arithmetic.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock stuck at one instant. Used for reproducible runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self(now)
    }

    /// Midnight UTC on the given day.
    pub fn on(date: Date) -> Self {
        Self(date.midnight().assume_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Whole days elapsed between `date` and `now`, rounded down.
/// Dates in the future count as watered today.
pub fn days_since(date: OffsetDateTime, now: OffsetDateTime) -> u32 {
    let elapsed = now - date;
    if elapsed.is_negative() {
        return 0;
    }
    u32::try_from(elapsed.whole_days()).unwrap_or(u32::MAX)
}
