use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Source of "now" for badge dates and feedback timestamps.
///
/// `Fixed` keeps rendering and feedback records reproducible in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Calendar date printed on badges: the player's local date, not UTC.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.date_in(&Local)
    }

    /// Calendar date of `now()` as seen in `zone`.
    #[must_use]
    pub fn date_in<Tz: TimeZone>(&self, zone: &Tz) -> NaiveDate {
        self.now().with_timezone(zone).date_naive()
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// 2023-11-14T22:13:20Z.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or_default()
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
