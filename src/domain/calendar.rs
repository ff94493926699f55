use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Number of days the observance lasts; day indices outside `1..=OBSERVANCE_DAYS`
/// are rendered as "outside the observance".
pub const OBSERVANCE_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Time left until the observance starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Started,
    Remaining { days: i64, hours: i64, minutes: i64 },
}

/// Day index and countdown for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservanceProgress {
    pub day_index: i64,
    pub countdown: Countdown,
}

/// Where a day index falls relative to the observance period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservancePhase {
    NotStarted,
    Day(i64),
    Finished,
}

/// Pure date arithmetic around a single observance start date.
///
/// All inputs are naive local wall-clock values; no timezone conversion
/// happens here.
#[derive(Debug, Clone, Copy)]
pub struct ObservanceCalendar {
    start: NaiveDate,
}

impl ObservanceCalendar {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// 1-based day of the observance. Not clamped: days before the start give
    /// values `<= 0`, days after the end give values above [`OBSERVANCE_DAYS`].
    pub fn day_index(&self, today: NaiveDate) -> i64 {
        today.signed_duration_since(self.start).num_days() + 1
    }

    pub fn countdown(&self, now: NaiveDateTime) -> Countdown {
        let start = self.start.and_time(NaiveTime::MIN);
        if now >= start {
            return Countdown::Started;
        }

        let total = start.signed_duration_since(now).num_seconds();
        let days = total / SECONDS_PER_DAY;
        let rest = total % SECONDS_PER_DAY;

        Countdown::Remaining {
            days,
            hours: rest / SECONDS_PER_HOUR,
            minutes: (rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        }
    }

    pub fn progress(&self, now: NaiveDateTime) -> ObservanceProgress {
        ObservanceProgress {
            day_index: self.day_index(now.date()),
            countdown: self.countdown(now),
        }
    }

    pub fn phase(day_index: i64) -> ObservancePhase {
        if day_index < 1 {
            ObservancePhase::NotStarted
        } else if day_index > OBSERVANCE_DAYS {
            ObservancePhase::Finished
        } else {
            ObservancePhase::Day(day_index)
        }
    }
}
