use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Source of "today" for date-relative computations.
///
/// Services take a clock instead of reading the system time so that trends
/// and period filters can be tested against a fixed date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}

/// The `days` calendar days ending at `end`, oldest first.
pub fn trailing_days(end: NaiveDate, days: u32) -> Vec<NaiveDate> {
    if days == 0 {
        return Vec::new();
    }
    let start = end - Duration::days(i64::from(days) - 1);
    get_days_between(start, end)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Monday of the ISO week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
