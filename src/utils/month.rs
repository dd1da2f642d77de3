use chrono::{Datelike, Days, Local, NaiveDate};

/// Source of "today" for month bucketing.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the server's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day, used by tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// First day of the month containing `date`.
///
/// Operations are stamped with this value at creation and matched against it
/// by exact equality, so an operation never moves to another bucket.
pub fn month_bucket(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(date.year(), date.month(), *day).is_some())
        .unwrap_or(28)
}

/// Elapsed share of the month as a whole percentage, rounded half up.
pub fn month_completion(date: NaiveDate) -> u32 {
    let days = days_in_month(date);
    (200 * date.day() + days) / (2 * days)
}
