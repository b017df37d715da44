use chrono::{NaiveDate, Utc};

/// Calendar source for `data_abertura` and export filenames.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// `today()` as `YYYY-MM-DD`.
    fn today_string(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// Current UTC date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
