//! Publication year generator.

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;

/// Range of past dates publication years are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationWindow {
    reference_date: NaiveDate,
    days: u64,
}

impl PublicationWindow {
    /// Window ending the day before `reference_date` and spanning `years` years.
    pub fn new(reference_date: NaiveDate, years: u32) -> Self {
        Self {
            reference_date,
            days: u64::from(years.max(1)) * 365,
        }
    }

    /// Draw a past date inside the window and return its year.
    pub fn sample_year<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let back = rng.random_range(1..=self.days);
        self.reference_date
            .checked_sub_days(Days::new(back))
            .unwrap_or(self.reference_date)
            .year()
    }

    /// Earliest year the window can produce.
    pub fn earliest_year(&self) -> i32 {
        self.reference_date
            .checked_sub_days(Days::new(self.days))
            .unwrap_or(self.reference_date)
            .year()
    }

    /// Latest year the window can produce.
    pub fn latest_year(&self) -> i32 {
        self.reference_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.reference_date)
            .year()
    }
}
