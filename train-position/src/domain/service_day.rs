//! Weekday/holiday classification for conditional stops.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Kind of operating day, used to resolve weekday-only and holiday-only
/// stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceDay {
    #[default]
    Weekday,
    Holiday,
}

impl ServiceDay {
    /// Classify a calendar date.
    ///
    /// Saturdays, Sundays and any date in `public_holidays` run the holiday
    /// timetable.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use train_position::domain::ServiceDay;
    ///
    /// let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let saturday = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
    /// assert_eq!(ServiceDay::for_date(friday, &[]), ServiceDay::Weekday);
    /// assert_eq!(ServiceDay::for_date(saturday, &[]), ServiceDay::Holiday);
    /// ```
    pub fn for_date(date: NaiveDate, public_holidays: &[NaiveDate]) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => ServiceDay::Holiday,
            _ if public_holidays.contains(&date) => ServiceDay::Holiday,
            _ => ServiceDay::Weekday,
        }
    }
}
