//! Daily time-of-day trigger.

use chrono::{Duration, NaiveDateTime, NaiveTime, ParseError};
use std::fmt;

/// Fires once per day at a fixed local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTrigger {
    at: NaiveTime,
}

impl DailyTrigger {
    pub fn new(at: NaiveTime) -> Self {
        Self { at }
    }

    /// Parse `HH:MM` or `HH:MM:SS`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .map(Self::new)
    }

    #[cfg(test)]
    pub fn at(&self) -> NaiveTime {
        self.at
    }

    /// First trigger instant strictly after `now`.
    pub fn next_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.at);
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

impl fmt::Display for DailyTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.at.format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_parse() {
        let trigger = DailyTrigger::parse("09:00").unwrap();
        assert_eq!(trigger.at(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(trigger.to_string(), "09:00");

        let trigger = DailyTrigger::parse("17:30:15").unwrap();
        assert_eq!(trigger.at(), NaiveTime::from_hms_opt(17, 30, 15).unwrap());

        assert!(DailyTrigger::parse("9 o'clock").is_err());
        assert!(DailyTrigger::parse("25:00").is_err());
    }

    #[test]
    fn test_next_after_before_trigger_is_today() {
        let trigger = DailyTrigger::parse("09:00").unwrap();
        assert_eq!(trigger.next_after(at(14, 8, 59, 59)), at(14, 9, 0, 0));
    }

    #[test]
    fn test_next_after_at_or_past_trigger_is_tomorrow() {
        let trigger = DailyTrigger::parse("09:00").unwrap();
        assert_eq!(trigger.next_after(at(14, 9, 0, 0)), at(15, 9, 0, 0));
        assert_eq!(trigger.next_after(at(14, 9, 0, 1)), at(15, 9, 0, 0));
        assert_eq!(trigger.next_after(at(14, 23, 59, 59)), at(15, 9, 0, 0));
    }

    #[test]
    fn test_next_after_rolls_over_month() {
        let trigger = DailyTrigger::parse("09:00").unwrap();
        let end_of_month = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(trigger.next_after(end_of_month), expected);
    }
}
