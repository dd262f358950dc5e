//! Clock panel: wall-clock text, greeting and analog hand angles.
//!
//! Pure derived display state; it never touches the timer engines.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Day,
    Night,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPart::Morning,
            12..=17 => DayPart::Day,
            _ => DayPart::Night,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            DayPart::Morning => "Good Morning",
            DayPart::Day => "Good Day",
            DayPart::Night => "Good Night",
        }
    }

    pub fn is_daytime(self) -> bool {
        self != DayPart::Night
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockFace {
    /// e.g. `3:07:09 PM`
    pub time: String,
    /// e.g. `Tuesday, March 4, 2025`
    pub date: String,
    pub greeting: String,
    pub is_daytime: bool,
    /// Degrees clockwise from 12.
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

impl ClockFace {
    pub fn at(now: NaiveDateTime, name: &str) -> Self {
        let (hour, minute, second) = (now.hour(), now.minute(), now.second());
        let part = DayPart::from_hour(hour);

        let greeting = if name.trim().is_empty() {
            part.greeting().to_string()
        } else {
            format!("{}, {}", part.greeting(), name.trim())
        };

        Self {
            time: now.format("%-I:%M:%S %p").to_string(),
            date: now.format("%A, %B %-d, %Y").to_string(),
            greeting,
            is_daytime: part.is_daytime(),
            hour_angle: f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5,
            minute_angle: f64::from(minute) * 6.0,
            second_angle: f64::from(second) * 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn greeting_follows_hour() {
        assert_eq!(ClockFace::at(at(4, 59, 0), "Paul").greeting, "Good Night, Paul");
        assert_eq!(ClockFace::at(at(5, 0, 0), "Paul").greeting, "Good Morning, Paul");
        assert_eq!(ClockFace::at(at(12, 0, 0), "Paul").greeting, "Good Day, Paul");
        assert_eq!(ClockFace::at(at(18, 0, 0), "Paul").greeting, "Good Night, Paul");
        assert_eq!(ClockFace::at(at(9, 0, 0), "  ").greeting, "Good Morning");
    }

    #[test]
    fn daytime_flag() {
        assert!(ClockFace::at(at(17, 59, 0), "").is_daytime);
        assert!(!ClockFace::at(at(23, 0, 0), "").is_daytime);
    }

    #[test]
    fn hand_angles() {
        let face = ClockFace::at(at(15, 30, 45), "");
        assert_eq!(face.hour_angle, 105.0);
        assert_eq!(face.minute_angle, 180.0);
        assert_eq!(face.second_angle, 270.0);
    }

    #[test]
    fn text_formats() {
        let face = ClockFace::at(at(15, 7, 9), "");
        assert_eq!(face.time, "3:07:09 PM");
        assert_eq!(face.date, "Tuesday, March 4, 2025");
    }
}
