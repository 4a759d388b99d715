//! Parsing of free-form time-of-day text.
//!
//! Feed times are typed by hand ("1:00 AM", "7 pm", "14:30"), so parsing is
//! lenient about case and surrounding whitespace and never fails hard: text
//! that matches no known format is reported as [`ParsedTime::Unparsable`].

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Outcome of parsing one time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "time", rename_all = "snake_case")]
pub enum ParsedTime {
    Parsed(NaiveTime),
    Unparsable,
}

impl ParsedTime {
    pub fn time(self) -> Option<NaiveTime> {
        match self {
            Self::Parsed(time) => Some(time),
            Self::Unparsable => None,
        }
    }

    /// Anchor the time of day to `date`.
    pub fn on(self, date: NaiveDate) -> Option<NaiveDateTime> {
        self.time().map(|time| date.and_time(time))
    }
}

/// Accepted formats, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `1:00 AM`, `12:30 PM`
    TwelveHourWithMinutes,
    /// `7 PM`
    TwelveHour,
    /// `14:30`
    TwentyFourHour,
}

pub const TIME_FORMATS: [TimeFormat; 3] = [
    TimeFormat::TwelveHourWithMinutes,
    TimeFormat::TwelveHour,
    TimeFormat::TwentyFourHour,
];

impl TimeFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::TwelveHourWithMinutes => "%I:%M %p",
            Self::TwelveHour => "%I %p",
            Self::TwentyFourHour => "%H:%M",
        }
    }

    fn parse(self, text: &str) -> Option<NaiveTime> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, text, StrftimeItems::new(self.pattern())).ok()?;
        if self == Self::TwelveHour {
            // chrono needs minutes to build a time; the hour-only form means :00.
            parsed.set_minute(0).ok()?;
        }
        parsed.to_naive_time().ok()
    }
}

/// Parse `text` with the first matching format from [`TIME_FORMATS`].
pub fn parse_time_of_day(text: &str) -> ParsedTime {
    let normalized = text.trim().to_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|format| format.parse(&normalized))
        .map_or(ParsedTime::Unparsable, ParsedTime::Parsed)
}

/// Format a time the way feed times are displayed (`07:30 PM`).
pub fn display_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
