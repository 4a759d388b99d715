//! Today's feeding log.
//!
//! The log is owned by the caller and handed to the calculations by
//! reference. Entries keep their time as the text the user typed; nothing
//! here requires it to parse, and duplicate times are allowed.

pub mod time;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LogError;

pub use time::{display_time, parse_time_of_day, ParsedTime, TimeFormat, TIME_FORMATS};

/// A single feed, logged or planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEvent {
    pub time: String,
    pub amount_ml: f64,
    #[serde(default)]
    pub completed: bool,
}

impl FeedEvent {
    pub fn new(time: impl Into<String>, amount_ml: f64, completed: bool) -> Self {
        Self {
            time: time.into(),
            amount_ml,
            completed,
        }
    }

    pub fn parsed_time(&self) -> ParsedTime {
        parse_time_of_day(&self.time)
    }
}

/// Partial update applied by [`FeedingLog::edit`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEdit {
    pub time: Option<String>,
    pub amount_ml: Option<f64>,
    pub completed: Option<bool>,
}

/// Ordered sequence of today's feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedingLog {
    events: Vec<FeedEvent>,
}

fn check_amount(amount_ml: f64) -> Result<(), LogError> {
    if amount_ml.is_finite() && amount_ml >= 0.0 {
        Ok(())
    } else {
        Err(LogError::InvalidAmount { amount_ml })
    }
}

impl FeedingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The overnight feeds a fresh tracker starts with.
    pub fn sample() -> Self {
        Self::from(vec![
            FeedEvent::new("1:00 AM", 60.0, true),
            FeedEvent::new("4:00 AM", 75.0, true),
            FeedEvent::new("7:00 AM", 60.0, true),
            FeedEvent::new("9:00 AM", 30.0, true),
        ])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FeedEvent> {
        self.events.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedEvent> {
        self.events.iter()
    }

    pub fn completed(&self) -> impl Iterator<Item = &FeedEvent> {
        self.events.iter().filter(|event| event.completed)
    }

    /// Total volume of completed feeds.
    pub fn consumed_ml(&self) -> f64 {
        self.completed().map(|event| event.amount_ml).sum()
    }

    /// Latest completed feed whose time parses, anchored to `date`.
    pub fn latest_completed_on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        self.completed()
            .filter_map(|event| event.parsed_time().on(date))
            .max()
    }

    /// Append a feed and return its position.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidAmount`] for a negative or non-finite amount.
    pub fn add(&mut self, event: FeedEvent) -> Result<usize, LogError> {
        check_amount(event.amount_ml)?;
        self.events.push(event);
        Ok(self.events.len() - 1)
    }

    /// Apply `edit` to the feed at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::IndexOutOfRange`] for an unknown position and
    /// [`LogError::InvalidAmount`] for a bad amount; the entry is untouched
    /// on error.
    pub fn edit(&mut self, index: usize, edit: FeedEdit) -> Result<&FeedEvent, LogError> {
        if let Some(amount_ml) = edit.amount_ml {
            check_amount(amount_ml)?;
        }
        let len = self.events.len();
        let event = self
            .events
            .get_mut(index)
            .ok_or(LogError::IndexOutOfRange { index, len })?;
        if let Some(time) = edit.time {
            event.time = time;
        }
        if let Some(amount_ml) = edit.amount_ml {
            event.amount_ml = amount_ml;
        }
        if let Some(completed) = edit.completed {
            event.completed = completed;
        }
        Ok(event)
    }

    /// Remove and return the feed at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::IndexOutOfRange`] for an unknown position.
    pub fn remove(&mut self, index: usize) -> Result<FeedEvent, LogError> {
        if index >= self.events.len() {
            return Err(LogError::IndexOutOfRange {
                index,
                len: self.events.len(),
            });
        }
        Ok(self.events.remove(index))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl From<Vec<FeedEvent>> for FeedingLog {
    fn from(events: Vec<FeedEvent>) -> Self {
        Self { events }
    }
}

impl<'a> IntoIterator for &'a FeedingLog {
    type Item = &'a FeedEvent;
    type IntoIter = std::slice::Iter<'a, FeedEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
