//! Projection of the rest of today's feeds.
//!
//! Given how many calories are still missing and when the baby last ate, the
//! projector lays out evenly spaced feeds of the configured size between the
//! next allowed feed time and the evening cutoff. The projection is advisory
//! and rebuilt from scratch on every call:
//!
//! - Nothing is scheduled once the goal is reached.
//! - The first feed is at least `min_spacing` after the latest completed feed.
//! - Feeds are never closer together than `min_interval`, even if that means
//!   the remaining calories cannot all be delivered before the cutoff.
//! - One feed more than the whole number of feeds needed is allowed, as a
//!   buffer for partial feeds.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::log::FeedingLog;

/// Scheduling policy for projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Minimum gap between the latest completed feed and the first suggestion (hours).
    #[serde(default = "default_min_spacing_hours")]
    pub min_spacing_hours: f64,
    /// Floor for the spacing between suggested feeds (hours).
    #[serde(default = "default_min_interval_hours")]
    pub min_interval_hours: f64,
    /// Hour of the day (local) after which no feed is suggested.
    #[serde(default = "default_cutoff_hour")]
    pub cutoff_hour: u32,
}

/// Upper bound for either spacing; a projection never spans more than a day.
pub const MAX_SPACING_HOURS: f64 = 24.0;

fn default_min_spacing_hours() -> f64 {
    1.0
}
fn default_min_interval_hours() -> f64 {
    1.5
}
fn default_cutoff_hour() -> u32 {
    23
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            min_spacing_hours: default_min_spacing_hours(),
            min_interval_hours: default_min_interval_hours(),
            cutoff_hour: default_cutoff_hour(),
        }
    }
}

impl ProjectorConfig {
    /// # Errors
    ///
    /// Returns an error for negative, non-finite or longer than a day
    /// spacings, a zero interval floor, or a cutoff hour outside `0..=23`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("min_spacing_hours", self.min_spacing_hours),
            ("min_interval_hours", self.min_interval_hours),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
            if value > MAX_SPACING_HOURS {
                return Err(ValidationError::TooLarge {
                    field,
                    value,
                    max: MAX_SPACING_HOURS,
                });
            }
        }
        if self.min_interval_hours <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "min_interval_hours",
                value: self.min_interval_hours,
            });
        }
        if self.cutoff_hour > 23 {
            return Err(ValidationError::CutoffHour(self.cutoff_hour));
        }
        Ok(())
    }

    fn cutoff(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.cutoff_hour.min(23), 0, 0).unwrap_or_default()
    }
}

/// How a projection ended. Exactly one applies to every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionOutcome {
    /// Consumed calories already meet or exceed the goal.
    GoalExceeded,
    /// Calories remain but there is no time left before the cutoff.
    TimeExhausted,
    /// At least one feed was suggested.
    ScheduleProduced,
    /// There was time left but no feed fit into it.
    ScheduleEmptyDespiteTime,
}

impl fmt::Display for ProjectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::GoalExceeded => "Daily calorie goal has been exceeded!",
            Self::TimeExhausted => "Not enough time remaining today to complete feeding goal.",
            Self::ScheduleProduced => "Suggested remaining schedule",
            Self::ScheduleEmptyDespiteTime => {
                "Not enough time remaining today to complete feeding goal. \
                 Consider extending feeding schedule or adjusting amounts."
            }
        };
        f.write_str(text)
    }
}

/// One suggested feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub suggested_time: NaiveDateTime,
    pub amount_ml: f64,
    pub calories: f64,
}

/// Result of a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub outcome: ProjectionOutcome,
    pub slots: Vec<ScheduleSlot>,
    /// Spacing between suggested feeds, when the window was large enough to compute one.
    pub interval_hours: Option<f64>,
    pub latest_feed_time: Option<NaiveDateTime>,
    pub start_time: Option<NaiveDateTime>,
    pub end_of_day: Option<NaiveDateTime>,
}

impl Projection {
    fn goal_exceeded() -> Self {
        Self {
            outcome: ProjectionOutcome::GoalExceeded,
            slots: Vec::new(),
            interval_hours: None,
            latest_feed_time: None,
            start_time: None,
            end_of_day: None,
        }
    }

    pub fn total_calories(&self) -> f64 {
        self.slots.iter().map(|slot| slot.calories).sum()
    }

    pub fn total_ml(&self) -> f64 {
        self.slots.iter().map(|slot| slot.amount_ml).sum()
    }
}

/// Per-call inputs to [`ScheduleProjector::project`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectionRequest<'a> {
    pub remaining_calories: f64,
    pub calories_per_feeding: f64,
    pub feeding_size_ml: f64,
    pub log: &'a FeedingLog,
    /// Local wall-clock time the projection is made at.
    pub now: NaiveDateTime,
}

fn hours(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 3_600_000.0
}

fn duration_from_hours(hours: f64) -> Duration {
    Duration::microseconds((hours * 3_600_000_000.0).round() as i64)
}

/// Stateless projector; the same request always yields the same projection.
#[derive(Debug, Clone, Default)]
pub struct ScheduleProjector {
    config: ProjectorConfig,
}

impl ScheduleProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Lay out the remaining feeds for today.
    pub fn project(&self, request: &ProjectionRequest<'_>) -> Projection {
        if request.remaining_calories <= 0.0 {
            tracing::debug!(
                remaining_calories = request.remaining_calories,
                "goal already met"
            );
            return Projection::goal_exceeded();
        }

        let now = request.now;
        let today = now.date();
        let latest_feed_time = request.log.latest_completed_on(today);
        let start_time = self.start_time(now, latest_feed_time);

        let mut end_of_day = today.and_time(self.config.cutoff());
        if start_time.date() > today {
            end_of_day += Duration::days(1);
        }

        let hours_remaining = hours(end_of_day - start_time);
        let feeds_needed = if request.calories_per_feeding > 0.0 {
            request.remaining_calories / request.calories_per_feeding
        } else {
            0.0
        };

        tracing::debug!(
            %start_time,
            %end_of_day,
            hours_remaining,
            feeds_needed,
            "projecting remaining feeds"
        );

        if hours_remaining <= 0.0 || feeds_needed <= 0.0 {
            return Projection {
                outcome: ProjectionOutcome::TimeExhausted,
                slots: Vec::new(),
                interval_hours: None,
                latest_feed_time,
                start_time: Some(start_time),
                end_of_day: Some(end_of_day),
            };
        }

        let interval_hours = (hours_remaining / feeds_needed).max(self.config.min_interval_hours);
        let step = duration_from_hours(interval_hours);
        let max_slots = (feeds_needed.floor() as usize).saturating_add(1);

        let slots: Vec<ScheduleSlot> =
            std::iter::successors(Some(start_time), |time| time.checked_add_signed(step))
                .take(max_slots)
                .take_while(|time| *time <= end_of_day)
                .map(|suggested_time| ScheduleSlot {
                    suggested_time,
                    amount_ml: request.feeding_size_ml,
                    calories: request.calories_per_feeding,
                })
                .collect();

        let outcome = if slots.is_empty() {
            ProjectionOutcome::ScheduleEmptyDespiteTime
        } else {
            ProjectionOutcome::ScheduleProduced
        };
        tracing::debug!(?outcome, slots = slots.len(), interval_hours, "projection done");

        Projection {
            outcome,
            slots,
            interval_hours: Some(interval_hours),
            latest_feed_time,
            start_time: Some(start_time),
            end_of_day: Some(end_of_day),
        }
    }

    fn start_time(&self, now: NaiveDateTime, latest: Option<NaiveDateTime>) -> NaiveDateTime {
        let spacing = duration_from_hours(self.config.min_spacing_hours);
        let after = |latest: NaiveDateTime| {
            latest
                .checked_add_signed(spacing)
                .unwrap_or(NaiveDateTime::MAX)
        };
        match latest {
            // A feed logged in the future still pushes the next one out.
            Some(latest) if latest > now => after(latest),
            Some(latest) => now.max(after(latest)),
            None => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::FeedEvent;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 12)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn request(remaining: f64, log: &FeedingLog, now: NaiveDateTime) -> ProjectionRequest<'_> {
        ProjectionRequest {
            remaining_calories: remaining,
            calories_per_feeding: 100.0,
            feeding_size_ml: 120.0,
            log,
            now,
        }
    }

    #[test]
    fn goal_met_produces_nothing() {
        let log = FeedingLog::sample();
        for remaining in [0.0, -50.0] {
            let projection = ScheduleProjector::new().project(&request(remaining, &log, at(6, 0)));
            assert_eq!(projection.outcome, ProjectionOutcome::GoalExceeded);
            assert!(projection.slots.is_empty());
            assert!(projection.start_time.is_none());
        }
    }

    #[test]
    fn starts_now_without_completed_feeds() {
        let log = FeedingLog::new();
        let projection = ScheduleProjector::new().project(&request(300.0, &log, at(14, 0)));
        assert_eq!(projection.outcome, ProjectionOutcome::ScheduleProduced);
        assert_eq!(projection.start_time, Some(at(14, 0)));
        assert_eq!(projection.end_of_day, Some(at(23, 0)));
        // 9 hours for 3 feeds -> every 3 hours, up to 4 slots.
        assert_eq!(projection.interval_hours, Some(3.0));
        let times: Vec<_> = projection.slots.iter().map(|s| s.suggested_time).collect();
        assert_eq!(times, vec![at(14, 0), at(17, 0), at(20, 0), at(23, 0)]);
        assert!(projection.slots.iter().all(|s| s.amount_ml == 120.0 && s.calories == 100.0));
    }

    #[test]
    fn waits_an_hour_after_recent_feed() {
        let log = FeedingLog::from(vec![FeedEvent::new("1:30 PM", 60.0, true)]);
        let projection = ScheduleProjector::new().project(&request(150.0, &log, at(14, 0)));
        assert_eq!(projection.latest_feed_time, Some(at(13, 30)));
        assert_eq!(projection.start_time, Some(at(14, 30)));
    }

    #[test]
    fn old_feed_does_not_delay_start() {
        let log = FeedingLog::from(vec![FeedEvent::new("9:00 AM", 60.0, true)]);
        let projection = ScheduleProjector::new().project(&request(150.0, &log, at(14, 0)));
        assert_eq!(projection.start_time, Some(at(14, 0)));
    }

    #[test]
    fn future_feed_pushes_start_past_it() {
        let log = FeedingLog::from(vec![FeedEvent::new("16:00", 60.0, true)]);
        let projection = ScheduleProjector::new().project(&request(150.0, &log, at(14, 0)));
        assert_eq!(projection.start_time, Some(at(17, 0)));
    }

    #[test]
    fn pending_and_unparsable_feeds_are_ignored() {
        let log = FeedingLog::from(vec![
            FeedEvent::new("1:30 PM", 60.0, false),
            FeedEvent::new("soon", 60.0, true),
        ]);
        let projection = ScheduleProjector::new().project(&request(150.0, &log, at(14, 0)));
        assert_eq!(projection.latest_feed_time, None);
        assert_eq!(projection.start_time, Some(at(14, 0)));
    }

    #[test]
    fn interval_is_floored() {
        let log = FeedingLog::new();
        // 10 feeds in 4 hours would need 24 minute spacing.
        let projection = ScheduleProjector::new().project(&request(1000.0, &log, at(19, 0)));
        assert_eq!(projection.interval_hours, Some(1.5));
        let times: Vec<_> = projection.slots.iter().map(|s| s.suggested_time).collect();
        assert_eq!(times, vec![at(19, 0), at(20, 30), at(22, 0)]);
        assert!(projection.total_calories() < 1000.0);
    }

    #[test]
    fn slot_count_capped_at_whole_feeds_plus_one() {
        let log = FeedingLog::new();
        // 1.5 feeds over 18 hours: 12 hour spacing, at most 2 slots.
        let projection = ScheduleProjector::new().project(&request(150.0, &log, at(5, 0)));
        assert_eq!(projection.interval_hours, Some(12.0));
        assert_eq!(projection.slots.len(), 2);
        assert_eq!(projection.total_ml(), 240.0);
    }

    #[test]
    fn after_cutoff_time_is_exhausted() {
        let log = FeedingLog::new();
        for now in [at(23, 0), at(23, 30)] {
            let projection = ScheduleProjector::new().project(&request(300.0, &log, now));
            assert_eq!(projection.outcome, ProjectionOutcome::TimeExhausted);
            assert!(projection.slots.is_empty());
            assert!(projection.interval_hours.is_none());
        }
    }

    #[test]
    fn late_evening_gets_single_slot() {
        let log = FeedingLog::new();
        let projection = ScheduleProjector::new().project(&request(300.0, &log, at(22, 45)));
        assert_eq!(projection.outcome, ProjectionOutcome::ScheduleProduced);
        assert_eq!(projection.interval_hours, Some(1.5));
        assert_eq!(projection.slots.len(), 1);
        assert_eq!(projection.slots[0].suggested_time, at(22, 45));
    }

    #[test]
    fn start_rolling_past_midnight_moves_cutoff() {
        // A completed feed logged at 23:30 while it is 23:15.
        let log = FeedingLog::from(vec![FeedEvent::new("11:30 PM", 60.0, true)]);
        let projection = ScheduleProjector::new().project(&request(300.0, &log, at(23, 15)));
        let tomorrow = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
        assert_eq!(projection.start_time, Some(tomorrow.and_hms_opt(0, 30, 0).unwrap()));
        assert_eq!(projection.end_of_day, Some(tomorrow.and_hms_opt(23, 0, 0).unwrap()));
        assert_eq!(projection.outcome, ProjectionOutcome::ScheduleProduced);
    }

    #[test]
    fn zero_calorie_feeds_cannot_close_gap() {
        let log = FeedingLog::new();
        let mut req = request(300.0, &log, at(8, 0));
        req.calories_per_feeding = 0.0;
        let projection = ScheduleProjector::new().project(&req);
        assert_eq!(projection.outcome, ProjectionOutcome::TimeExhausted);
    }

    #[test]
    fn custom_policy() {
        let projector = ScheduleProjector::with_config(ProjectorConfig {
            min_spacing_hours: 2.0,
            min_interval_hours: 3.0,
            cutoff_hour: 20,
        });
        let log = FeedingLog::from(vec![FeedEvent::new("10:00 AM", 60.0, true)]);
        let projection = projector.project(&request(500.0, &log, at(11, 0)));
        assert_eq!(projection.start_time, Some(at(12, 0)));
        assert_eq!(projection.end_of_day, Some(at(20, 0)));
        let times: Vec<_> = projection.slots.iter().map(|s| s.suggested_time).collect();
        assert_eq!(times, vec![at(12, 0), at(15, 0), at(18, 0)]);
    }

    #[test]
    fn policy_validation() {
        assert!(ProjectorConfig::default().validate().is_ok());
        let bad = ProjectorConfig {
            cutoff_hour: 24,
            ..ProjectorConfig::default()
        };
        assert_eq!(bad.validate(), Err(ValidationError::CutoffHour(24)));
        let bad = ProjectorConfig {
            min_interval_hours: 0.0,
            ..ProjectorConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn tiny_feed_calories_do_not_overflow_slot_count() {
        let log = FeedingLog::new();
        let mut req = request(480.0, &log, at(10, 0));
        req.calories_per_feeding = 1e-20;
        let projection = ScheduleProjector::new().project(&req);
        assert_eq!(projection.outcome, ProjectionOutcome::ScheduleProduced);
        assert_eq!(projection.interval_hours, Some(1.5));
        let times: Vec<_> = projection.slots.iter().map(|s| s.suggested_time).collect();
        assert_eq!(times.first(), Some(&at(10, 0)));
        assert_eq!(times.last(), Some(&at(22, 0)));
        assert_eq!(times.len(), 9);

        req.calories_per_feeding = f64::MIN_POSITIVE / 4.0;
        let projection = ScheduleProjector::new().project(&req);
        assert_eq!(projection.outcome, ProjectionOutcome::ScheduleProduced);
    }

    #[test]
    fn huge_spacing_does_not_panic() {
        let projector = ScheduleProjector::with_config(ProjectorConfig {
            min_spacing_hours: 1e12,
            ..ProjectorConfig::default()
        });
        let log = FeedingLog::from(vec![FeedEvent::new("9:00 AM", 60.0, true)]);
        let projection = projector.project(&request(300.0, &log, at(10, 0)));
        assert_eq!(projection.outcome, ProjectionOutcome::TimeExhausted);
        assert!(projection.slots.is_empty());
    }

    #[test]
    fn spacing_longer_than_a_day_rejected() {
        for (spacing, interval) in [(1e12, 1.5), (1.0, 24.5)] {
            let policy = ProjectorConfig {
                min_spacing_hours: spacing,
                min_interval_hours: interval,
                ..ProjectorConfig::default()
            };
            assert!(matches!(
                policy.validate(),
                Err(ValidationError::TooLarge { max, .. }) if max == MAX_SPACING_HOURS
            ));
        }
        let policy = ProjectorConfig {
            min_spacing_hours: 24.0,
            min_interval_hours: 24.0,
            ..ProjectorConfig::default()
        };
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn projection_is_repeatable() {
        let log = FeedingLog::sample();
        let projector = ScheduleProjector::new();
        let req = request(420.0, &log, at(10, 20));
        assert_eq!(projector.project(&req), projector.project(&req));
    }
}
