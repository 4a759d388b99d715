//! Entry points used by the presentation layer.
//!
//! Each function is a full recompute over borrowed inputs and never fails;
//! edge cases come back as zero values or explicit outcomes.

use chrono::NaiveDateTime;

use crate::feeding::FeedingConfig;
use crate::log::FeedingLog;
use crate::progress::{Progress, Totals};
use crate::projector::{Projection, ProjectionRequest, ProjectorConfig, ScheduleProjector};

/// Goal, cadence and powder figures for `config`.
pub fn compute_totals(config: &FeedingConfig) -> Totals {
    Totals::compute(config)
}

/// Consumed and remaining calories for today's `log`.
pub fn compute_progress(config: &FeedingConfig, log: &FeedingLog) -> Progress {
    Progress::compute(config, log)
}

/// Remaining feeds for today under the default scheduling policy.
pub fn project_schedule(config: &FeedingConfig, log: &FeedingLog, now: NaiveDateTime) -> Projection {
    project_schedule_with(&ProjectorConfig::default(), config, log, now)
}

/// Remaining feeds for today under `policy`.
pub fn project_schedule_with(
    policy: &ProjectorConfig,
    config: &FeedingConfig,
    log: &FeedingLog,
    now: NaiveDateTime,
) -> Projection {
    let progress = Progress::compute(config, log);
    ScheduleProjector::with_config(*policy).project(&ProjectionRequest {
        remaining_calories: progress.remaining_calories,
        calories_per_feeding: progress.calories_per_feeding,
        feeding_size_ml: config.feeding_size_ml,
        log,
        now,
    })
}
