pub mod config;
pub mod log;
pub mod plan;
pub mod progress;
pub mod summary;
pub mod totals;

use chrono::{Local, NaiveDateTime};
use clap::Args;
use feedplan_core::log::parse_time_of_day;
use feedplan_core::{Config, DaySession};

/// Options shared by commands that project a schedule.
#[derive(Args)]
pub struct PlanArgs {
    /// Pretend it is this time today (e.g. "7:30 PM", "19:30")
    #[arg(long)]
    pub at: Option<String>,
    #[arg(long)]
    pub json: bool,
}

/// Current local wall-clock time, or `at` on today's date.
pub fn resolve_now(at: Option<&str>) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    let now = Local::now().naive_local();
    let Some(text) = at else {
        return Ok(now);
    };
    let at = parse_time_of_day(text)
        .on(now.date())
        .ok_or_else(|| format!("cannot parse time '{text}'"))?;
    tracing::debug!(%at, "using explicit time");
    Ok(at)
}

/// Config checked for the ranges the calculations assume.
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

pub fn load_session() -> Result<DaySession, Box<dyn std::error::Error>> {
    Ok(DaySession::load(Local::now().date_naive())?)
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.7, 4), "[####]");
    }

    #[test]
    fn resolve_now_with_explicit_time() {
        let now = resolve_now(Some("7:30 PM")).unwrap();
        assert_eq!(now.time(), chrono::NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        assert!(resolve_now(Some("dinner")).is_err());
    }
}
