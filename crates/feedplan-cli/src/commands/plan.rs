use feedplan_core::log::display_time;
use feedplan_core::{project_schedule_with, FeedingConfig, Projection, ProjectionOutcome};

use super::PlanArgs;

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let session = super::load_session()?;
    let now = super::resolve_now(args.at.as_deref())?;
    let projection = project_schedule_with(&config.schedule, &config.feeding, &session.log, now);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print_projection(&config.feeding, &projection);
    }
    Ok(())
}

/// One-line advice shown under a produced schedule.
pub fn recommendation(feeding: &FeedingConfig, projection: &Projection) -> Option<String> {
    if projection.outcome != ProjectionOutcome::ScheduleProduced {
        return None;
    }
    let interval = projection.interval_hours?;
    let after = projection
        .latest_feed_time
        .map(|time| display_time(time.time()))
        .unwrap_or_else(|| "now".to_string());
    Some(format!(
        "Starting from after {after}, feed approximately every {interval:.1} hours \
         with {} ml per feeding to meet daily goal.",
        feeding.feeding_size_ml
    ))
}

pub fn print_projection(feeding: &FeedingConfig, projection: &Projection) {
    println!("{}", projection.outcome);
    if projection.slots.is_empty() {
        return;
    }
    println!("{:<16} {:>12} {:>10}", "Suggested Time", "Amount (ml)", "Calories");
    for slot in &projection.slots {
        println!(
            "{:<16} {:>12} {:>10.1}",
            display_time(slot.suggested_time.time()),
            slot.amount_ml,
            slot.calories
        );
    }
    if let Some(advice) = recommendation(feeding, projection) {
        println!("Recommendation: {advice}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use feedplan_core::{project_schedule, FeedingLog};

    #[test]
    fn recommendation_names_latest_feed() {
        let feeding = FeedingConfig::default();
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let projection = project_schedule(&feeding, &FeedingLog::sample(), now);
        let advice = recommendation(&feeding, &projection).unwrap();
        assert!(advice.starts_with("Starting from after 09:00 AM, feed approximately every 1.9 hours"));
        assert!(advice.contains("100 ml per feeding"));
    }

    #[test]
    fn recommendation_absent_without_schedule() {
        let feeding = FeedingConfig::default();
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let projection = project_schedule(&feeding, &FeedingLog::new(), now);
        assert!(recommendation(&feeding, &projection).is_none());
    }
}
