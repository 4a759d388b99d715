use feedplan_core::{compute_progress, compute_totals, project_schedule_with};
use serde_json::json;

use super::PlanArgs;

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let session = super::load_session()?;
    let now = super::resolve_now(args.at.as_deref())?;

    let totals = compute_totals(&config.feeding);
    let progress = compute_progress(&config.feeding, &session.log);
    let projection = project_schedule_with(&config.schedule, &config.feeding, &session.log, now);

    if args.json {
        let summary = json!({
            "totals": totals,
            "progress": progress,
            "projection": projection,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("== Nutrition");
    super::totals::print_totals(&config.feeding, &totals);
    println!();
    println!("== Today's feeds");
    super::log::print_log(&session.log);
    println!();
    println!("== Progress");
    super::progress::print_progress(&progress);
    println!();
    println!("== Remaining schedule");
    super::plan::print_projection(&config.feeding, &projection);
    Ok(())
}
