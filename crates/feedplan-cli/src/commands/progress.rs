use feedplan_core::{compute_progress, Progress};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let session = super::load_session()?;
    let progress = compute_progress(&config.feeding, &session.log);
    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
    } else {
        print_progress(&progress);
    }
    Ok(())
}

pub fn print_progress(progress: &Progress) {
    println!(
        "Consumed today:      {:.0} ml ({:.0} kcal)",
        progress.consumed_ml, progress.consumed_calories
    );
    println!(
        "Remaining needed:    {:.0} ml ({:.0} kcal)",
        progress.remaining_ml, progress.remaining_calories
    );
    println!("Daily goal progress: {:.1}%", progress.progress_percent);
    println!(
        "{} {:.0} / {:.0} kcal",
        super::progress_bar(progress.fraction(), 30),
        progress.consumed_calories,
        progress.daily_calorie_goal
    );
}
