use feedplan_core::{compute_totals, FeedingConfig, Totals};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let totals = compute_totals(&config.feeding);
    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    } else {
        print_totals(&config.feeding, &totals);
    }
    Ok(())
}

pub fn print_totals(feeding: &FeedingConfig, totals: &Totals) {
    println!("Total daily calories goal: {:.1} kcal", totals.daily_calorie_goal);
    println!("Feedings per day:          {:.1}", totals.feedings_per_day);
    match totals.feeding_interval {
        Some(interval) => println!("Hours between feedings:    {interval}"),
        None => println!("Hours between feedings:    N/A"),
    }
    println!(
        "Feeding size:              {} ml ({:.1} oz)",
        feeding.feeding_size_ml, totals.feeding_size_oz
    );
    println!("Calories per feeding:      {:.1} kcal", totals.calories_per_feeding);
    println!(
        "Standard strength:         {:.1} kcal/oz (target {} kcal/oz)",
        totals.standard_kcal_per_ounce, feeding.feed_kcal_per_ounce
    );
    println!("Extra powder:              {}", totals.extra_powder);
    if let Some(warning) = totals.warning {
        println!("warning: {warning}");
    }
}
