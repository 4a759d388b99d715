use clap::Subcommand;
use feedplan_core::log::{display_time, ParsedTime};
use feedplan_core::{FeedEdit, FeedEvent, FeedingLog};

#[derive(Subcommand)]
pub enum LogAction {
    /// Show today's feeds
    List {
        #[arg(long)]
        json: bool,
    },
    /// Record a feed
    Add {
        /// Feed time (e.g. "1:00 AM", "7 PM", "14:30")
        time: String,
        /// Amount fed (ml)
        amount_ml: f64,
        /// Record as planned rather than completed
        #[arg(long)]
        pending: bool,
    },
    /// Change a feed by its position in the list
    Edit {
        index: usize,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        amount_ml: Option<f64>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Mark a feed as completed
    Complete { index: usize },
    /// Delete a feed
    Remove { index: usize },
    /// Delete all of today's feeds
    Clear,
    /// Start today's log over
    Reset {
        /// Load the overnight sample feeds
        #[arg(long)]
        sample: bool,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::load_session()?;

    match action {
        LogAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.log)?);
            } else {
                print_log(&session.log);
            }
            return Ok(());
        }
        LogAction::Add {
            time,
            amount_ml,
            pending,
        } => {
            let index = session.log.add(FeedEvent::new(time, amount_ml, !pending))?;
            println!("feed added at position {index}");
        }
        LogAction::Edit {
            index,
            time,
            amount_ml,
            completed,
        } => {
            session.log.edit(
                index,
                FeedEdit {
                    time,
                    amount_ml,
                    completed,
                },
            )?;
            println!("feed {index} updated");
        }
        LogAction::Complete { index } => {
            session.log.edit(
                index,
                FeedEdit {
                    completed: Some(true),
                    ..FeedEdit::default()
                },
            )?;
            println!("feed {index} completed");
        }
        LogAction::Remove { index } => {
            let removed = session.log.remove(index)?;
            println!("removed {} ({} ml)", removed.time, removed.amount_ml);
        }
        LogAction::Clear => {
            session.log.clear();
            println!("log cleared");
        }
        LogAction::Reset { sample } => {
            session.log = if sample {
                FeedingLog::sample()
            } else {
                FeedingLog::new()
            };
            println!("log reset");
        }
    }

    session.save()?;
    Ok(())
}

pub fn print_log(log: &FeedingLog) {
    if log.is_empty() {
        println!("No feeds logged today.");
        return;
    }
    println!("{:>3}  {:<10} {:>11}  {:<9} {}", "#", "Time", "Amount (ml)", "Completed", "Parsed");
    for (index, event) in log.iter().enumerate() {
        let parsed = match event.parsed_time() {
            ParsedTime::Parsed(time) => display_time(time),
            ParsedTime::Unparsable => "?".to_string(),
        };
        println!(
            "{:>3}  {:<10} {:>11}  {:<9} {}",
            index,
            event.time,
            event.amount_ml,
            if event.completed { "yes" } else { "no" },
            parsed
        );
    }
}
