//! `wl sms` command implementation - simulated SMS quick capture
//!
//! No real telephony is involved; the inbox number is display-only and the
//! message text arrives as an argument.

use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;

use crate::config::Config;
use crate::store::Storage;
use crate::task::extract;

#[derive(Args)]
pub struct SmsArgs {
    /// Message text, e.g. "Urgent: Buy groceries today"
    text: Option<String>,

    /// Parse the message without creating a task
    #[arg(long)]
    dry_run: bool,

    /// Print the simulated inbox number and exit
    #[arg(long)]
    number: bool,
}

pub async fn run(profile: &str, args: SmsArgs) -> Result<()> {
    let config = Config::load()?;

    if args.number {
        println!("SMS inbox: {}", config.sms.phone_number);
        println!("Text this number to add tasks instantly.");
        return Ok(());
    }

    let text = match &args.text {
        Some(text) => text,
        None => bail!("No message text given (use --number to show the inbox number)"),
    };

    // The clock is read once here; the extractor itself never looks at it.
    let extraction = extract(text, Utc::now());

    if extraction.is_empty() {
        println!("No task created: nothing was left once the keywords were stripped.");
        return Ok(());
    }

    if args.dry_run {
        println!("Raw: {}", extraction.raw_text);
        println!("Title: {}", extraction.title);
        println!("List: {}", extraction.category.label());
        println!("Priority: {}", extraction.priority.label());
        match &extraction.due {
            Some(due) => println!("Due: {}", due.format("%Y-%m-%d")),
            None => println!("Due: -"),
        }
        return Ok(());
    }

    let Some(task) = extraction.into_task() else {
        return Ok(());
    };

    let storage = Storage::new(profile)?;
    let task = storage.create(task)?;

    println!(
        "Task received: \"{}\" added to your {} list.",
        task.title,
        task.category.label()
    );

    Ok(())
}
