//! Worklife - personal work/life task manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use worklife::cli::{self, Cli, Commands};
use worklife::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("WORKLIFE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("worklife=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion generation needs no app data and works in read-only
    // environments.
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "wl", &mut std::io::stdout());
        return Ok(());
    }

    let profile = match cli.profile {
        Some(profile) => profile,
        None => Config::load()?.default_profile,
    };

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&profile, args).await,
        Some(Commands::List(args)) => cli::list::run(&profile, args).await,
        Some(Commands::Show(args)) => cli::show::run(&profile, args).await,
        Some(Commands::Done(args)) => cli::done::run_done(&profile, args).await,
        Some(Commands::Reopen(args)) => cli::done::run_reopen(&profile, args).await,
        Some(Commands::Edit(args)) => cli::edit::run(&profile, args).await,
        Some(Commands::Remove(args)) => cli::remove::run(&profile, args).await,
        Some(Commands::Sms(args)) => cli::sms::run(&profile, args).await,
        Some(Commands::Completion { .. }) => unreachable!(),
        None => cli::list::run_overview(&profile).await,
    }
}
