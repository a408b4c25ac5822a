use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ticketdesk::cli::{Cli, Commands, ConfigAction};
use ticketdesk::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_open, cmd_show, cmd_submit, cmd_tickets,
};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "TICKETDESK_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_options();

    let result = match cli.command {
        Commands::Open { path } => cmd_open(&path, output).await,
        Commands::Submit {
            title,
            description,
            priority,
        } => cmd_submit(&title, &description, priority, output).await,
        Commands::Tickets { table } => cmd_tickets(table, output).await,
        Commands::Show { id } => cmd_show(&id, output).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(output),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value, output),
            ConfigAction::Get { key } => cmd_config_get(&key, output),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ticketdesk", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
