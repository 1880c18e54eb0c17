mod report;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "leadboard-cli")]
#[command(about = "Leadboard command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the sheet and print how many leads normalized.
    Fetch,
    /// Fetch the sheet and print a metrics report.
    Report {
        /// Maximum number of lead rows to include in the table.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = leadboard_core::load_app_config()?;
    let client = leadboard_sheet::SheetClient::new(config.fetch_timeout_secs, &config.user_agent)?;

    match cli.command {
        Commands::Fetch => {
            let leads = leadboard_sheet::load_leads(&client, &config).await?;
            println!("{} leads", leads.len());
        }
        Commands::Report { limit } => {
            let leads = leadboard_sheet::load_leads(&client, &config).await?;
            print!("{}", report::render(&leads, limit));
        }
    }

    Ok(())
}
