use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tilawah::app::AppContext;
use tilawah::catalog::ChapterFilter;
use tilawah::cli::{commands, Cli, Commands};
use tilawah::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Read { number, json } => {
            commands::read_chapter(&ctx, number, json).await?;
        }
        Commands::List { search, revelation } => {
            let filter = ChapterFilter {
                search,
                revelation: revelation.map(Into::into),
            };
            commands::list_chapters(&ctx, &filter).await?;
        }
        Commands::Prayer { city } => {
            commands::show_prayer_times(&ctx, city.as_deref()).await?;
        }
        Commands::Probe => {
            commands::probe_sources(&ctx).await?;
        }
    }

    Ok(())
}
