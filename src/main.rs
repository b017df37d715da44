use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use user_directory::cli::{Cli, Command};
use user_directory::config::Config;
use user_directory::logging;
use user_directory::models::UserFilters;
use user_directory::services::{FileExportWriter, UserService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| anyhow::anyhow!("Configuration loading from {:?} failed: {}", path, e))?,
        None => Config::default(),
    };

    init_logging(&cli, &config)?;
    info!("Starting user directory...");

    let service = UserService::from_config(&config)?;
    info!("User directory seeded with {} users.", service.all_users().await.len());

    let per_page_default = config.directory.default_per_page;
    match cli.command {
        Command::List { page, per_page } => {
            let result = service
                .list_users(page, per_page.unwrap_or(per_page_default))
                .await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Search { filters, page, per_page } => {
            let filters = UserFilters::from(filters);
            let result = service
                .search_users(&filters, page, per_page.unwrap_or(per_page_default))
                .await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Export { filters, out_dir } => {
            let service = match out_dir {
                Some(dir) => service.with_export_writer(FileExportWriter::new(dir)),
                None => service,
            };
            let filters = UserFilters::from(filters);
            let outcome = if filters.is_empty() {
                service.export_all().await?
            } else {
                let users: Vec<_> = service
                    .all_users()
                    .await
                    .into_iter()
                    .filter(|u| filters.matches(u))
                    .collect();
                service.export_to_csv(&users)?
            };
            println!("{:?}", outcome);
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        logging::parse_level(&config.logging.level)?
    };

    match cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        Some(path) => logging::init(path, level)?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init(),
    }
    Ok(())
}
