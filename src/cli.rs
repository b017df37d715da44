use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{UserFilters, DEFAULT_PAGE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of the directory
    List {
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: usize,
        /// Page size; the configured default when omitted
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Print one page of the users matching the filters
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: usize,
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Export the matching users (all of them without filters) to CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// Directory to write the CSV into; overrides the configuration
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Substring of the first name
    #[arg(long)]
    pub nome: Option<String>,
    /// Substring of the last name
    #[arg(long)]
    pub sobrenome: Option<String>,
    /// Substring of the email address
    #[arg(long)]
    pub email: Option<String>,
}

impl From<FilterArgs> for UserFilters {
    fn from(args: FilterArgs) -> Self {
        UserFilters {
            nome: args.nome,
            sobrenome: args.sobrenome,
            email: args.email,
        }
    }
}
