pub mod cli;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
pub use models::{NewUser, PaginatedResponse, User, UserFilters};
pub use services::{ExportOutcome, UserService};

// Declare tests module only when testing
#[cfg(test)]
pub mod tests;
