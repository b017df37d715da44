use crate::error::{Error, Result};
use crate::models::{Fixture, User};
use log::{error, info};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Seed data compiled into the crate.
pub const DEFAULT_FIXTURE: &str = include_str!("../data/users.json");

/// Parses the embedded fixture.
pub fn load_default_fixture() -> Result<Vec<User>> {
    load_fixture_from_str(DEFAULT_FIXTURE)
}

/// Loads a `{ "users": [...] }` document from disk.
///
/// Every user field except the two currency codes must be present, and ids must
/// be unique across the document.
pub fn load_fixture_from_path(path: &Path) -> Result<Vec<User>> {
    info!("Loading user fixture from {:?}", path);

    let raw = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read fixture {:?}: {}", path, e);
        Error::IoError(e)
    })?;

    let users = load_fixture_from_str(&raw)?;
    info!("Loaded {} users from {:?}", users.len(), path);
    Ok(users)
}

pub fn load_fixture_from_str(raw: &str) -> Result<Vec<User>> {
    let fixture: Fixture = serde_json::from_str(raw)?;
    ensure_unique_ids(&fixture.users)?;
    Ok(fixture.users)
}

fn ensure_unique_ids(users: &[User]) -> Result<()> {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(user.id.as_str()) {
            return Err(Error::InvalidFixture(format!("duplicate user id '{}'", user.id)));
        }
    }
    Ok(())
}
