use crate::config::Config;
use crate::data_loader;
use crate::error::{Error, Result};
use crate::models::{paginate, NewUser, PaginatedResponse, User, UserFilters};
use crate::utils::{Clock, IdGenerator, SystemClock, UuidGenerator};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub mod export;

/// Fresh ids drawn per `create_user` before giving up on a colliding generator.
pub const MAX_ID_ATTEMPTS: usize = 8;

pub use export::{
    export_filename, render_csv, ExportOutcome, ExportWriter, FileExportWriter, LogNotifier,
    Notifier, EMPTY_EXPORT_MESSAGE,
};

/// In-memory user directory that behaves like a slow remote backend.
///
/// The collection starts as a copy of the fixture it was built from and can be
/// restored to it at any time with [`UserService::reset_to_initial_data`].
/// Clones share the same collection.
#[derive(Clone)]
pub struct UserService {
    users: Arc<Mutex<Vec<User>>>,
    initial_users: Arc<Vec<User>>,
    latency: Duration,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    export_writer: Arc<dyn ExportWriter>,
    notifier: Arc<dyn Notifier>,
}

impl UserService {
    pub fn new(fixture: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(fixture.clone())),
            initial_users: Arc::new(fixture),
            latency: Duration::from_millis(crate::config::DEFAULT_LATENCY_MS),
            id_generator: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
            export_writer: Arc::new(FileExportWriter::new(
                crate::config::ExportConfig::default().output_dir,
            )),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Seeds the service from the fixture bundled with the crate.
    pub fn with_default_fixture() -> Result<Self> {
        Ok(Self::new(data_loader::load_default_fixture()?))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let fixture = match &config.directory.fixture_path {
            Some(path) => data_loader::load_fixture_from_path(path)?,
            None => data_loader::load_default_fixture()?,
        };

        Ok(Self::new(fixture)
            .with_latency(config.directory.latency())
            .with_export_writer(FileExportWriter::new(config.export.output_dir.clone())))
    }

    /// Delay applied before every simulated round trip. Zero disables it.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(generator);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_export_writer(mut self, writer: impl ExportWriter + 'static) -> Self {
        self.export_writer = Arc::new(writer);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_network_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn list_users(&self, page: usize, per_page: usize) -> PaginatedResponse<User> {
        self.simulate_network_delay().await;

        let users = self.users.lock().await;
        debug!("Listing users: page {} of size {} over {} records", page, per_page, users.len());
        paginate(users.as_slice(), page, per_page)
    }

    pub async fn search_users(
        &self,
        filters: &UserFilters,
        page: usize,
        per_page: usize,
    ) -> PaginatedResponse<User> {
        self.simulate_network_delay().await;

        let users = self.users.lock().await;
        let matching: Vec<User> = users.iter().filter(|u| filters.matches(u)).cloned().collect();
        debug!("Search {:?} matched {} of {} users", filters, matching.len(), users.len());
        paginate(&matching, page, per_page)
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.simulate_network_delay().await;

        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Appends a new record under a freshly generated id.
    ///
    /// Ids already present in the collection are skipped; after
    /// [`MAX_ID_ATTEMPTS`] collisions the call fails with `Error::Conflict` and
    /// nothing is stored.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        self.simulate_network_delay().await;

        let mut users = self.users.lock().await;
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.id_generator.generate())
            .find(|candidate| !users.iter().any(|u| &u.id == candidate))
            .ok_or_else(|| {
                warn!("No free user id after {} attempts", MAX_ID_ATTEMPTS);
                Error::Conflict(format!(
                    "no unused id after {} attempts",
                    MAX_ID_ATTEMPTS
                ))
            })?;

        let user = new_user.into_user(id, self.clock.today_string());
        users.push(user.clone());
        info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    /// Replaces the stored record with the same id, keeping its position.
    pub async fn update_user(&self, user: User) -> Result<User> {
        self.simulate_network_delay().await;

        let mut users = self.users.lock().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| not_found(&user.id))?;
        *slot = user.clone();
        info!("Updated user {}", user.id);
        Ok(user)
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.simulate_network_delay().await;

        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| not_found(id))?;
        users.remove(index);
        info!("Deleted user {}", id);
        Ok(())
    }

    /// Current collection in order. Not delayed.
    pub async fn all_users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    /// Renders `users` and hands the document to the export writer.
    ///
    /// An empty list is reported through the notifier and writes nothing.
    pub fn export_to_csv(&self, users: &[User]) -> Result<ExportOutcome> {
        let contents = match render_csv(users) {
            Ok(contents) => contents,
            Err(Error::EmptyExport) => {
                self.notifier.notify(EMPTY_EXPORT_MESSAGE);
                return Ok(ExportOutcome::NothingToExport);
            }
            Err(e) => return Err(e),
        };

        let filename = export_filename(self.clock.today());
        self.export_writer.write(&filename, &contents)?;
        info!("Exported {} users to {}", users.len(), filename);
        Ok(ExportOutcome::Exported {
            filename,
            rows: users.len(),
        })
    }

    pub async fn export_all(&self) -> Result<ExportOutcome> {
        let users = self.all_users().await;
        self.export_to_csv(&users)
    }

    /// Throws away every mutation and goes back to the fixture contents.
    pub async fn reset_to_initial_data(&self) {
        let mut users = self.users.lock().await;
        *users = self.initial_users.as_ref().clone();
        info!("Reset user directory to {} fixture records", users.len());
    }
}

fn not_found(id: &str) -> Error {
    warn!("User {} not found", id);
    Error::NotFound(format!("User with id {} not found", id))
}
