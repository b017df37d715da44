#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use user_directory::data_loader::load_default_fixture;
use user_directory::error::Result;
use user_directory::services::{ExportWriter, Notifier, UserService};
use user_directory::utils::{FixedClock, SequentialIdGenerator};
use user_directory::{NewUser, User};

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn fixture() -> Vec<User> {
    load_default_fixture().expect("embedded fixture should parse")
}

// Helper to create a service over the embedded fixture with no delay
pub fn create_test_service() -> UserService {
    UserService::new(fixture())
        .with_latency(Duration::ZERO)
        .with_id_generator(SequentialIdGenerator::new("test-"))
        .with_clock(FixedClock(fixed_date()))
}

pub fn new_user(nome: &str) -> NewUser {
    NewUser {
        nome: nome.to_string(),
        sobrenome: "Teste".to_string(),
        email: format!("{}@teste.com", nome.to_lowercase()),
        valor_carteira: 250.0,
        ..Default::default()
    }
}

pub fn ids(users: &[User]) -> Vec<String> {
    users.iter().map(|u| u.id.clone()).collect()
}

/// Keeps every export in memory.
#[derive(Clone, Default)]
pub struct RecordingWriter {
    pub files: Arc<Mutex<Vec<(String, String)>>>,
}

impl ExportWriter for RecordingWriter {
    fn write(&self, filename: &str, contents: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
