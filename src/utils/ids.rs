use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs, the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix><n>` ids, counting up from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next_id: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("user-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, id)
    }
}
