use crate::models::User;
use crate::services::UserService;
use crate::utils::{FixedClock, SequentialIdGenerator};
use chrono::NaiveDate;
use std::time::Duration;

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

// Helper to build a distinct user whose id is `i`
pub fn sample_user(i: usize) -> User {
    User {
        id: i.to_string(),
        nome: format!("Usuario{}", i),
        sobrenome: format!("Teste{}", i),
        email: format!("usuario{}@example.com", i),
        endereco: format!("Rua {}, {}", i, i * 10),
        data_nascimento: "1990-01-01".to_string(),
        data_abertura: "2023-01-01".to_string(),
        valor_carteira: i as f64 * 100.0,
        endereco_carteira: format!("wallet-{}", i),
        moeda_origem: Some("BRL".to_string()),
        moeda_destino: Some("BTC".to_string()),
    }
}

/// Users with ids "1" through "n".
pub fn sample_users(n: usize) -> Vec<User> {
    (1..=n).map(sample_user).collect()
}

/// No latency, `new-<n>` ids and a clock pinned to `fixed_date()`.
pub fn test_service(fixture: Vec<User>) -> UserService {
    UserService::new(fixture)
        .with_latency(Duration::ZERO)
        .with_id_generator(SequentialIdGenerator::new("new-"))
        .with_clock(FixedClock(fixed_date()))
}
