use serde::{Deserialize, Serialize};

pub mod filter;
pub mod page;

pub use filter::UserFilters;
pub use page::{paginate, PaginatedResponse, DEFAULT_PAGE, DEFAULT_PER_PAGE};

pub const DEFAULT_SOURCE_CURRENCY: &str = "BRL";
pub const DEFAULT_TARGET_CURRENCY: &str = "BTC";

/// A directory entry as stored in the collection and in the fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub endereco: String,
    pub data_nascimento: String,
    pub data_abertura: String,
    pub valor_carteira: f64,
    pub endereco_carteira: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moeda_origem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moeda_destino: Option<String>,
}

/// Payload accepted by `UserService::create_user`.
///
/// `id` and `data_abertura` are assigned by the service. Address, birth date and
/// wallet address may be left out and are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub valor_carteira: f64,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
    #[serde(default)]
    pub endereco_carteira: Option<String>,
    #[serde(default)]
    pub moeda_origem: Option<String>,
    #[serde(default)]
    pub moeda_destino: Option<String>,
}

impl NewUser {
    /// Builds the stored record, filling in defaults for everything left out.
    pub fn into_user(self, id: String, data_abertura: String) -> User {
        User {
            id,
            nome: self.nome,
            sobrenome: self.sobrenome,
            email: self.email,
            endereco: self.endereco.unwrap_or_default(),
            data_nascimento: self.data_nascimento.unwrap_or_default(),
            data_abertura,
            valor_carteira: self.valor_carteira,
            endereco_carteira: self.endereco_carteira.unwrap_or_default(),
            moeda_origem: Some(non_empty_or(self.moeda_origem, DEFAULT_SOURCE_CURRENCY)),
            moeda_destino: Some(non_empty_or(self.moeda_destino, DEFAULT_TARGET_CURRENCY)),
        }
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// The seed document: `{ "users": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub users: Vec<User>,
}
