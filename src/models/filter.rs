use serde::{Deserialize, Serialize};

use super::User;

/// Substring filters for `search_users`. A field that is `None` or empty matches
/// every record; all supplied fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilters {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub sobrenome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserFilters {
    pub fn is_empty(&self) -> bool {
        [&self.nome, &self.sobrenome, &self.email]
            .iter()
            .all(|f| f.as_deref().map_or(true, str::is_empty))
    }

    /// Case-insensitive match of every supplied field against `user`.
    pub fn matches(&self, user: &User) -> bool {
        field_matches(self.nome.as_deref(), &user.nome)
            && field_matches(self.sobrenome.as_deref(), &user.sobrenome)
            && field_matches(self.email.as_deref(), &user.email)
    }
}

fn field_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some("") => true,
        Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
    }
}
