use crate::error::{Error, Result};
use crate::models::User;
use chrono::NaiveDate;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_HEADERS: [&str; 8] = [
    "Nome",
    "Sobrenome",
    "Email",
    "Endereço",
    "Data de Nascimento",
    "Data de Abertura",
    "Valor da Carteira",
    "Endereço da Carteira",
];

pub const EMPTY_EXPORT_MESSAGE: &str = "Não há dados para exportar";

/// Delivers a rendered CSV document somewhere the user can pick it up.
#[cfg_attr(test, mockall::automock)]
pub trait ExportWriter: Send + Sync {
    fn write(&self, filename: &str, contents: &str) -> Result<()>;
}

/// Tells the user about something that is not an error, such as an empty export.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported { filename: String, rows: usize },
    NothingToExport,
}

/// Writes exports as files under a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileExportWriter {
    dir: PathBuf,
}

impl FileExportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportWriter for FileExportWriter {
    fn write(&self, filename: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::ExportError(format!("failed to create {:?}: {}", self.dir, e))
        })?;
        let path = self.dir.join(filename);
        fs::write(&path, contents)
            .map_err(|e| Error::ExportError(format!("failed to write {:?}: {}", path, e)))?;
        info!("Wrote export to {:?}", path);
        Ok(())
    }
}

/// Routes notifications to the log at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!("{}", message);
    }
}

/// `usuarios_YYYY-MM-DD.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("usuarios_{}.csv", date.format("%Y-%m-%d"))
}

/// Renders `users` as CSV: a fixed header, then one line per user with text
/// fields quoted and the balance left bare. Lines are separated by `\n` with no
/// trailing newline.
pub fn render_csv(users: &[User]) -> Result<String> {
    if users.is_empty() {
        return Err(Error::EmptyExport);
    }

    let mut lines = Vec::with_capacity(users.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(users.iter().map(render_row));
    Ok(lines.join("\n"))
}

fn render_row(user: &User) -> String {
    [
        quote(&user.nome),
        quote(&user.sobrenome),
        quote(&user.email),
        quote(&user.endereco),
        quote(&user.data_nascimento),
        quote(&user.data_abertura),
        user.valor_carteira.to_string(),
        quote(&user.endereco_carteira),
    ]
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
