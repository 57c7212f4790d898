use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Ошибка кодирования ABF
    #[error("ABF error: {0}")]
    Abf(#[from] abf_types::AbfError),

    /// Ошибка чтения входного файла
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Входной файл не является корректным JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON корректен, но не является числовой матрицей
    #[error("Invalid input: {0}")]
    Input(String),
}
