use std::path::PathBuf;
use thiserror::Error;

/// Файл статистики не читается. Восстанавливается как пустая статистика.
#[derive(Debug, Error)]
pub enum CountsStoreError {
    #[error("failed to read keyword counts from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("keyword counts file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Ошибка записи статистики. Передается вызывающему коду.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write keyword counts to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize keyword counts: {0}")]
    Serialize(#[from] serde_json::Error),
}
