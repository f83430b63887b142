use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки каталога. Каталог в этом случае недоступен.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unsupported catalog file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("sheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for DataLoadError {
    fn from(e: calamine::Error) -> Self {
        DataLoadError::Workbook(e.to_string())
    }
}

impl From<csv::Error> for DataLoadError {
    fn from(e: csv::Error) -> Self {
        DataLoadError::Workbook(e.to_string())
    }
}
