use contracts::projections::p901_keyword_counts::dto::KeywordCount;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::counts::KeywordCounts;
use super::error::PersistError;
use super::repository;

/// Хранилище статистики поисковых запросов
///
/// Изменение и запись файла выполняются под одной блокировкой, чтобы
/// параллельные запросы не теряли увеличения счетчиков.
#[derive(Debug)]
pub struct KeywordStore {
    path: PathBuf,
    counts: Mutex<KeywordCounts>,
}

impl KeywordStore {
    /// Открывает хранилище; ошибки чтения файла не фатальны
    pub fn open(path: PathBuf) -> Self {
        let counts = repository::load(&path);
        tracing::info!(
            "Keyword store opened at {} with {} keyword(s)",
            path.display(),
            counts.len()
        );
        Self {
            path,
            counts: Mutex::new(counts),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Увеличивает счетчик запроса и сразу сохраняет файл.
    /// При ошибке записи увеличение откатывается.
    pub fn record(&self, query: &str) -> Result<u64, PersistError> {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        let count = counts.increment(query);
        if let Err(e) = repository::save(&self.path, &counts) {
            counts.decrement(query);
            tracing::error!("Failed to persist keyword '{}': {}", query, e);
            return Err(e);
        }
        tracing::debug!("Keyword '{}' recorded, count={}", query, count);
        Ok(count)
    }

    /// Очищает статистику и сохраняет пустой файл. Возвращает число удаленных ключей.
    pub fn clear(&self) -> Result<usize, PersistError> {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = counts.clone();
        let cleared = counts.len();
        counts.clear();
        if let Err(e) = repository::save(&self.path, &counts) {
            *counts = previous;
            tracing::error!("Failed to persist cleared keyword history: {}", e);
            return Err(e);
        }
        tracing::info!("Keyword history cleared ({} keyword(s))", cleared);
        Ok(cleared)
    }

    pub fn top(&self, n: usize) -> Vec<KeywordCount> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .top(n)
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> KeywordCounts {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
