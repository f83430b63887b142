use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::counts::KeywordCounts;
use super::error::{CountsStoreError, PersistError};

/// Загружает статистику. Отсутствующий или поврежденный файл дает пустую
/// статистику; ошибка только логируется.
pub fn load(path: &Path) -> KeywordCounts {
    match try_load(path) {
        Ok(counts) => counts,
        Err(e) => {
            tracing::warn!("{}; starting with empty keyword history", e);
            KeywordCounts::new()
        }
    }
}

/// Загружает статистику, различая отсутствие файла и ошибку чтения
pub fn try_load(path: &Path) -> Result<KeywordCounts, CountsStoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(
                "No keyword history at {}, starting empty",
                path.display()
            );
            return Ok(KeywordCounts::new());
        }
        Err(source) => {
            return Err(CountsStoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&contents).map_err(|source| CountsStoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Полностью перезаписывает файл статистики.
///
/// Запись идет во временный файл рядом с целевым, затем он переименовывается
/// поверх целевого, так что читатель видит либо старое, либо новое содержимое.
pub fn save(path: &Path, counts: &KeywordCounts) -> Result<(), PersistError> {
    let serialized = serde_json::to_string_pretty(counts)?;
    let write_err = |source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp_path = temp_path_for(path);
    std::fs::write(&tmp_path, serialized).map_err(write_err)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }

    tracing::debug!(
        "Keyword counts saved to {}: {} keyword(s)",
        path.display(),
        counts.len()
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "keywords.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
