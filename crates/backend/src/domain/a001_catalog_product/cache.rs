use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use super::catalog::Catalog;
use super::error::DataLoadError;
use super::loader;

/// Кэш загруженного каталога
///
/// Ключ кэша: путь к файлу и время его изменения. Повторный разбор файла
/// происходит только при смене пути или изменении файла.
#[derive(Debug, Default)]
pub struct CatalogCache {
    current: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Catalog>, DataLoadError> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);

        if !path.exists() {
            return Err(DataLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let modified = std::fs::metadata(path)?.modified().ok();

        if let Some(catalog) = current.as_ref() {
            if catalog.source() == path && catalog.modified() == modified {
                return Ok(Arc::clone(catalog));
            }
            tracing::info!(
                "Catalog source changed, reloading from {}",
                path.display()
            );
        }

        let catalog = Arc::new(loader::load(path)?);
        *current = Some(Arc::clone(&catalog));
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    const HEADER: &str = "product_title,brand,price,after_sale,Korting,bbd,image,link";

    fn write_catalog(path: &Path, rows: &[&str]) {
        let mut file = std::fs::File::create(path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    #[test]
    fn test_cached_until_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        write_catalog(&path, &["Milk 1L,Acme,2.50,,,,,"]);

        let cache = CatalogCache::new();
        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let loaded_at = std::fs::metadata(&path).unwrap().modified().unwrap();
        write_catalog(&path, &["Milk 1L,Acme,2.50,,,,,", "Bread,Acme,3.00,,10%,,,"]);
        let file = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.set_modified(loaded_at + Duration::from_secs(5)).unwrap();

        let third = cache.get_or_load(&path).unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(first.len(), 1);
        assert_eq!(third.len(), 2);
    }

    #[test]
    fn test_reloads_when_path_differs() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        write_catalog(&a, &["Milk 1L,Acme,2.50,,,,,"]);
        write_catalog(&b, &["Milk 1L,Acme,2.50,,,,,", "Bread,Acme,3.00,,10%,,,"]);

        let cache = CatalogCache::new();
        assert_eq!(cache.get_or_load(&a).unwrap().len(), 1);
        assert_eq!(cache.get_or_load(&b).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new();
        let err = cache.get_or_load(&dir.path().join("nope.xlsx")).unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound { .. }));
    }
}
