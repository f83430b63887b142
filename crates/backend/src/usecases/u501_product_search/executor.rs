use contracts::domain::a001_catalog_product::aggregate::CatalogProduct;
use contracts::usecases::u501_product_search::criteria::SearchCriteria;

use super::session::SessionState;
use crate::domain::a001_catalog_product::{filter, Catalog};
use crate::projections::p901_keyword_counts::{KeywordStore, PersistError};

/// Результат одного цикла поиска
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub products: Vec<CatalogProduct>,
    pub keyword_recorded: bool,
}

/// Выполняет поиск и учитывает запрос в статистике.
///
/// Непустой запрос засчитывается один раз на отправку: повторная отправка
/// того же запроса в той же сессии (например, при смене других фильтров)
/// не увеличивает счетчик. Без сессии засчитывается каждая отправка.
pub fn search(
    catalog: &Catalog,
    keywords: &KeywordStore,
    session: Option<&mut SessionState>,
    criteria: SearchCriteria,
) -> Result<SearchOutcome, PersistError> {
    let products = filter::apply(catalog.products(), &criteria);

    let is_new_query = criteria.active_query().is_some()
        && session
            .as_deref()
            .map_or(true, |s| s.last_counted_query.as_deref() != Some(criteria.query.as_str()));

    if is_new_query {
        keywords.record(&criteria.query)?;
    }

    if let Some(session) = session {
        if is_new_query {
            session.last_counted_query = Some(criteria.query.clone());
        } else if criteria.active_query().is_none() {
            session.last_counted_query = None;
        }
        session.criteria = criteria;
    }

    Ok(SearchOutcome {
        products,
        keyword_recorded: is_new_query,
    })
}

/// Сброс фильтров: критерии по умолчанию, сброс не засчитывается как поиск
pub fn reset(session: &mut SessionState) {
    session.criteria = SearchCriteria::default();
    session.last_counted_query = None;
    tracing::debug!("Session {} filters reset", session.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn product(title: &str, brand: &str, price: f64, discount: Option<&str>) -> CatalogProduct {
        CatalogProduct {
            title: title.to_string(),
            brand: Some(brand.to_string()),
            price: Some(price),
            after_sale: None,
            discount: discount.map(str::to_string),
            best_before: None,
            shelf: None,
            image: None,
            link: None,
            sheet: "Sheet1".to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            PathBuf::from("catalog.xlsx"),
            None,
            vec![
                product("Milk 1L", "Acme", 2.5, None),
                product("Bread", "Acme", 3.0, Some("10%")),
            ],
        )
    }

    fn query(q: &str) -> SearchCriteria {
        SearchCriteria {
            query: q.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_query_counts_once_per_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeywordStore::open(dir.path().join("keywords.json"));
        let mut session = SessionState::new(Uuid::new_v4());
        let catalog = catalog();

        let outcome = search(&catalog, &store, Some(&mut session), query("milk")).unwrap();
        assert!(outcome.keyword_recorded);
        assert_eq!(outcome.products.len(), 1);

        let mut with_discount = query("milk");
        with_discount.discount_only = true;
        let outcome = search(&catalog, &store, Some(&mut session), with_discount).unwrap();
        assert!(!outcome.keyword_recorded);
        assert!(outcome.products.is_empty());
        assert!(session.criteria.discount_only);

        assert_eq!(store.snapshot().get("milk"), 1);
    }

    #[test]
    fn test_reset_then_same_query_counts_again() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeywordStore::open(dir.path().join("keywords.json"));
        let mut session = SessionState::new(Uuid::new_v4());
        let catalog = catalog();

        search(&catalog, &store, Some(&mut session), query("milk")).unwrap();
        reset(&mut session);
        assert_eq!(session.criteria, SearchCriteria::default());

        search(&catalog, &store, Some(&mut session), query("milk")).unwrap();
        assert_eq!(store.snapshot().get("milk"), 2);
    }

    #[test]
    fn test_empty_query_is_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeywordStore::open(dir.path().join("keywords.json"));
        let catalog = catalog();

        let outcome = search(&catalog, &store, None, query("   ")).unwrap();
        assert!(!outcome.keyword_recorded);
        assert_eq!(outcome.products.len(), 2);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_sessionless_search_counts_every_submission() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeywordStore::open(dir.path().join("keywords.json"));
        let catalog = catalog();

        search(&catalog, &store, None, query("Bread")).unwrap();
        search(&catalog, &store, None, query("Bread")).unwrap();
        assert_eq!(store.top(10)[0].count, 2);
    }

    #[test]
    fn test_persist_failure_leaves_session_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = KeywordStore::open(blocker.join("keywords.json"));
        let mut session = SessionState::new(Uuid::new_v4());

        let result = search(&catalog(), &store, Some(&mut session), query("milk"));
        assert!(result.is_err());
        assert_eq!(session.last_counted_query, None);
        assert_eq!(session.criteria, SearchCriteria::default());
    }
}
