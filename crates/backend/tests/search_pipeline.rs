use backend::domain::a001_catalog_product::cache::CatalogCache;
use backend::domain::a001_catalog_product::DataLoadError;
use backend::projections::p901_keyword_counts::{repository, KeywordStore};
use backend::usecases::u501_product_search::{reset, search, InMemorySessionStore, SessionStore};
use contracts::usecases::u501_product_search::criteria::SearchCriteria;
use std::io::Write;
use std::path::Path;

fn write_catalog(path: &Path) {
    let mut file = std::fs::File::create(path).unwrap();
    writeln!(
        file,
        "product_title,brand,price,after_sale,Korting,bbd,shelf_location,image,link"
    )
    .unwrap();
    writeln!(file, "Milk 1L,Acme,2.50,2.50,,2024-12-01,A1,https://img/milk.png,https://shop/milk").unwrap();
    writeln!(file, "Bread,Acme,3.00,2.70,10%,2024-11-28 08:00:00,B2,https://img/bread.png,https://shop/bread").unwrap();
    writeln!(file, "Chocolate milk,,unknown,,,,A4,,").unwrap();
}

#[test]
fn search_cycle_filters_and_counts_keywords() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.csv");
    let keywords_path = dir.path().join("data").join("keywords.json");
    write_catalog(&catalog_path);

    let cache = CatalogCache::new();
    let keywords = KeywordStore::open(keywords_path.clone());
    let sessions = InMemorySessionStore::new();

    let catalog = cache.get_or_load(&catalog_path).unwrap();
    assert_eq!(catalog.len(), 3);

    let facets = catalog.facets();
    assert_eq!(facets.brands, vec!["Acme"]);
    assert_eq!(facets.price_min, Some(2.5));
    assert_eq!(facets.price_max, Some(3.0));

    // Default criteria return the whole catalog, unpriced row included
    let outcome = search(&catalog, &keywords, None, SearchCriteria::default()).unwrap();
    assert_eq!(outcome.products.len(), 3);
    assert!(!outcome.keyword_recorded);

    let mut session = sessions.create();
    let criteria = SearchCriteria {
        query: "milk".to_string(),
        ..Default::default()
    };
    let outcome = search(&catalog, &keywords, Some(&mut session), criteria.clone()).unwrap();
    let titles: Vec<&str> = outcome.products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Milk 1L", "Chocolate milk"]);

    // Price range active: the unpriced row drops out
    let priced = SearchCriteria {
        price_min: facets.price_min,
        price_max: facets.price_max,
        ..criteria
    };
    let outcome = search(&catalog, &keywords, Some(&mut session), priced).unwrap();
    assert_eq!(outcome.products.len(), 1);
    assert!(!outcome.keyword_recorded);
    let stored = session.clone();
    assert!(sessions.update(session.id, &mut |s| *s = stored.clone()));
    assert_eq!(sessions.get(session.id).unwrap().criteria.price_min, Some(2.5));

    reset(&mut session);
    let shelf = SearchCriteria {
        shelf: "a".to_string(),
        ..Default::default()
    };
    let outcome = search(&catalog, &keywords, Some(&mut session), shelf).unwrap();
    assert_eq!(outcome.products.len(), 2);

    let persisted = repository::load(&keywords_path);
    assert_eq!(persisted.get("milk"), 1);
    assert_eq!(persisted.len(), 1);
}

#[test]
fn missing_catalog_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CatalogCache::new();
    let err = cache
        .get_or_load(&dir.path().join("catalog.xlsx"))
        .unwrap_err();
    assert!(matches!(err, DataLoadError::NotFound { .. }));
    assert!(err.to_string().contains("catalog.xlsx"));
}

#[test]
fn catalog_without_required_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, "product_title,brand,price\nMilk,Acme,2.5\n").unwrap();

    let err = CatalogCache::new().get_or_load(&path).unwrap_err();
    assert!(matches!(err, DataLoadError::MissingColumn { .. }));
}

#[test]
fn concurrent_searches_in_one_session_count_once() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.csv");
    write_catalog(&catalog_path);

    let catalog = CatalogCache::new().get_or_load(&catalog_path).unwrap();
    let keywords = KeywordStore::open(dir.path().join("keywords.json"));
    let sessions = InMemorySessionStore::new();
    let session = sessions.create();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let criteria = SearchCriteria {
                    query: "milk".to_string(),
                    ..Default::default()
                };
                let mut found = 0;
                assert!(sessions.update(session.id, &mut |s| {
                    found = search(&catalog, &keywords, Some(s), criteria.clone())
                        .unwrap()
                        .products
                        .len();
                }));
                assert_eq!(found, 2);
            });
        }
    });

    assert_eq!(keywords.top(10)[0].count, 1);
    assert_eq!(
        sessions.get(session.id).unwrap().last_counted_query.as_deref(),
        Some("milk")
    );
}

#[test]
fn deleted_session_is_not_restored_by_search() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.csv");
    write_catalog(&catalog_path);

    let catalog = CatalogCache::new().get_or_load(&catalog_path).unwrap();
    let keywords = KeywordStore::open(dir.path().join("keywords.json"));
    let sessions = InMemorySessionStore::new();
    let session = sessions.create();
    assert!(sessions.remove(session.id));

    let updated = sessions.update(session.id, &mut |s| {
        search(&catalog, &keywords, Some(s), SearchCriteria::default()).unwrap();
    });
    assert!(!updated);
    assert!(sessions.is_empty());
    assert!(keywords.top(10).is_empty());
}
