//! Фильтрация каталога по критериям поиска
//!
//! Все активные предикаты объединяются через AND. Результат сохраняет
//! исходный порядок строк. Модуль не выполняет ввод-вывод.

use contracts::domain::a001_catalog_product::aggregate::CatalogProduct;
use contracts::usecases::u501_product_search::criteria::SearchCriteria;

/// Применяет критерии к списку товаров
pub fn apply(products: &[CatalogProduct], criteria: &SearchCriteria) -> Vec<CatalogProduct> {
    let query = criteria.active_query().map(str::to_lowercase);
    let brand = criteria.active_brand();
    let shelf = criteria.active_shelf().map(str::to_lowercase);

    let result: Vec<CatalogProduct> = products
        .iter()
        .filter(|p| query.as_deref().map_or(true, |q| matches_query(p, q)))
        .filter(|p| brand.map_or(true, |b| matches_brand(p, b)))
        .filter(|p| matches_price(p, criteria.price_min, criteria.price_max))
        .filter(|p| !criteria.discount_only || p.is_discounted())
        .filter(|p| shelf.as_deref().map_or(true, |s| matches_shelf(p, s)))
        .cloned()
        .collect();

    tracing::debug!(
        "Filter applied: {} of {} products matched",
        result.len(),
        products.len()
    );

    result
}

/// Подстрока (без учета регистра) в названии или бренде.
/// `query_lower` уже приведен к нижнему регистру.
pub fn matches_query(product: &CatalogProduct, query_lower: &str) -> bool {
    product.title.to_lowercase().contains(query_lower)
        || product
            .brand
            .as_ref()
            .map_or(false, |b| b.to_lowercase().contains(query_lower))
}

pub fn matches_brand(product: &CatalogProduct, brand: &str) -> bool {
    product.brand.as_deref() == Some(brand)
}

/// Границы включительные. Без границ фильтр не применяется; при активном
/// фильтре строки без цены отсекаются.
pub fn matches_price(product: &CatalogProduct, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    match product.price {
        Some(price) => min.map_or(true, |m| price >= m) && max.map_or(true, |m| price <= m),
        None => false,
    }
}

pub fn matches_shelf(product: &CatalogProduct, shelf_lower: &str) -> bool {
    product
        .shelf
        .as_ref()
        .map_or(false, |s| s.to_lowercase().contains(shelf_lower))
}
