use contracts::domain::a001_catalog_product::aggregate::CatalogProduct;
use contracts::usecases::u501_product_search::dto::CatalogFacets;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Каталог товаров, загруженный из одного файла
///
/// Порядок строк: листы в порядке книги, внутри листа в порядке строк.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: PathBuf,
    modified: Option<SystemTime>,
    products: Vec<CatalogProduct>,
}

impl Catalog {
    pub fn new(
        source: PathBuf,
        modified: Option<SystemTime>,
        products: Vec<CatalogProduct>,
    ) -> Self {
        Self {
            source,
            modified,
            products,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Уникальные бренды в порядке первого появления
    pub fn brands(&self) -> Vec<String> {
        unique_in_order(self.products.iter().filter_map(|p| p.brand.as_deref()))
    }

    pub fn shelves(&self) -> Vec<String> {
        unique_in_order(self.products.iter().filter_map(|p| p.shelf.as_deref()))
    }

    /// Минимальная и максимальная цена среди строк с числовой ценой
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.products
            .iter()
            .filter_map(|p| p.price)
            .fold(None, |acc, price| match acc {
                None => Some((price, price)),
                Some((min, max)) => Some((min.min(price), max.max(price))),
            })
    }

    pub fn facets(&self) -> CatalogFacets {
        let bounds = self.price_bounds();
        CatalogFacets {
            total: self.len(),
            brands: self.brands(),
            price_min: bounds.map(|(min, _)| min),
            price_max: bounds.map(|(_, max)| max),
            shelves: self.shelves(),
        }
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, brand: Option<&str>, price: Option<f64>) -> CatalogProduct {
        CatalogProduct {
            title: title.to_string(),
            brand: brand.map(str::to_string),
            price,
            after_sale: None,
            discount: None,
            best_before: None,
            shelf: None,
            image: None,
            link: None,
            sheet: "Sheet1".to_string(),
        }
    }

    #[test]
    fn test_facets() {
        let catalog = Catalog::new(
            PathBuf::from("catalog.xlsx"),
            None,
            vec![
                product("Milk 1L", Some("Acme"), Some(2.5)),
                product("Bread", Some("Bakery"), Some(3.0)),
                product("Butter", Some("Acme"), None),
                product("Eggs", None, Some(1.2)),
            ],
        );

        let facets = catalog.facets();
        assert_eq!(facets.total, 4);
        assert_eq!(facets.brands, vec!["Acme", "Bakery"]);
        assert_eq!(facets.price_min, Some(1.2));
        assert_eq!(facets.price_max, Some(3.0));
        assert!(facets.shelves.is_empty());
    }

    #[test]
    fn test_price_bounds_of_unpriced_catalog() {
        let catalog = Catalog::new(
            PathBuf::from("catalog.xlsx"),
            None,
            vec![product("Butter", None, None)],
        );
        assert_eq!(catalog.price_bounds(), None);
    }
}
