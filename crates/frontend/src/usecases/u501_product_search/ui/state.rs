use contracts::usecases::u501_product_search::criteria::{SearchCriteria, ALL_BRANDS};
use contracts::usecases::u501_product_search::dto::CatalogFacets;

/// Значения полей боковой панели в том виде, как их видит пользователь
#[derive(Clone, Debug, PartialEq)]
pub struct FilterForm {
    pub query: String,
    pub brand: String,
    pub price_min: String,
    pub price_max: String,
    pub discount_only: bool,
    pub shelf: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            query: String::new(),
            brand: ALL_BRANDS.to_string(),
            price_min: String::new(),
            price_max: String::new(),
            discount_only: false,
            shelf: String::new(),
        }
    }
}

impl FilterForm {
    /// Форма по умолчанию: диапазон цен равен диапазону каталога
    pub fn with_facets(facets: &CatalogFacets) -> Self {
        Self {
            price_min: facets.price_min.map(format_bound).unwrap_or_default(),
            price_max: facets.price_max.map(format_bound).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Критерии для API. Граница цены отправляется только если она
    /// отличается от границы каталога, иначе фильтр по цене не нужен.
    pub fn to_criteria(&self, facets: &CatalogFacets) -> SearchCriteria {
        SearchCriteria {
            query: self.query.clone(),
            brand: if self.brand == ALL_BRANDS {
                None
            } else {
                Some(self.brand.clone())
            },
            price_min: changed_bound(&self.price_min, facets.price_min),
            price_max: changed_bound(&self.price_max, facets.price_max),
            discount_only: self.discount_only,
            shelf: self.shelf.clone(),
        }
    }
}

fn format_bound(value: f64) -> String {
    format!("{:.2}", value)
}

fn parse_bound(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse::<f64>().ok()
}

fn changed_bound(input: &str, catalog_bound: Option<f64>) -> Option<f64> {
    let value = parse_bound(input)?;
    match catalog_bound {
        Some(bound) if (bound - value).abs() < 0.005 => None,
        _ => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets() -> CatalogFacets {
        CatalogFacets {
            total: 2,
            brands: vec!["Acme".to_string()],
            price_min: Some(2.5),
            price_max: Some(3.0),
            shelves: vec![],
        }
    }

    #[test]
    fn test_default_form_has_no_filters() {
        let form = FilterForm::with_facets(&facets());
        assert_eq!(form.price_min, "2.50");
        assert_eq!(form.price_max, "3.00");
        assert!(form.to_criteria(&facets()).is_default());
    }

    #[test]
    fn test_changed_price_bound_is_sent() {
        let mut form = FilterForm::with_facets(&facets());
        form.price_max = "2,75".to_string();
        let criteria = form.to_criteria(&facets());
        assert_eq!(criteria.price_min, None);
        assert_eq!(criteria.price_max, Some(2.75));
    }

    #[test]
    fn test_brand_selection() {
        let mut form = FilterForm::default();
        form.brand = "Acme".to_string();
        assert_eq!(
            form.to_criteria(&facets()).brand.as_deref(),
            Some("Acme")
        );
    }

    #[test]
    fn test_unparsable_bound_is_ignored() {
        let mut form = FilterForm::default();
        form.price_min = "abc".to_string();
        assert_eq!(form.to_criteria(&CatalogFacets::default()).price_min, None);
    }
}
