use serde::{Deserialize, Serialize};

/// Значение фильтра бренда, означающее "без фильтра"
pub const ALL_BRANDS: &str = "All";

/// Критерии поиска товаров
///
/// Все предикаты независимы. Значение по умолчанию не фильтрует ничего.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Поиск по названию или бренду (без учета регистра)
    pub query: String,

    /// Точное совпадение бренда; `None`, `""` или `"All"` отключают фильтр
    pub brand: Option<String>,

    #[serde(rename = "priceMin")]
    pub price_min: Option<f64>,

    #[serde(rename = "priceMax")]
    pub price_max: Option<f64>,

    /// Только товары со скидкой
    #[serde(rename = "discountOnly")]
    pub discount_only: bool,

    /// Поиск по расположению на полке
    pub shelf: String,
}

impl SearchCriteria {
    /// Текст запроса, если фильтр по тексту активен
    pub fn active_query(&self) -> Option<&str> {
        let q = self.query.trim();
        if q.is_empty() {
            None
        } else {
            Some(q)
        }
    }

    /// Выбранный бренд, если фильтр по бренду активен
    pub fn active_brand(&self) -> Option<&str> {
        match self.brand.as_deref() {
            None => None,
            Some(b) if b.is_empty() || b == ALL_BRANDS => None,
            Some(b) => Some(b),
        }
    }

    pub fn active_shelf(&self) -> Option<&str> {
        let s = self.shelf.trim();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    pub fn has_price_range(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }

    /// `true` если ни один предикат не активен
    pub fn is_default(&self) -> bool {
        self.active_query().is_none()
            && self.active_brand().is_none()
            && !self.has_price_range()
            && !self.discount_only
            && self.active_shelf().is_none()
    }
}
