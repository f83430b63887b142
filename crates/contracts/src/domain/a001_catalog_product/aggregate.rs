use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога (одна строка исходной таблицы)
///
/// Строки неизменяемы после загрузки. Все необязательные колонки
/// представлены как `Option`, отсутствие значения решается при загрузке.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Название товара
    pub title: String,

    /// Бренд
    pub brand: Option<String>,

    /// Цена (2 знака после запятой), `None` если в файле не число
    pub price: Option<f64>,

    /// Цена после скидки
    #[serde(rename = "afterSale")]
    pub after_sale: Option<f64>,

    /// Информация о скидке; наличие означает "товар со скидкой"
    pub discount: Option<String>,

    /// Срок годности (только дата)
    #[serde(rename = "bestBefore")]
    pub best_before: Option<NaiveDate>,

    /// Расположение на полке
    pub shelf: Option<String>,

    /// Ссылка на изображение
    pub image: Option<String>,

    /// Ссылка на карточку товара
    pub link: Option<String>,

    /// Имя листа, из которого загружена строка
    pub sheet: String,
}

impl CatalogProduct {
    /// Товар со скидкой, если есть непустая информация о скидке
    pub fn is_discounted(&self) -> bool {
        self.discount
            .as_deref()
            .map_or(false, |d| !d.trim().is_empty())
    }

    pub fn brand_or_dash(&self) -> &str {
        self.brand.as_deref().unwrap_or("-")
    }
}

/// Форматирует цену с двумя знаками, `-` для отсутствующей
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "-".to_string(),
    }
}
