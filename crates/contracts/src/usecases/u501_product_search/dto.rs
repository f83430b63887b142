use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::criteria::SearchCriteria;
use crate::domain::a001_catalog_product::aggregate::CatalogProduct;

/// Запрос поиска (POST /api/catalog/search)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub criteria: SearchCriteria,
}

/// Результат поиска
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<CatalogProduct>,
    pub total: usize,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    /// Запрос был засчитан в статистику ключевых слов
    #[serde(rename = "keywordRecorded")]
    pub keyword_recorded: bool,
}

/// Значения для построения фильтров в боковой панели
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFacets {
    pub total: usize,
    pub brands: Vec<String>,
    #[serde(rename = "priceMin")]
    pub price_min: Option<f64>,
    #[serde(rename = "priceMax")]
    pub price_max: Option<f64>,
    pub shelves: Vec<String>,
}

/// Состояние сессии пользователя
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    pub criteria: SearchCriteria,
}
