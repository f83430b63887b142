use serde::{Deserialize, Serialize};

/// Количество поисков по ключевому слову
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

/// Параметры запроса GET /api/keywords/top
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopKeywordsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for TopKeywordsQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    10
}

/// Ответ на очистку истории поиска
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearKeywordsResponse {
    pub cleared: usize,
}
