use contracts::projections::p901_keyword_counts::dto::KeywordCount;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Статистика поисковых запросов: запрос (как введен) -> количество
///
/// Порядок ключей соответствует порядку первого появления и используется
/// как вторичный критерий сортировки в `top`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCounts {
    counts: IndexMap<String, u64>,
}

impl KeywordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// counts[key] = counts.get(key, 0) + 1
    pub fn increment(&mut self, key: &str) -> u64 {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Откатывает одно увеличение; ключ удаляется, если счетчик стал нулевым
    pub(crate) fn decrement(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.counts.shift_remove(key);
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Первые `n` запросов по убыванию количества; при равенстве выше тот,
    /// что появился раньше
    pub fn top(&self, n: usize) -> Vec<KeywordCount> {
        let mut entries: Vec<(&String, &u64)> = self.counts.iter().collect();
        // sort_by is stable, so equal counts keep insertion order
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(n)
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.clone(),
                count: *count,
            })
            .collect()
    }
}
