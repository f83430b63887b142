/// Utilities for date formatting on product cards
use chrono::NaiveDate;

/// Format a best-before date as DD.MM.YYYY, `-` when unknown
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_best_before(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}
