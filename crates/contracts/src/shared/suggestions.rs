//! Подсказки для полей со свободным вводом (поставщик, клиент)

use std::collections::HashSet;

/// Сколько подсказок показывать в выпадающем списке
pub const SUGGESTION_LIMIT: usize = 50;

/// Отбирает подсказки, содержащие введённый текст (без учёта регистра).
///
/// Порядок исходного списка сохраняется, дубликаты и пустые строки отбрасываются.
/// Подсказка, совпадающая с введённым значением, не показывается: она уже выбрана.
pub fn filter_suggestions<'a, I>(items: I, query: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in items {
        if item.trim().is_empty() || !seen.insert(item) {
            continue;
        }
        let lower = item.to_lowercase();
        if !query.is_empty() && lower == query {
            continue;
        }
        if result.len() < limit && (query.is_empty() || lower.contains(&query)) {
            result.push(item.to_string());
        }
    }

    result
}
