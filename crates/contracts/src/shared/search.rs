/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    /// `query` is already trimmed and lower-cased.
    fn matches_filter(&self, query: &str) -> bool;
}

/// Normalised form of a free-text query; `None` when it filters nothing
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// Фильтрует список по поисковому запросу (пустой запрос не фильтрует)
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    match normalize_query(query) {
        None => items.to_vec(),
        Some(q) => items.iter().filter(|item| item.matches_filter(&q)).cloned().collect(),
    }
}

/// Case-insensitive substring check against an already lower-cased needle
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Name(&'static str);

    impl Searchable for Name {
        fn matches_filter(&self, query: &str) -> bool {
            contains_ci(self.0, query)
        }
    }

    #[test]
    fn test_filter_list() {
        let items = vec![Name("Samuel Okoth"), Name("Grace Wanjiru"), Name("Sam Kariuki")];
        assert_eq!(filter_list(&items, "   ").len(), 3);
        assert_eq!(filter_list(&items, "SAM"), vec![Name("Samuel Okoth"), Name("Sam Kariuki")]);
        assert_eq!(filter_list(&items, " wanj "), vec![Name("Grace Wanjiru")]);
        assert!(filter_list(&items, "zzz").is_empty());
    }
}
