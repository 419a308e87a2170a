//! Single-key, three-state column sorting.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort of a table. `None` at the call sites means source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Next sort after a click on the header sorting by `key`.
///
/// Same key: asc → desc → unsorted. Another key: always asc.
pub fn cycle_sort(current: Option<&SortState>, key: &str) -> Option<SortState> {
    match current {
        Some(s) if s.key == key => match s.direction {
            SortDirection::Asc => Some(SortState::desc(key)),
            SortDirection::Desc => None,
        },
        _ => Some(SortState::asc(key)),
    }
}

/// Comparable value of one field of a row
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    Missing,
}

impl SortValue {
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            SortValue::Missing
        } else {
            SortValue::Number(value)
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(SortValue::text).unwrap_or(SortValue::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Missing => 2,
        }
    }

    /// Order two values under `direction`.
    ///
    /// Missing values always go last and numbers always precede text,
    /// whatever the direction; only same-kind comparisons are reversed.
    pub fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                direction.apply(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            (SortValue::Text(a), SortValue::Text(b)) => direction.apply(a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Value of the field named `key`; unknown keys are `Missing`
    fn sort_value(&self, key: &str) -> SortValue;
}

/// Stable sort of row references by the active sort state
pub fn sort_rows<T: Sortable>(rows: &mut [&T], sort: Option<&SortState>) {
    let Some(sort) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        a.sort_value(&sort.key)
            .compare(&b.sort_value(&sort.key), sort.direction)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        name: Option<&'static str>,
        amount: f64,
    }

    impl Sortable for Item {
        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "name" => SortValue::opt_text(self.name),
                "amount" => SortValue::number(self.amount),
                _ => SortValue::Missing,
            }
        }
    }

    fn item(id: u32, name: Option<&'static str>, amount: f64) -> Item {
        Item { id, name, amount }
    }

    fn ids(rows: &[&Item]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_cycle_sort() {
        let s = cycle_sort(None, "name");
        assert_eq!(s, Some(SortState::asc("name")));
        let s = cycle_sort(s.as_ref(), "name");
        assert_eq!(s, Some(SortState::desc("name")));
        let s = cycle_sort(s.as_ref(), "name");
        assert_eq!(s, None);

        let desc = SortState::desc("name");
        assert_eq!(cycle_sort(Some(&desc), "amount"), Some(SortState::asc("amount")));
    }

    #[test]
    fn test_reverse_direction_reverses_tie_free_data() {
        let items = vec![
            item(1, Some("Chair"), 300.0),
            item(2, Some("Bench"), 100.0),
            item(3, Some("Door"), 200.0),
        ];
        let mut asc: Vec<&Item> = items.iter().collect();
        sort_rows(&mut asc, Some(&SortState::asc("amount")));
        let mut desc: Vec<&Item> = items.iter().collect();
        sort_rows(&mut desc, Some(&SortState::desc("amount")));

        assert_eq!(ids(&asc), vec![2, 3, 1]);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let items = vec![
            item(1, Some("b"), 10.0),
            item(2, Some("a"), 10.0),
            item(3, Some("c"), 5.0),
            item(4, Some("d"), 10.0),
        ];
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, Some(&SortState::asc("amount")));
        assert_eq!(ids(&rows), vec![3, 1, 2, 4]);

        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, Some(&SortState::desc("amount")));
        assert_eq!(ids(&rows), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_missing_values_sort_last_in_both_directions() {
        let items = vec![
            item(1, None, 0.0),
            item(2, Some("b"), 0.0),
            item(3, Some("a"), 0.0),
        ];
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, Some(&SortState::asc("name")));
        assert_eq!(ids(&rows), vec![3, 2, 1]);

        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, Some(&SortState::desc("name")));
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn test_mixed_kinds_are_deterministic() {
        let n = SortValue::number(1.0);
        let t = SortValue::text("x");
        assert_eq!(n.compare(&t, SortDirection::Asc), Ordering::Less);
        assert_eq!(n.compare(&t, SortDirection::Desc), Ordering::Less);
        assert_eq!(SortValue::number(f64::NAN), SortValue::Missing);
    }

    #[test]
    fn test_no_sort_keeps_source_order() {
        let items = vec![item(3, None, 3.0), item(1, None, 1.0)];
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_rows(&mut rows, None);
        assert_eq!(ids(&rows), vec![3, 1]);
    }
}
