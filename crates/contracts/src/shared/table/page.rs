//! Fixed-size, 1-indexed pagination.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Fixed(usize),
    /// Everything on a single page
    ShowAll,
}

impl PageSize {
    /// Interpret the caller's `items_per_page`: unset means the default
    /// size, zero or negative means "show all".
    pub fn from_items_per_page(items_per_page: Option<i64>) -> Self {
        match items_per_page {
            None => PageSize::Fixed(DEFAULT_PAGE_SIZE),
            Some(n) if n <= 0 => PageSize::ShowAll,
            Some(n) => PageSize::Fixed(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    fn limit(self, total_count: usize) -> usize {
        match self {
            PageSize::Fixed(n) => n.max(1),
            PageSize::ShowAll => total_count.max(1),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Fixed(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-indexed
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self { page: 1, page_size }
    }

    /// `ceil(total / size)`, never less than 1
    pub fn total_pages(&self, total_count: usize) -> usize {
        let size = self.page_size.limit(total_count);
        total_count.div_ceil(size).max(1)
    }

    /// Current page clamped into `1..=total_pages`
    pub fn current(&self, total_count: usize) -> usize {
        self.page.clamp(1, self.total_pages(total_count))
    }

    /// Index range of the current page inside the (sorted) list
    pub fn range(&self, total_count: usize) -> Range<usize> {
        let size = self.page_size.limit(total_count);
        let start = (self.current(total_count) - 1).saturating_mul(size);
        let start = start.min(total_count);
        let end = start.saturating_add(size).min(total_count);
        start..end
    }

    pub fn has_prev(&self, total_count: usize) -> bool {
        self.current(total_count) > 1
    }

    pub fn has_next(&self, total_count: usize) -> bool {
        self.current(total_count) < self.total_pages(total_count)
    }

    pub fn next(&mut self, total_count: usize) {
        if self.has_next(total_count) {
            self.page = self.current(total_count) + 1;
        }
    }

    pub fn prev(&mut self, total_count: usize) {
        if self.has_prev(total_count) {
            self.page = self.current(total_count) - 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Controls are only worth showing when there is more than one page
    pub fn needs_controls(&self, total_count: usize) -> bool {
        match self.page_size {
            PageSize::Fixed(n) => total_count > n.max(1),
            PageSize::ShowAll => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_page_interpretation() {
        assert_eq!(PageSize::from_items_per_page(None), PageSize::Fixed(10));
        assert_eq!(PageSize::from_items_per_page(Some(25)), PageSize::Fixed(25));
        assert_eq!(PageSize::from_items_per_page(Some(0)), PageSize::ShowAll);
        assert_eq!(PageSize::from_items_per_page(Some(-3)), PageSize::ShowAll);
    }

    #[test]
    fn test_total_pages() {
        let p = PageState::new(PageSize::Fixed(10));
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(p.total_pages(25), 3);

        let all = PageState::new(PageSize::ShowAll);
        assert_eq!(all.total_pages(0), 1);
        assert_eq!(all.total_pages(1000), 1);
        assert_eq!(all.range(1000), 0..1000);
    }

    #[test]
    fn test_navigation_25_rows() {
        let mut p = PageState::new(PageSize::Fixed(10));
        assert_eq!(p.range(25), 0..10);
        assert!(!p.has_prev(25));

        p.next(25);
        p.next(25);
        assert_eq!(p.page, 3);
        assert_eq!(p.range(25), 20..25);
        assert!(!p.has_next(25));

        // Next on the last page is a no-op
        p.next(25);
        assert_eq!(p.page, 3);

        p.prev(25);
        assert_eq!(p.page, 2);
        assert_eq!(p.range(25), 10..20);
    }

    #[test]
    fn test_page_is_clamped_when_list_shrinks() {
        let mut p = PageState::new(PageSize::Fixed(10));
        p.page = 5;
        assert_eq!(p.current(12), 2);
        assert_eq!(p.range(12), 10..12);
        assert_eq!(p.range(0), 0..0);
    }

    #[test]
    fn test_pages_cover_everything_once() {
        for total in 0..40usize {
            for size in 1..12usize {
                let mut p = PageState::new(PageSize::Fixed(size));
                let mut seen = Vec::new();
                for page in 1..=p.total_pages(total) {
                    p.page = page;
                    seen.extend(p.range(total));
                }
                assert_eq!(seen, (0..total).collect::<Vec<_>>(), "total={total} size={size}");
            }
        }
    }

    #[test]
    fn test_needs_controls() {
        let p = PageState::new(PageSize::Fixed(10));
        assert!(!p.needs_controls(10));
        assert!(p.needs_controls(11));
        assert!(!PageState::new(PageSize::ShowAll).needs_controls(500));
    }
}
