//! # Pagination
//!
//! The visible window is **derived**, never stored. Every read goes through
//! [`compute_window`] against the current record set and the current page, so
//! a window can't go stale after a create, update or delete.
//!
//! The only mutable paging state is [`Pager`]: the current page and the fixed
//! page size. Pages are 1-based. A record set of any size, including zero, has
//! at least one page.
//!
//! ```text
//! page_size = 10, 25 records
//!
//! page 1 -> records[0..10]
//! page 2 -> records[10..20]
//! page 3 -> records[20..25]
//! ```
//!
//! After a mutation the caller must [`Pager::clamp`] so the current page never
//! points past the last one (e.g. page 3 of 3 becoming page 2 of 2 once the
//! 21st record is deleted).

use serde::Serialize;
use std::num::NonZeroUsize;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow<T> {
    pub visible: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

/// Number of pages needed for `len` records. Never less than one.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice out the records visible on `page`.
///
/// Out-of-range pages (0, or past the last page) give an empty window rather
/// than an error.
pub fn compute_window<T: Clone>(
    records: &[T],
    page: usize,
    page_size: NonZeroUsize,
) -> PageWindow<T> {
    let size = page_size.get();
    let visible = match page.checked_sub(1) {
        Some(zero_based) => {
            let start = zero_based.saturating_mul(size).min(records.len());
            let end = start.saturating_add(size).min(records.len());
            records[start..end].to_vec()
        }
        None => Vec::new(),
    };

    PageWindow {
        visible,
        page,
        total_pages: total_pages(records.len(), page_size),
        total_records: records.len(),
    }
}

pub fn next_page(current: usize, total_pages: usize) -> usize {
    if current >= total_pages {
        current
    } else {
        current + 1
    }
}

pub fn prev_page(current: usize) -> usize {
    if current <= 1 {
        current
    } else {
        current - 1
    }
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Current page plus the session's fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Advance one page unless already on the last. Returns the new page.
    pub fn next(&mut self, len: usize) -> usize {
        self.current_page = next_page(self.current_page, self.total_pages(len));
        self.current_page
    }

    /// Go back one page unless already on the first. Returns the new page.
    pub fn prev(&mut self) -> usize {
        self.current_page = prev_page(self.current_page);
        self.current_page
    }

    /// Pull the current page back into range for a set of `len` records.
    /// Returns true when the page moved.
    pub fn clamp(&mut self, len: usize) -> bool {
        let clamped = clamp_page(self.current_page, self.total_pages(len));
        let moved = clamped != self.current_page;
        self.current_page = clamped;
        moved
    }

    pub fn window<T: Clone>(&self, records: &[T]) -> PageWindow<T> {
        compute_window(records, self.current_page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn records(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn twenty_five_records_make_three_pages() {
        let recs = records(25);
        let p1 = compute_window(&recs, 1, size(10));
        let p2 = compute_window(&recs, 2, size(10));
        let p3 = compute_window(&recs, 3, size(10));

        assert_eq!(p1.total_pages, 3);
        assert_eq!(p1.visible, (1..=10).collect::<Vec<_>>());
        assert_eq!(p2.visible, (11..=20).collect::<Vec<_>>());
        assert_eq!(p3.visible, (21..=25).collect::<Vec<_>>());
        assert_eq!(p3.total_records, 25);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        assert_eq!(total_pages(20, size(10)), 2);
        assert_eq!(total_pages(21, size(10)), 3);
        assert_eq!(total_pages(1, size(10)), 1);
    }

    #[test]
    fn empty_set_has_one_empty_page() {
        let recs: Vec<usize> = Vec::new();
        let w = compute_window(&recs, 1, size(10));
        assert_eq!(w.total_pages, 1);
        assert!(w.visible.is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty_not_a_panic() {
        let recs = records(5);
        assert!(compute_window(&recs, 0, size(10)).visible.is_empty());
        assert!(compute_window(&recs, 2, size(10)).visible.is_empty());
        assert!(compute_window(&recs, usize::MAX, size(10)).visible.is_empty());
    }

    #[test]
    fn navigation_stops_at_bounds() {
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(2, 3), 3);
        assert_eq!(prev_page(1), 1);
        assert_eq!(prev_page(2), 1);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(2, 4), 2);
    }

    #[test]
    fn pager_navigation_on_empty_set_stays_on_page_one() {
        let mut pager = Pager::default();
        assert_eq!(pager.next(0), 1);
        assert_eq!(pager.prev(), 1);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn pager_reclamps_when_last_page_disappears() {
        let mut recs = records(21);
        let mut pager = Pager::new(size(10));
        pager.next(recs.len());
        pager.next(recs.len());
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.window(&recs).visible, vec![21]);

        recs.pop();
        assert!(pager.clamp(recs.len()));
        assert_eq!(pager.current_page(), 2);

        let w = pager.window(&recs);
        assert_eq!(w.total_pages, 2);
        assert_eq!(w.visible, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn pager_clamp_is_noop_when_in_range() {
        let mut pager = Pager::new(size(10));
        pager.next(25);
        assert!(!pager.clamp(25));
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn small_page_size() {
        let recs = records(3);
        let mut pager = Pager::new(size(1));
        assert_eq!(pager.total_pages(recs.len()), 3);
        pager.next(recs.len());
        assert_eq!(pager.window(&recs).visible, vec![2]);
    }
}
