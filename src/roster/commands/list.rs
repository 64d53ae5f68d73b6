use crate::model::Person;
use crate::pagination::{PageWindow, Pager};
use crate::store::DataStore;

/// The records on the pager's current page, plus the window's bounds.
pub fn window<S: DataStore>(store: &S, pager: &Pager) -> PageWindow<Person> {
    pager.window(&store.list_all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use std::num::NonZeroUsize;

    fn pager() -> Pager {
        Pager::new(NonZeroUsize::new(10).unwrap())
    }

    #[test]
    fn lists_current_page() {
        let store = StoreFixture::new().with_people(25).store;
        let mut pager = pager();
        pager.next(store.len());
        pager.next(store.len());

        let w = window(&store, &pager);
        let ids: Vec<_> = w.visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
        assert_eq!(w.page, 3);
    }

    #[test]
    fn window_reports_totals() {
        let store = StoreFixture::new().with_people(25).store;
        let w = window(&store, &pager());
        assert_eq!(w.total_pages, 3);
        assert_eq!(w.total_records, 25);
        assert_eq!(w.visible.len(), 10);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = StoreFixture::new().store;
        let w = window(&store, &pager());
        assert!(w.visible.is_empty());
        assert_eq!(w.total_pages, 1);
    }
}
