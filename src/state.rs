use crate::form::Draft;
use crate::query::{FilterCriteria, SortOrder, ViewCache};
use crate::store::{RecordStore, StudentRecord};

/// Everything one mounted view owns. Dropped wholesale on unmount, which
/// is what makes the store's lifetime equal the view's.
pub struct ViewState {
    pub store: RecordStore,
    pub criteria: FilterCriteria,
    pub sort: Option<SortOrder>,
    pub draft: Draft,
    cache: ViewCache,
}

impl ViewState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            sort: None,
            draft: Draft::default(),
            cache: ViewCache::default(),
        }
    }

    /// Memoized derived view for the current store/criteria/sort.
    pub fn rows(&mut self) -> &[StudentRecord] {
        self.cache.rows(&self.store, &self.criteria, self.sort)
    }
}
