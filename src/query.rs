use crate::store::{RecordStore, StudentRecord};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Subject,
    Marks,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "subject" => Some(SortKey::Subject),
            "marks" => Some(SortKey::Marks),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Subject => "subject",
            SortKey::Marks => "marks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Header-click transition: asc -> desc -> unsorted for the same key,
/// any other key starts its own ascending cycle.
pub fn toggle_sort(current: Option<SortOrder>, key: SortKey) -> Option<SortOrder> {
    match current {
        Some(order) if order.key == key => match order.direction {
            SortDirection::Asc => Some(SortOrder {
                key,
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortOrder {
            key,
            direction: SortDirection::Asc,
        }),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// `None` renders as the "All" dropdown option.
    pub subject: Option<String>,
    pub min_marks: Option<f64>,
    pub max_marks: Option<f64>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &StudentRecord) -> bool {
        if let Some(subject) = &self.subject {
            if record.subject != *subject {
                return false;
            }
        }
        if let Some(min) = self.min_marks {
            if record.marks < min {
                return false;
            }
        }
        if let Some(max) = self.max_marks {
            if record.marks > max {
                return false;
            }
        }
        true
    }
}

fn compare_on(key: SortKey, a: &StudentRecord, b: &StudentRecord) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Subject => a.subject.cmp(&b.subject),
        SortKey::Marks => a.marks.total_cmp(&b.marks),
    }
}

/// Pure derivation of the rendered rows: filter, then stable sort.
///
/// Descending order reverses unequal comparisons only, so ties keep the
/// relative order the filter step produced. The store is not touched.
pub fn derive_view(
    records: &[StudentRecord],
    criteria: &FilterCriteria,
    sort: Option<SortOrder>,
) -> Vec<StudentRecord> {
    let mut rows: Vec<StudentRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();

    if let Some(order) = sort {
        rows.sort_by(|a, b| {
            let ord = compare_on(order.key, a, b);
            match order.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    rows
}

#[derive(Clone, PartialEq)]
struct CacheKey {
    revision: u64,
    criteria: FilterCriteria,
    sort: Option<SortOrder>,
}

/// Memoizes `derive_view` against (store revision, criteria, sort) so
/// repeated reads with unchanged inputs serve the same rows without
/// recomputing.
#[derive(Default)]
pub struct ViewCache {
    key: Option<CacheKey>,
    rows: Vec<StudentRecord>,
}

impl ViewCache {
    pub fn rows(
        &mut self,
        store: &RecordStore,
        criteria: &FilterCriteria,
        sort: Option<SortOrder>,
    ) -> &[StudentRecord] {
        let key = CacheKey {
            revision: store.revision(),
            criteria: criteria.clone(),
            sort,
        };
        if self.key.as_ref() != Some(&key) {
            self.rows = derive_view(store.records(), criteria, sort);
            self.key = Some(key);
        }
        &self.rows
    }
}
