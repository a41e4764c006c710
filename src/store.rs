use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub marks: f64,
}

/// Ordered in-memory record collection backing one mounted view.
///
/// Ids come from a counter that only moves forward; they are never
/// recomputed from the current record count, so they stay unique even if
/// a delete operation is ever added.
pub struct RecordStore {
    records: Vec<StudentRecord>,
    next_id: i64,
    revision: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    pub fn append(&mut self, name: String, subject: String, marks: f64) -> &StudentRecord {
        let id = self.next_id;
        self.next_id += 1;
        self.revision += 1;
        self.records.push(StudentRecord {
            id,
            name,
            subject,
            marks,
        });
        self.records.last().expect("just pushed")
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Bumped on every mutation; the view cache keys on it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Dropdown options: "All" followed by the sorted distinct subjects
    /// currently present in the store.
    pub fn subject_options(&self) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for r in &self.records {
            if !subjects.contains(&r.subject) {
                subjects.push(r.subject.clone());
            }
        }
        subjects.sort();
        let mut options = Vec::with_capacity(subjects.len() + 1);
        options.push("All".to_string());
        options.extend(subjects);
        options
    }
}
