use serde::Serialize;

/// Transient strings backing the add-record form. Values arrive one
/// keystroke event at a time and survive rejected submissions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Draft {
    pub name: String,
    pub subject: String,
    pub marks: String,
}

pub struct NewStudent {
    pub name: String,
    pub subject: String,
    pub marks: f64,
}

impl Draft {
    /// Presence check plus marks parse. `None` means the submission is a
    /// no-op; the caller leaves the draft untouched.
    pub fn validate(&self) -> Option<NewStudent> {
        let name = self.name.trim();
        let subject = self.subject.trim();
        let marks_raw = self.marks.trim();
        if name.is_empty() || subject.is_empty() || marks_raw.is_empty() {
            return None;
        }
        // f64 parsing accepts "NaN" and "inf"; neither belongs in the
        // store or the sort comparator.
        let marks: f64 = marks_raw.parse().ok()?;
        if !marks.is_finite() {
            return None;
        }
        Some(NewStudent {
            name: name.to_string(),
            subject: subject.to_string(),
            marks,
        })
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}
