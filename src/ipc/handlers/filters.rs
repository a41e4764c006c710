use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::query::FilterCriteria;
use serde_json::json;

pub(super) fn filter_json(criteria: &FilterCriteria) -> serde_json::Value {
    json!({
        "subject": criteria.subject.as_deref().unwrap_or("All"),
        "minMarks": criteria.min_marks,
        "maxMarks": criteria.max_marks
    })
}

fn handle_set_subject(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_mut() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };

    let subject = match req.params.get("subject").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing subject", None),
    };

    // "All" is the no-filter dropdown option. A subject absent from the
    // store is legal and simply yields an empty view.
    view.criteria.subject = if subject == "All" { None } else { Some(subject) };
    ok(&req.id, json!({ "filter": filter_json(&view.criteria) }))
}

enum Bound {
    Min,
    Max,
}

fn handle_set_bound(state: &mut AppState, req: &Request, bound: Bound) -> serde_json::Value {
    let Some(view) = state.view.as_mut() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };

    // Absent or null clears the bound; anything present must be numeric.
    let value = match req.params.get("value") {
        None => None,
        Some(v) if v.is_null() => None,
        Some(v) => match v.as_f64() {
            Some(n) => Some(n),
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    "value must be a number or null",
                    Some(json!({ "value": v })),
                )
            }
        },
    };

    match bound {
        Bound::Min => view.criteria.min_marks = value,
        Bound::Max => view.criteria.max_marks = value,
    }
    ok(&req.id, json!({ "filter": filter_json(&view.criteria) }))
}

fn handle_subjects_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_ref() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };
    ok(&req.id, json!({ "subjects": view.store.subject_options() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "filter.setSubject" => Some(handle_set_subject(state, req)),
        "filter.setMinMarks" => Some(handle_set_bound(state, req, Bound::Min)),
        "filter.setMaxMarks" => Some(handle_set_bound(state, req, Bound::Max)),
        "subjects.list" => Some(handle_subjects_list(state, req)),
        _ => None,
    }
}
