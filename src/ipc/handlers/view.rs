use crate::ipc::error::{err, ok};
use crate::ipc::handlers::filters::filter_json;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_view_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_mut() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };

    let record_count = view.store.len();
    let subjects = view.store.subject_options();
    let filter = filter_json(&view.criteria);
    let sort_key = view.sort.map(|s| s.key.as_str());
    let sort_direction = view.sort.map(|s| s.direction.as_str());

    let rows = view.rows();
    ok(
        &req.id,
        json!({
            "rows": rows,
            "rowCount": rows.len(),
            "recordCount": record_count,
            "subjects": subjects,
            "filter": filter,
            "sortKey": sort_key,
            "sortDirection": sort_direction
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "view.get" => Some(handle_view_get(state, req)),
        _ => None,
    }
}
