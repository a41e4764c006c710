use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::query::{toggle_sort, SortKey};
use serde_json::json;

fn handle_sort_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_mut() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };

    let raw = match req.params.get("key").and_then(|v| v.as_str()) {
        Some(v) => v,
        None => return err(&req.id, "bad_params", "missing key", None),
    };
    let Some(key) = SortKey::parse(raw) else {
        return err(
            &req.id,
            "bad_params",
            "key must be one of: name, subject, marks",
            Some(json!({ "key": raw })),
        );
    };

    view.sort = toggle_sort(view.sort, key);
    ok(
        &req.id,
        json!({
            "sortKey": view.sort.map(|s| s.key.as_str()),
            "sortDirection": view.sort.map(|s| s.direction.as_str())
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "sort.toggle" => Some(handle_sort_toggle(state, req)),
        _ => None,
    }
}
