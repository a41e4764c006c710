use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::state::ViewState;
use crate::store::RecordStore;
use serde_json::json;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "mounted": state.view.is_some()
        }),
    )
}

fn handle_view_mount(state: &mut AppState, req: &Request) -> serde_json::Value {
    let mut store = RecordStore::new();

    if let Some(records) = req.params.get("records") {
        let Some(entries) = records.as_array() else {
            return err(&req.id, "bad_params", "records must be an array", None);
        };
        for (i, entry) in entries.iter().enumerate() {
            let name = entry
                .get("name")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .unwrap_or("");
            let subject = entry
                .get("subject")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .unwrap_or("");
            if name.is_empty() || subject.is_empty() {
                return err(
                    &req.id,
                    "bad_params",
                    "record name/subject must be non-empty",
                    Some(json!({ "index": i })),
                );
            }
            let Some(marks) = entry.get("marks").and_then(|v| v.as_f64()) else {
                return err(
                    &req.id,
                    "bad_params",
                    "record marks must be numeric",
                    Some(json!({ "index": i })),
                );
            };
            store.append(name.to_string(), subject.to_string(), marks);
        }
    }

    let record_count = store.len();
    // Remounting replaces any previous view; its state is gone.
    state.view = Some(ViewState::new(store));
    ok(&req.id, json!({ "recordCount": record_count }))
}

fn handle_view_unmount(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.view = None;
    ok(&req.id, json!({ "ok": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "view.mount" => Some(handle_view_mount(state, req)),
        "view.unmount" => Some(handle_view_unmount(state, req)),
        _ => None,
    }
}
