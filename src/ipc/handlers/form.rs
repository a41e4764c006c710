use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_form_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_ref() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };
    ok(&req.id, json!({ "draft": view.draft }))
}

fn handle_form_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_mut() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };

    // Partial merge: each keystroke event touches only the fields it
    // carries. Provided fields must be strings.
    for (field, slot) in [
        ("name", &mut view.draft.name),
        ("subject", &mut view.draft.subject),
        ("marks", &mut view.draft.marks),
    ] {
        let Some(value) = req.params.get(field) else {
            continue;
        };
        let Some(text) = value.as_str() else {
            return err(
                &req.id,
                "bad_params",
                format!("{} must be a string", field),
                None,
            );
        };
        *slot = text.to_string();
    }

    ok(&req.id, json!({ "draft": view.draft }))
}

fn handle_form_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(view) = state.view.as_mut() else {
        return err(&req.id, "no_view", "mount a view first", None);
    };

    // Incomplete or unparseable drafts are a silent no-op: the store is
    // untouched and the draft keeps its entered values.
    let Some(new) = view.draft.validate() else {
        return ok(
            &req.id,
            json!({ "added": false, "recordCount": view.store.len() }),
        );
    };

    let record = view.store.append(new.name, new.subject, new.marks).clone();
    view.draft.clear();
    ok(
        &req.id,
        json!({
            "added": true,
            "record": record,
            "recordCount": view.store.len()
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "form.get" => Some(handle_form_get(state, req)),
        "form.update" => Some(handle_form_update(state, req)),
        "form.submit" => Some(handle_form_submit(state, req)),
        _ => None,
    }
}
