use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_marktabled");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn marktabled");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn subjects(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>, id: &str) -> Vec<String> {
    let result = request_ok(stdin, reader, id, "subjects.list", json!({}));
    result
        .get("subjects")
        .and_then(|v| v.as_array())
        .expect("subjects")
        .iter()
        .map(|v| v.as_str().expect("subject string").to_string())
        .collect()
}

#[test]
fn options_are_all_plus_sorted_distinct_subjects() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "view.mount",
        json!({ "records": [
            { "name": "Alice", "subject": "Math", "marks": 92 },
            { "name": "Bob", "subject": "Physics", "marks": 78 },
            { "name": "Charlie", "subject": "Chemistry", "marks": 85 },
            { "name": "Diana", "subject": "Math", "marks": 69 },
            { "name": "Ethan", "subject": "Physics", "marks": 88 }
        ] }),
    );

    assert_eq!(
        subjects(&mut stdin, &mut reader, "2"),
        vec!["All", "Chemistry", "Math", "Physics"]
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn options_grow_when_a_new_subject_is_added() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "view.mount",
        json!({ "records": [
            { "name": "Alice", "subject": "Math", "marks": 92 },
            { "name": "Bob", "subject": "Physics", "marks": 78 }
        ] }),
    );

    request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "form.update",
        json!({ "name": "Fay", "subject": "Biology", "marks": "95" }),
    );
    request_ok(&mut stdin, &mut reader, "3", "form.submit", json!({}));

    assert_eq!(
        subjects(&mut stdin, &mut reader, "4"),
        vec!["All", "Biology", "Math", "Physics"]
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn duplicate_subjects_appear_once() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "view.mount",
        json!({ "records": [
            { "name": "Alice", "subject": "Math", "marks": 92 },
            { "name": "Diana", "subject": "Math", "marks": 69 }
        ] }),
    );

    request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "form.update",
        json!({ "name": "Gus", "subject": "Math", "marks": "71" }),
    );
    request_ok(&mut stdin, &mut reader, "3", "form.submit", json!({}));

    assert_eq!(subjects(&mut stdin, &mut reader, "4"), vec!["All", "Math"]);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn empty_store_offers_only_all() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    request_ok(&mut stdin, &mut reader, "1", "view.mount", json!({}));

    assert_eq!(subjects(&mut stdin, &mut reader, "2"), vec!["All"]);

    drop(stdin);
    let _ = child.wait();
}
