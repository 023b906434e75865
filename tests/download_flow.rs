// SPDX-License-Identifier: MPL-2.0
//! Integration tests for session fetching and sequential download runs
//! against a local HTTP server.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tempfile::tempdir;
use tripshare::error::SessionError;
use tripshare::net::download::{run_queue, ItemOutcome, RunEvent};
use tripshare::net::{build_client, fetch_photo, fetch_session};
use tripshare::session::SessionKey;

/// One canned HTTP response.
#[derive(Clone)]
struct CannedResponse {
    status: u16,
    reason: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
}

impl CannedResponse {
    fn ok(content_type: &'static str, body: &[u8]) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type,
            body: body.to_vec(),
        }
    }

    fn error(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            content_type: "text/plain",
            body: reason.as_bytes().to_vec(),
        }
    }
}

/// Spawns a minimal photo service on an ephemeral port.
///
/// Routes are matched on the request path with the query stripped. Every
/// request target (path plus query) is recorded for later inspection, and
/// unknown paths get a 404. The server thread ends with the process.
fn spawn_photo_service(
    routes: HashMap<&'static str, CannedResponse>,
) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_by_server = Arc::clone(&seen);
    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            handle_connection(stream, &routes, &seen_by_server);
        }
    });

    (format!("http://{addr}"), seen)
}

fn handle_connection(
    mut stream: TcpStream,
    routes: &HashMap<&'static str, CannedResponse>,
    seen: &Arc<Mutex<Vec<String>>>,
) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain the headers; requests are GETs without bodies
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => return,
            Ok(_) if header.trim().is_empty() => break,
            Ok(_) => {}
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    seen.lock().expect("record request").push(target.clone());

    let path = target.split('?').next().unwrap_or(&target);
    let response = routes
        .get(path)
        .cloned()
        .unwrap_or_else(|| CannedResponse::error(404, "Not Found"));

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
    let _ = stream.flush();
}

fn test_client() -> reqwest::Client {
    build_client(Duration::from_secs(5))
}

#[test]
fn run_saves_files_and_reports_per_item_outcomes() {
    let mut routes = HashMap::new();
    routes.insert(
        "/uploads/beach.jpg",
        CannedResponse::ok("image/jpeg", b"beach-bytes"),
    );
    routes.insert("/uploads/", CannedResponse::ok("image/png", b"png-bytes"));
    routes.insert(
        "/uploads/missing.jpg",
        CannedResponse::error(404, "Not Found"),
    );
    let (base, _seen) = spawn_photo_service(routes);

    let queue = vec![
        format!("{base}/uploads/beach.jpg"),
        // No usable filename segment, the run synthesizes one
        format!("{base}/uploads/"),
        format!("{base}/uploads/missing.jpg"),
    ];
    let dir = tempdir().expect("create temp dir");

    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let mut events = Vec::new();
    let report = rt.block_on(run_queue(
        &test_client(),
        &queue,
        dir.path(),
        Duration::ZERO,
        |event| events.push(event),
    ));

    assert_eq!(report.attempted, 3);
    assert_eq!(report.saved, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.attempted, report.saved + report.failed);
    assert!(!report.is_clean());

    let beach = std::fs::read(dir.path().join("beach.jpg")).expect("saved file");
    assert_eq!(beach, b"beach-bytes");
    let synthesized = std::fs::read(dir.path().join("photo_2.png")).expect("fallback file");
    assert_eq!(synthesized, b"png-bytes");
    assert!(!dir.path().join("missing.jpg").exists());

    assert_eq!(
        events,
        vec![
            RunEvent::ItemStarted { index: 1, total: 3 },
            RunEvent::ItemFinished {
                index: 1,
                total: 3,
                outcome: ItemOutcome::Saved,
            },
            RunEvent::ItemStarted { index: 2, total: 3 },
            RunEvent::ItemFinished {
                index: 2,
                total: 3,
                outcome: ItemOutcome::Saved,
            },
            RunEvent::ItemStarted { index: 3, total: 3 },
            RunEvent::ItemFinished {
                index: 3,
                total: 3,
                outcome: ItemOutcome::Failed,
            },
        ]
    );
}

#[test]
fn run_overwrites_existing_files() {
    let mut routes = HashMap::new();
    routes.insert(
        "/uploads/beach.jpg",
        CannedResponse::ok("image/jpeg", b"fresh-bytes"),
    );
    let (base, _seen) = spawn_photo_service(routes);

    let dir = tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("beach.jpg"), b"stale-bytes").expect("seed stale file");

    let queue = vec![format!("{base}/uploads/beach.jpg")];
    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let report = rt.block_on(run_queue(
        &test_client(),
        &queue,
        dir.path(),
        Duration::ZERO,
        |_| {},
    ));

    assert!(report.is_clean());
    let content = std::fs::read(dir.path().join("beach.jpg")).expect("saved file");
    assert_eq!(content, b"fresh-bytes");
}

#[test]
fn run_sleeps_between_items() {
    let mut routes = HashMap::new();
    routes.insert("/a.jpg", CannedResponse::ok("image/jpeg", b"a"));
    routes.insert("/b.jpg", CannedResponse::ok("image/jpeg", b"b"));
    routes.insert("/c.jpg", CannedResponse::ok("image/jpeg", b"c"));
    let (base, _seen) = spawn_photo_service(routes);

    let queue = vec![
        format!("{base}/a.jpg"),
        format!("{base}/b.jpg"),
        format!("{base}/c.jpg"),
    ];
    let dir = tempdir().expect("create temp dir");

    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let start = Instant::now();
    let report = rt.block_on(run_queue(
        &test_client(),
        &queue,
        dir.path(),
        Duration::from_millis(50),
        |_| {},
    ));
    let elapsed = start.elapsed();

    assert!(report.is_clean());
    // Two pauses separate three items
    assert!(
        elapsed >= Duration::from_millis(100),
        "run finished after {elapsed:?}, pacing was skipped"
    );
}

#[test]
fn fetch_session_parses_and_absolutizes_photo_urls() {
    let payload = br#"{
        "personName": "Alice",
        "tripName": "Bali 2025",
        "selfPhotos": ["/uploads/a.jpg", "/uploads/b.jpg"],
        "groupPhotos": ["https://cdn.example.com/g.jpg"]
    }"#;
    let mut routes = HashMap::new();
    routes.insert(
        "/api/participants/view-photos/42",
        CannedResponse::ok("application/json", payload),
    );
    let (base, seen) = spawn_photo_service(routes);

    let key = SessionKey::new("42", Some("7".to_string()));
    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let session = rt
        .block_on(fetch_session(&test_client(), &base, &key))
        .expect("session loads");

    assert_eq!(session.person_name, "Alice");
    assert_eq!(session.trip_name, "Bali 2025");
    assert_eq!(
        session.self_photos,
        vec![
            format!("{base}/uploads/a.jpg"),
            format!("{base}/uploads/b.jpg"),
        ]
    );
    assert_eq!(session.group_photos, vec!["https://cdn.example.com/g.jpg"]);

    // The trip id travels as a query parameter
    let requests = seen.lock().expect("inspect requests");
    assert_eq!(
        requests.as_slice(),
        ["/api/participants/view-photos/42?tripId=7"]
    );
}

#[test]
fn fetch_session_maps_missing_person_to_not_found() {
    let (base, _seen) = spawn_photo_service(HashMap::new());

    let key = SessionKey::new("99", None);
    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let err = rt
        .block_on(fetch_session(&test_client(), &base, &key))
        .expect_err("missing person fails");

    assert_eq!(err, SessionError::NotFound);
}

#[test]
fn fetch_session_rejects_non_json_payload() {
    let mut routes = HashMap::new();
    routes.insert(
        "/api/participants/view-photos/42",
        CannedResponse::ok("text/html", b"<html>maintenance</html>"),
    );
    let (base, _seen) = spawn_photo_service(routes);

    let key = SessionKey::new("42", None);
    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
    let err = rt
        .block_on(fetch_session(&test_client(), &base, &key))
        .expect_err("html payload fails");

    assert!(matches!(err, SessionError::MalformedResponse(_)));
}

#[test]
fn fetch_photo_returns_bytes_and_maps_server_errors() {
    let mut routes = HashMap::new();
    routes.insert("/thumb.jpg", CannedResponse::ok("image/jpeg", b"thumb"));
    routes.insert(
        "/broken.jpg",
        CannedResponse::error(500, "Internal Server Error"),
    );
    let (base, _seen) = spawn_photo_service(routes);

    let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");

    let bytes = rt
        .block_on(fetch_photo(&test_client(), &format!("{base}/thumb.jpg")))
        .expect("photo loads");
    assert_eq!(bytes, b"thumb");

    let err = rt
        .block_on(fetch_photo(&test_client(), &format!("{base}/broken.jpg")))
        .expect_err("server error fails");
    assert_eq!(err, SessionError::Status(500));
}
