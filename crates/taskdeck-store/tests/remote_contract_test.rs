//! Exercises the REST wire contract against a loopback stub server: paths,
//! methods, bodies, and the unavailable-on-failure policy.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use taskdeck_store::{Error, RemoteStore, TaskStore};
use taskdeck_types::{Priority, Task, TaskDraft};

struct RecordedRequest {
    method: String,
    path: String,
    body: String,
}

/// One-shot HTTP stub: accepts a single connection, replies with the given
/// status and body, and reports the request it saw.
fn spawn_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, mpsc::Receiver<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(request) = parse_request(&buf) {
                tx.send(request).ok();
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
                break;
            }
        }
    });

    (format!("http://{}", addr), rx)
}

/// Returns None until the headers and the announced body have fully arrived.
fn parse_request(buf: &[u8]) -> Option<RecordedRequest> {
    let text = String::from_utf8_lossy(buf);
    let header_end = text.find("\r\n\r\n")?;
    let head = &text[..header_end];
    let body = text[header_end + 4..].to_string();

    let mut parts = head.lines().next()?.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    if body.len() < content_length {
        return None;
    }

    Some(RecordedRequest { method, path, body })
}

fn sample_task() -> Task {
    Task {
        id: 7,
        name: "Ship the release".to_string(),
        description: "Tag and push".to_string(),
        priority: Priority::High,
        due_date: Some("2023-12-01".to_string()),
        completed: false,
    }
}

#[tokio::test]
async fn fetch_all_issues_get_to_the_collection() {
    let (base, rx) = spawn_stub(
        "200 OK",
        r#"[{"id":1,"nome":"Ship it","descricao":"","prioridade":"MÉDIA","concluida":false,"dataLimite":"2023-12-01"}]"#,
    );
    let store = RemoteStore::new(base);

    let tasks = store.fetch_all().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "Ship it");
    // Accented spelling on the wire still lands on Medium.
    assert_eq!(tasks[0].priority, Priority::Medium);

    let request = rx.recv().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/tarefas");
}

#[tokio::test]
async fn create_posts_a_draft_without_an_id() {
    let (base, rx) = spawn_stub("201 Created", "");
    let store = RemoteStore::new(base);

    store
        .create(TaskDraft {
            name: "Buy milk".to_string(),
            description: String::new(),
            priority: Priority::Low,
            due_date: None,
            completed: false,
        })
        .await
        .unwrap();

    let request = rx.recv().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/tarefas");

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert!(body.get("id").is_none());
    assert_eq!(body["nome"], "Buy milk");
    assert_eq!(body["prioridade"], "BAIXA");
    assert_eq!(body["concluida"], false);
}

#[tokio::test]
async fn update_puts_the_full_record() {
    let (base, rx) = spawn_stub("200 OK", "");
    let store = RemoteStore::new(base);

    store.update(7, sample_task()).await.unwrap();

    let request = rx.recv().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/tarefas/7");

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["id"], 7);
    assert_eq!(body["nome"], "Ship the release");
    assert_eq!(body["descricao"], "Tag and push");
    assert_eq!(body["prioridade"], "ALTA");
    assert_eq!(body["dataLimite"], "2023-12-01");
    assert_eq!(body["concluida"], false);
}

#[tokio::test]
async fn delete_targets_the_record_url() {
    let (base, rx) = spawn_stub("204 No Content", "");
    let store = RemoteStore::new(base);

    store.delete(7).await.unwrap();

    let request = rx.recv().unwrap();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/tarefas/7");
}

#[tokio::test]
async fn non_success_status_is_unavailable() {
    let (base, _rx) = spawn_stub("500 Internal Server Error", "");
    let store = RemoteStore::new(base);

    let result = store.fetch_all().await;
    assert!(matches!(result, Err(Error::Unavailable(_))));
}

#[tokio::test]
async fn connection_refused_is_unavailable() {
    // Bind then drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = RemoteStore::new(format!("http://{}", addr));
    let result = store.fetch_all().await;
    assert!(matches!(result, Err(Error::Unavailable(_))));
}
