// tests/common/mod.rs
//
// Tiny in-process HTTP server standing in for a student app.
//
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use mvc_grade::roster::ROSTER;
use reqwest::Url;

pub const HANG_SECS: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Every route does what the grader expects.
    Correct,
    /// `/nickname` answers 200 but with someone else's nickname.
    WrongNickname,
    /// `/attendees` ignores `q` and lists everybody.
    NoFilter,
    /// 404 everywhere.
    NotFound,
    /// Reads the request, then sits on the connection for `HANG_SECS`.
    Hang,
}

pub struct Fixture {
    pub port: u16,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Fixture {
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn serve(nickname: &str, behavior: Behavior) -> Fixture {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&requests);
    let nickname = nickname.to_string();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            let log = Arc::clone(&log);
            let nickname = nickname.clone();
            thread::spawn(move || handle(stream, &nickname, behavior, &log));
        }
    });

    Fixture { port, requests }
}

/// A port nothing listens on (bound, then released).
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn handle(mut stream: TcpStream, nickname: &str, behavior: Behavior, log: &Mutex<Vec<String>>) {
    let Some(target) = read_request_target(&mut stream) else { return };
    log.lock().unwrap().push(target.clone());

    if behavior == Behavior::Hang {
        thread::sleep(Duration::from_secs(HANG_SECS));
        return;
    }

    let Ok(url) = Url::parse(&format!("http://fixture{target}")) else { return };

    let (status, body) = if behavior == Behavior::NotFound {
        (404, "<h1>Not Found</h1>".to_string())
    } else {
        match url.path() {
            "/" => (200, "<h1>Welcome</h1>".to_string()),
            "/nickname" if behavior == Behavior::WrongNickname => {
                (200, "<p>somebody-else</p>".to_string())
            }
            "/nickname" => (200, format!("<p>{nickname}</p>")),
            "/attendees" => {
                let q = query_param(&url, "q").unwrap_or_default().to_lowercase();
                let items: String = ROSTER
                    .iter()
                    .filter(|p| behavior == Behavior::NoFilter || p.to_lowercase().contains(&q))
                    .map(|p| format!("<li>{p}</li>"))
                    .collect();
                (200, format!("<ul>{items}</ul>"))
            }
            _ => (404, "<h1>Not Found</h1>".to_string()),
        }
    };

    let reason = if status == 200 { "OK" } else { "Not Found" };
    let resp = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(resp.as_bytes());
    let _ = stream.flush();
}

fn read_request_target(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 { break; }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    let first = head.lines().next()?;
    first.split_whitespace().nth(1).map(|s| s.to_string())
}

fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
