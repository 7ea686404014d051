//! Integration Test Utilities and Common Code

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

pub use assert_cmd::prelude::*;
pub use pretty_assertions::assert_eq;
pub use std::process::Command;

/// A one-shot HTTP responder on 127.0.0.1.
///
/// Accepts a single connection, answers it with a canned response, and hands back the request
/// head (request line plus headers) through `join`.
pub struct FakeApi {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl FakeApi {
    pub fn respond(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("should bind a local port");
        let addr = listener.local_addr().expect("should have a local address");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("should accept a connection");
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("should read the request");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(response.as_bytes())
                .expect("should write the response");
            String::from_utf8_lossy(&head).into_owned()
        });

        FakeApi {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn commits(body: &str) -> Self {
        Self::respond("200 OK", body)
    }

    /// Wait for the request to be served and return its head.
    pub fn join(self) -> String {
        self.handle.join().expect("responder thread should not panic")
    }
}

/// Body of a list-commits response holding a single commit.
pub fn one_commit_body(date: &str, message: &str) -> String {
    serde_json::json!([{
        "sha": "2f1c3d4e5a6b7c8d9e0f",
        "commit": {
            "author": {"name": "Ross Wightman", "email": "rw@example.com", "date": date},
            "committer": {"name": "GitHub", "email": "noreply@github.com", "date": date},
            "message": message,
        },
        "parents": [],
    }])
    .to_string()
}

/// Build a `Command` for the `check_new_commits` binary, isolated from proxy settings and
/// logging configuration in the environment.
pub fn check_new_commits() -> Command {
    let mut cmd = Command::cargo_bin("check_new_commits").expect("check_new_commits should be available");
    for var in [
        "http_proxy",
        "https_proxy",
        "all_proxy",
        "HTTP_PROXY",
        "HTTPS_PROXY",
        "ALL_PROXY",
        "CHECK_COMMITS_API_URL",
        "CHECK_COMMITS_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
