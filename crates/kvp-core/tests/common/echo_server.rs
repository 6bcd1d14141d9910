//! Minimal HTTP/1.1 server for outbound GET integration tests.
//!
//! Routes:
//! - `/status/<code>`: responds with `<code>` and body `status <code>`
//! - `/headers`: responds 200 with the raw request header lines as body
//! - `/redirect`: 302 to `/`
//! - anything else: 200 with the body given at start

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, body: &str) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut lines = request.split("\r\n");
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let header_lines: Vec<&str> = lines.take_while(|l| !l.is_empty()).collect();

    let (status, reason, extra, payload) = if let Some(code) = path.strip_prefix("/status/") {
        let code: u16 = code.parse().unwrap_or(500);
        (code, "Status", String::new(), format!("status {}", code))
    } else if path == "/headers" {
        (200, "OK", String::new(), header_lines.join("\n"))
    } else if path == "/redirect" {
        (302, "Found", "Location: /\r\n".to_string(), String::new())
    } else {
        (200, "OK", String::new(), body.to_string())
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
        status,
        reason,
        payload.len(),
        extra,
        payload
    );
    let _ = stream.write_all(response.as_bytes());
}
