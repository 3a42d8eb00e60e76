//! Test-only helpers.

#![allow(clippy::unwrap_used)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Starts a local HTTP server that answers exactly one request with the
/// given status line and body, then shuts down. Returns the base URL.
///
/// A second connection attempt is refused, which lets tests assert that a
/// code path did not go back to the network.
pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut raw = Vec::new();
            let mut chunk = [0u8; 8192];
            loop {
                let Ok(n) = stream.read(&mut chunk) else {
                    break;
                };
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

/// True once `raw` holds the full request head plus `Content-Length` bytes
/// of body.
fn request_complete(raw: &[u8]) -> bool {
    let Some(head_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let head = String::from_utf8_lossy(&raw[..head_end]);
    let content_length = head
        .lines()
        .find_map(|line| {
            let lower = line.to_ascii_lowercase();
            lower
                .strip_prefix("content-length:")
                .and_then(|v| v.trim().parse::<usize>().ok())
        })
        .unwrap_or(0);

    raw.len() >= head_end + 4 + content_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_complete_waits_for_body() {
        let head = b"POST / HTTP/1.1\r\ncontent-length: 5\r\n\r\n";
        assert!(!request_complete(head));

        let mut full = head.to_vec();
        full.extend_from_slice(b"hello");
        assert!(request_complete(&full));
    }

    #[test]
    fn test_request_complete_without_body() {
        assert!(request_complete(b"GET /models HTTP/1.1\r\nHost: x\r\n\r\n"));
    }
}
