//! Minimal HTTP/1.1 server serving a fixed body for integration tests.
//!
//! Responds to every request with the configured status and body, then
//! closes the connection.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct FeedServerOptions {
    pub status: u16,
    pub content_type: &'static str,
}

impl Default for FeedServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: "application/rss+xml",
        }
    }
}

/// Starts a server in a background thread serving `body` with HTTP 200.
/// Returns the feed URL. The server runs until the process exits.
pub fn start(body: &str) -> String {
    start_with_options(body, FeedServerOptions::default())
}

/// Like `start` but allows customizing the response status and content type.
pub fn start_with_options(body: &str, opts: FeedServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.as_bytes().to_vec());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/feed.xml", port)
}

/// URL on a port nothing is listening on (connection refused).
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/feed.xml", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: FeedServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        reason,
        opts.content_type,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
