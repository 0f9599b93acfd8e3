//! Shared test utilities and fixtures for status book tests

use crate::app::services::status_book::CommunityStatusCollection;
use crate::app::services::status_parser::parse_reader;
use crate::app::services::status_parser::tests::SAMPLE_STATUS_BOOK;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub mod export_tests;

/// Collection parsed from the shared sample status book
pub fn sample_collection() -> CommunityStatusCollection {
    parse_reader(SAMPLE_STATUS_BOOK.as_bytes())
        .unwrap()
        .collection
}

/// Write the sample status book into `dir`
pub fn write_sample_book(dir: &Path) -> PathBuf {
    let path = dir.join("nation.csv");
    fs::write(&path, SAMPLE_STATUS_BOOK).unwrap();
    path
}

/// Serve a single HTTP response on a local port and return the URL to request
pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request_head(&mut stream);
            let response = format!(
                "{}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/cis/nation.csv", address)
}

/// Accept one connection and never answer it
pub fn serve_silence(hold_for: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request_head(&mut stream);
            thread::sleep(hold_for);
        }
    });

    format!("http://{}/cis/nation.csv", address)
}

/// URL of a local port nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/cis/nation.csv", address)
}

fn read_request_head(stream: &mut impl Read) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
}
