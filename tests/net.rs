// tests/net.rs
//
// HttpSource against a one-shot local server.

mod common;

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

use etf_view::{
    core::{HttpSource, PageSource},
    session::Session,
};

use common::{KODEX200, kodex200_record, options_in, tmp_dir};

/// Answer one request with `status` and `body`, then hang up.
fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/item/main.naver?code=069500", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 { break; }
            buf.extend_from_slice(&chunk[..n]);
        }
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body.as_bytes()).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    });
    (url, handle)
}

fn source() -> HttpSource {
    HttpSource::with_client(reqwest::blocking::Client::builder().no_proxy().build().unwrap())
}

#[test]
fn ok_page_body_is_returned() {
    let (url, server) = serve_once("200 OK", "<p>안녕</p>");
    assert_eq!(source().get(&url).unwrap(), "<p>안녕</p>");
    let request = server.join().unwrap();
    assert!(request.starts_with("GET /item/main.naver?code=069500 HTTP/1.1"));
}

#[test]
fn error_status_still_hands_over_the_body() {
    let (url, server) = serve_once("404 Not Found", KODEX200);

    let dir = tmp_dir("net_404");
    let options = options_in(&dir);
    let (mut session, _) = Session::open(&options, Box::new(source()));

    let pos = session.fetch(&url).unwrap();
    assert_eq!(session.store().records()[pos], kodex200_record());
    server.join().unwrap();
}
