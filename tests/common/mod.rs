#![allow(dead_code)]

use link_preview_card::{Fetcher, FetcherConfig};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned HTTP response, e.g. `("200 OK", r#"{"data":{}}"#)`.
pub type CannedResponse = (&'static str, &'static str);

/// Serves canned responses in connection order; the last one repeats once the
/// queue drains. Stands in for the metadata proxy.
pub async fn spawn_proxy(responses: Vec<CannedResponse>) -> SocketAddr {
    spawn_proxy_with_delays(responses.into_iter().map(|r| (0, r)).collect()).await
}

/// Like `spawn_proxy`, but each response is held back for the given number of
/// milliseconds before being written. Used to stage late-arriving responses.
pub async fn spawn_proxy_with_delays(responses: Vec<(u64, CannedResponse)>) -> SocketAddr {
    assert!(!responses.is_empty());
    let last = responses[responses.len() - 1];
    let queue = Arc::new(Mutex::new(responses.into_iter().collect::<VecDeque<_>>()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let (delay_ms, (status, body)) = queue.lock().unwrap().pop_front().unwrap_or(last);
            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                if delay_ms > 0 {
                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// A fetcher pointed at the local stand-in proxy.
pub fn local_fetcher(addr: SocketAddr) -> Fetcher {
    Fetcher::new_with_config(FetcherConfig {
        proxy_base: format!("http://{addr}/"),
        ..FetcherConfig::default()
    })
}
