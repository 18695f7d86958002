//! Server answering with headers and then never finishing the body.
//!
//! Exercises timeouts that fire while the client reads the response body, after `send()`
//! has already returned.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

use crate::error::TestError;

/// Status line and headers promising a longer JSON body than is ever sent.
const STALLED_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
content-type: application/json\r\n\
content-length: 64\r\n\
\r\n\
{\"items\":";

/// How long each connection is held open after the partial body.
const STALL: Duration = Duration::from_secs(30);

/// Running stalling server, stopped when dropped.
pub struct StallingServer {
    base_url: String,
    connections: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl StallingServer {
    /// Binds an ephemeral port on localhost and starts accepting connections.
    ///
    /// # Returns
    /// - `Ok(StallingServer)` - Running server
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start() -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let connections = Arc::new(AtomicUsize::new(0));
        let counter = connections.clone();

        let handle = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = stream.read(&mut buf).await;
                    let _ = stream.write_all(STALLED_RESPONSE).await;
                    let _ = stream.flush().await;
                    tokio::time::sleep(STALL).await;
                });
            }
        });

        Ok(Self {
            base_url: format!("http://{}/", addr),
            connections,
            handle,
        })
    }

    /// Base URL of the server with a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of connections accepted so far.
    pub fn hits(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for StallingServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
