//! Serves an arbitrary router on a loopback port.

use std::net::SocketAddr;

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// A router bound to `127.0.0.1` on an ephemeral port.
pub struct RouterServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl RouterServer {
    /// Returns the base URL clients should target.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stops the server and waits for the task to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = (&mut self.handle).await;
    }
}

impl Drop for RouterServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Binds the router to a free port and serves it in the background.
pub async fn spawn_router(router: Router) -> RouterServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
    });

    RouterServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}
