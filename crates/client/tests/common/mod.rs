#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use motorhub_client::{ClientConfig, MotorhubApi, Navigator};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

pub fn api_for(url: &str) -> MotorhubApi {
    MotorhubApi::new(&ClientConfig::new(url)).expect("client should build")
}

/// Counts requests to a handler.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Navigator that records every path it is sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}
