//! Shared harness for HTTP tests: a real server on an ephemeral port.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use crm_store::network::Server;
use crm_store::{Config, CustomerStore};
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/customers.json");

pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<CustomerStore>,
    client: reqwest::Client,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server over the fixture data
    pub async fn spawn() -> Self {
        let store = CustomerStore::new();
        store.load_file(FIXTURE).unwrap();
        Self::spawn_with(store, Config::builder()).await
    }

    /// Spawn a server serving `static_dir` for non-API paths
    pub async fn spawn_with_static(static_dir: &Path) -> Self {
        Self::spawn_with(CustomerStore::new(), Config::builder().static_dir(static_dir)).await
    }

    async fn spawn_with(store: CustomerStore, builder: crm_store::config::ConfigBuilder) -> Self {
        let store = Arc::new(store);
        let config = builder.listen_addr("127.0.0.1:0").build();
        let server = Server::bind(config, Arc::clone(&store)).await.unwrap();
        let addr = server.local_addr().unwrap();

        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            server
                .run_until(async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            store,
            client: reqwest::Client::new(),
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client.post(self.url(path)).json(body).send().await.unwrap()
    }

    pub async fn patch_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client.patch(self.url(path)).json(body).send().await.unwrap()
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client.put(self.url(path)).json(body).send().await.unwrap()
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.client.post(self.url(path)).body(body).send().await.unwrap()
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap();
    }
}
