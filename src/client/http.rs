//! Remote client backed by the `chromadb` crate.

use crate::client::VectorClient;
use crate::collection::Collection;
use crate::error::Result;
use async_trait::async_trait;
use chromadb::client::ChromaClientOptions;
use chromadb::{ChromaClient, ChromaCollection};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Client for a separately running Chroma server.
pub struct HttpClient {
    url: String,
    client: ChromaClient,
    heartbeat: u64,
    /// Collections handed out by this client, keyed by id.
    collections: Mutex<HashMap<String, ChromaCollection>>,
}

impl HttpClient {
    /// Connect to the server at `host:port`.
    ///
    /// A heartbeat is sent before returning, so an unreachable or unhealthy
    /// server is reported here rather than on first use. No request timeout
    /// is configured.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let url = format!("http://{}:{}", host, port);
        let client = ChromaClient::new(ChromaClientOptions {
            url: Some(url.clone()),
            ..Default::default()
        })
        .await?;
        let heartbeat = client.heartbeat().await?;

        tracing::debug!(%url, heartbeat, "connected");
        Ok(Self {
            url,
            client,
            heartbeat,
            collections: Mutex::new(HashMap::new()),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Heartbeat value returned when the connection was established.
    pub fn last_heartbeat(&self) -> u64 {
        self.heartbeat
    }
}

#[async_trait]
impl VectorClient for HttpClient {
    async fn get_or_create_collection(&self, name: &str) -> Result<Collection> {
        let remote = self.client.get_or_create_collection(name, None).await?;
        let handle = Collection {
            id: remote.id().to_string(),
            name: remote.name().to_string(),
        };
        self.collections
            .lock()
            .await
            .insert(handle.id.clone(), remote);
        Ok(handle)
    }

    async fn count(&self, collection: &Collection) -> Result<usize> {
        let cache = self.collections.lock().await;
        let count = match cache.get(&collection.id) {
            Some(remote) => remote.count().await?,
            None => {
                self.client
                    .get_collection(&collection.name)
                    .await?
                    .count()
                    .await?
            }
        };
        Ok(count)
    }

    async fn server_version(&self) -> Option<String> {
        match self.client.version().await {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::debug!(error = %e, "server did not report a version");
                None
            }
        }
    }
}
