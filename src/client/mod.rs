//! Vector store clients.
//!
//! [`connect`] turns a [`ClientConfig`] into a boxed [`VectorClient`]: either the
//! in-process [`LocalClient`] over a segment catalog, or the [`HttpClient`] talking
//! to a running Chroma server.

pub mod http;
pub mod local;

use crate::collection::Collection;
use crate::error::Result;
use crate::settings::{ApiImpl, Settings};
use async_trait::async_trait;

pub use http::HttpClient;
pub use local::LocalClient;

/// Operations every client supports.
#[async_trait]
pub trait VectorClient: Send + Sync {
    /// Return the collection called `name`, creating it if it does not exist.
    async fn get_or_create_collection(&self, name: &str) -> Result<Collection>;

    /// Number of records in `collection`.
    async fn count(&self, collection: &Collection) -> Result<usize>;

    /// Version reported by the backing server, if there is one and it answers.
    async fn server_version(&self) -> Option<String> {
        None
    }
}

/// How to build a client.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientConfig {
    /// Build from a settings value, dispatching on its implementation selector.
    Settings(Settings),
    /// Plain HTTP client for `host:port`.
    Http { host: String, port: u16 },
}

/// Build a client. Construction failures (bad settings, unusable persistence
/// directory, unreachable server) surface here.
pub async fn connect(config: &ClientConfig) -> Result<Box<dyn VectorClient>> {
    match config {
        ClientConfig::Http { host, port } => Ok(Box::new(HttpClient::connect(host, *port).await?)),
        ClientConfig::Settings(settings) => from_settings(settings).await,
    }
}

async fn from_settings(settings: &Settings) -> Result<Box<dyn VectorClient>> {
    settings.validate()?;
    match settings.api_impl {
        ApiImpl::Segment => {
            // validate() guarantees a directory for the segment implementation
            let dir = settings.persist_directory.clone().unwrap_or_default();
            Ok(Box::new(LocalClient::open(dir)?))
        }
        ApiImpl::Rest => {
            if let Some(dir) = &settings.persist_directory {
                tracing::debug!(
                    persist_directory = %dir.display(),
                    "persist_directory has no effect on the rest implementation"
                );
            }
            let host = settings.server_host.clone().unwrap_or_default();
            Ok(Box::new(HttpClient::connect(&host, settings.port()).await?))
        }
    }
}
