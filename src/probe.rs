//! Probes: build a client under one configuration profile and touch a collection.
//!
//! A probe never fails. Whatever goes wrong is captured in a [`ProbeOutcome`],
//! either at construction time (the client could not be built) or at access time
//! (the collection could not be fetched, created or counted).

use crate::client::{self, ClientConfig, VectorClient};
use crate::collection::Collection;
use crate::error::{DoctorError, Result};
use async_trait::async_trait;
use std::io::{self, Write};

/// The three configuration paths, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Local,
    Remote,
    Alternate,
}

impl ProbeKind {
    pub const ALL: [ProbeKind; 3] = [ProbeKind::Local, ProbeKind::Remote, ProbeKind::Alternate];

    /// Section header printed before the probe runs.
    pub fn title(&self) -> &'static str {
        match self {
            ProbeKind::Local => "Testing with Local Segment Implementation",
            ProbeKind::Remote => "Testing with HTTP Client to Server",
            ProbeKind::Alternate => "Testing with REST Implementation Settings",
        }
    }

    /// Label used in the summary.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeKind::Local => "Local segment implementation",
            ProbeKind::Remote => "HTTP client to server",
            ProbeKind::Alternate => "REST settings with host config",
        }
    }

    fn constructed(&self) -> &'static str {
        match self {
            ProbeKind::Local => "Successfully initialized client with local segment store",
            ProbeKind::Remote => "Successfully connected to server",
            ProbeKind::Alternate => "Successfully initialized client with REST settings",
        }
    }

    fn construction_failed(&self) -> &'static str {
        match self {
            ProbeKind::Remote => "Error connecting to server",
            ProbeKind::Local | ProbeKind::Alternate => "Error initializing client",
        }
    }
}

/// What happened during one probe.
#[derive(Debug)]
pub enum ProbeOutcome {
    Success {
        collection: Collection,
        count: usize,
        server_version: Option<String>,
    },
    /// The client could not be built.
    ConstructionFailed(DoctorError),
    /// The client was built but the collection could not be reached.
    AccessFailed(DoctorError),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }
}

/// Builds clients for probes. The library connector is the real one; tests
/// substitute their own.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, config: &ClientConfig) -> Result<Box<dyn VectorClient>>;
}

/// Connector backed by [`client::connect`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryConnector;

#[async_trait]
impl Connector for LibraryConnector {
    async fn connect(&self, config: &ClientConfig) -> Result<Box<dyn VectorClient>> {
        client::connect(config).await
    }
}

/// Run one probe: construct, then get-or-create `collection_name` and count it.
pub async fn run_probe(
    kind: ProbeKind,
    connector: &dyn Connector,
    config: &ClientConfig,
    collection_name: &str,
) -> ProbeOutcome {
    let client = match connector.connect(config).await {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!(probe = ?kind, error = %e, "client construction failed");
            return ProbeOutcome::ConstructionFailed(e);
        }
    };

    let access = async {
        let collection = client.get_or_create_collection(collection_name).await?;
        let count = client.count(&collection).await?;
        Ok::<_, DoctorError>((collection, count))
    };

    match access.await {
        Ok((collection, count)) => {
            let server_version = client.server_version().await;
            tracing::info!(probe = ?kind, collection = %collection.name, count, "probe succeeded");
            ProbeOutcome::Success {
                collection,
                count,
                server_version,
            }
        }
        Err(e) => {
            tracing::debug!(probe = ?kind, error = %e, "collection access failed");
            ProbeOutcome::AccessFailed(e)
        }
    }
}

/// Print the lines a human reads for one probe.
pub fn render(kind: ProbeKind, outcome: &ProbeOutcome, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", kind.title())?;
    match outcome {
        ProbeOutcome::ConstructionFailed(e) => {
            writeln!(out, "❌ {}: {}", kind.construction_failed(), e)?;
        }
        ProbeOutcome::AccessFailed(e) => {
            writeln!(out, "✅ {}", kind.constructed())?;
            writeln!(out, "❌ Error creating collection: {}", e)?;
        }
        ProbeOutcome::Success {
            collection,
            count,
            server_version,
        } => {
            writeln!(out, "✅ {}", kind.constructed())?;
            if let Some(version) = server_version {
                writeln!(out, "   Server version: {}", version)?;
            }
            writeln!(
                out,
                "✅ Successfully created/accessed test collection: {}",
                collection.name
            )?;
            writeln!(out, "   Collection count: {}", count)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(kind: ProbeKind, outcome: &ProbeOutcome) -> String {
        let mut buf = Vec::new();
        render(kind, outcome, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_construction_failure() {
        let outcome =
            ProbeOutcome::ConstructionFailed(DoctorError::StorageError("disk gone".to_string()));
        let text = render_to_string(ProbeKind::Remote, &outcome);

        assert!(text.contains("--- Testing with HTTP Client to Server ---"));
        assert!(text.contains("❌ Error connecting to server: Storage error: disk gone"));
        assert!(!text.contains("Error creating collection"));
        assert!(!text.contains("✅"));
    }

    #[test]
    fn test_render_access_failure() {
        let outcome = ProbeOutcome::AccessFailed(DoctorError::InvalidCollectionName {
            name: "x".to_string(),
        });
        let text = render_to_string(ProbeKind::Local, &outcome);

        assert!(text.contains("✅ Successfully initialized client with local segment store"));
        assert!(text.contains("❌ Error creating collection: Invalid collection name: x"));
        assert!(!text.contains("Error initializing client"));
    }

    #[test]
    fn test_render_success() {
        let outcome = ProbeOutcome::Success {
            collection: Collection {
                id: "c1".to_string(),
                name: "test_collection".to_string(),
            },
            count: 7,
            server_version: Some("0.5.0".to_string()),
        };
        let text = render_to_string(ProbeKind::Alternate, &outcome);

        assert!(text.contains("✅ Successfully created/accessed test collection: test_collection"));
        assert!(text.contains("   Collection count: 7"));
        assert!(text.contains("   Server version: 0.5.0"));
        assert!(!text.contains("❌"));
    }
}
