//! Client settings: which implementation to build and where it lives.

use crate::error::{DoctorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Host the remote probes connect to when nothing else is given.
pub const DEFAULT_HOST: &str = "localhost";

/// HTTP port of the server.
pub const DEFAULT_PORT: u16 = 8000;

/// Persistence directory of the embedded store, relative to the working directory.
pub const DEFAULT_PERSIST_DIRECTORY: &str = "./vector_store";

/// Collection every probe requests.
pub const DEFAULT_COLLECTION: &str = "test_collection";

/// Implementation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiImpl {
    /// In-process segment store persisted to `persist_directory`.
    Segment,
    /// REST client talking to `server_host:server_http_port`.
    Rest,
}

impl FromStr for ApiImpl {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segment" | "local" | "chromadb.api.segment.segmentapi" => Ok(ApiImpl::Segment),
            "rest" | "http" | "fastapi" | "chromadb.api.fastapi.fastapi" => Ok(ApiImpl::Rest),
            other => Err(DoctorError::InvalidSettings(format!(
                "unknown api implementation: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ApiImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiImpl::Segment => write!(f, "segment"),
            ApiImpl::Rest => write!(f, "rest"),
        }
    }
}

/// Settings handed to [`crate::client::connect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub api_impl: ApiImpl,
    #[serde(default)]
    pub server_host: Option<String>,
    #[serde(default)]
    pub server_http_port: Option<u16>,
    #[serde(default)]
    pub persist_directory: Option<PathBuf>,
}

impl Settings {
    /// Settings for the embedded segment store at `persist_directory`.
    pub fn segment(persist_directory: impl Into<PathBuf>) -> Self {
        Self {
            api_impl: ApiImpl::Segment,
            server_host: None,
            server_http_port: None,
            persist_directory: Some(persist_directory.into()),
        }
    }

    /// Settings for the REST implementation.
    pub fn rest(host: impl Into<String>, port: u16) -> Self {
        Self {
            api_impl: ApiImpl::Rest,
            server_host: Some(host.into()),
            server_http_port: Some(port),
            persist_directory: None,
        }
    }

    /// Attach a persistence directory.
    pub fn with_persist_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.persist_directory = Some(dir.into());
        self
    }

    /// Port to use, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.server_http_port.unwrap_or(DEFAULT_PORT)
    }

    /// Check that the selected implementation has what it needs.
    pub fn validate(&self) -> Result<()> {
        match self.api_impl {
            ApiImpl::Segment if self.persist_directory.is_none() => Err(
                DoctorError::InvalidSettings("segment api requires persist_directory".to_string()),
            ),
            ApiImpl::Rest => match self.server_host.as_deref() {
                Some(host) if !host.trim().is_empty() => Ok(()),
                _ => Err(DoctorError::InvalidSettings(
                    "rest api requires server_host".to_string(),
                )),
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_impl() {
        assert_eq!("segment".parse::<ApiImpl>().unwrap(), ApiImpl::Segment);
        assert_eq!(
            "chromadb.api.segment.SegmentAPI".parse::<ApiImpl>().unwrap(),
            ApiImpl::Segment
        );
        assert_eq!("FastAPI".parse::<ApiImpl>().unwrap(), ApiImpl::Rest);
        assert_eq!(
            "chromadb.api.fastapi.FastAPI".parse::<ApiImpl>().unwrap(),
            ApiImpl::Rest
        );
        assert!(matches!(
            "grpc".parse::<ApiImpl>(),
            Err(DoctorError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Settings::segment("./data").validate().is_ok());
        assert!(Settings::rest("localhost", 8000).validate().is_ok());

        let mut no_dir = Settings::segment("./data");
        no_dir.persist_directory = None;
        assert!(no_dir.validate().is_err());

        assert!(Settings::rest("  ", 8000).validate().is_err());
    }

    #[test]
    fn test_port_default() {
        let mut settings = Settings::rest("localhost", 9000);
        assert_eq!(settings.port(), 9000);
        settings.server_http_port = None;
        assert_eq!(settings.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_deserialize_from_json() {
        let settings: Settings = serde_json::from_str(
            r#"{"api_impl": "rest", "server_host": "db", "persist_directory": "./vs"}"#,
        )
        .unwrap();
        assert_eq!(settings.api_impl, ApiImpl::Rest);
        assert_eq!(settings.server_host.as_deref(), Some("db"));
        assert_eq!(settings.port(), DEFAULT_PORT);
    }
}
