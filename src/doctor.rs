//! Orchestrator: banner, the three probes in fixed order, then the summary.

use crate::client::ClientConfig;
use crate::probe::{self, Connector, ProbeKind};
use crate::report::{self, Outcomes};
use crate::settings::{
    Settings, DEFAULT_COLLECTION, DEFAULT_HOST, DEFAULT_PERSIST_DIRECTORY, DEFAULT_PORT,
};
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the probes point.
#[derive(Debug, Clone)]
pub struct DoctorConfig {
    pub host: String,
    pub port: u16,
    pub persist_directory: PathBuf,
    pub collection: String,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            persist_directory: PathBuf::from(DEFAULT_PERSIST_DIRECTORY),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl DoctorConfig {
    /// Client configuration for one probe.
    pub fn client_config(&self, kind: ProbeKind) -> ClientConfig {
        match kind {
            ProbeKind::Local => ClientConfig::Settings(Settings::segment(&self.persist_directory)),
            ProbeKind::Remote => ClientConfig::Http {
                host: self.host.clone(),
                port: self.port,
            },
            ProbeKind::Alternate => ClientConfig::Settings(
                Settings::rest(&self.host, self.port)
                    .with_persist_directory(&self.persist_directory),
            ),
        }
    }
}

/// Version of the client library compiled into this binary.
///
/// Cargo always sets `CARGO_PKG_VERSION`; the `None` case only arises when the
/// crate is built by other tooling, and the banner then prints `Not imported`.
pub fn library_version() -> Option<&'static str> {
    option_env!("CARGO_PKG_VERSION")
}

/// Runs every probe and reports.
pub struct Doctor<C: Connector> {
    config: DoctorConfig,
    connector: C,
    library_version: Option<&'static str>,
}

impl<C: Connector> Doctor<C> {
    pub fn new(config: DoctorConfig, connector: C) -> Self {
        Self {
            config,
            connector,
            library_version: library_version(),
        }
    }

    /// Override the version shown in the banner.
    pub fn with_library_version(mut self, version: Option<&'static str>) -> Self {
        self.library_version = version;
        self
    }

    /// Run local, remote and alternate probes in that order, never stopping
    /// early, and print everything to `out`.
    pub async fn run(&self, out: &mut dyn Write) -> io::Result<Outcomes> {
        report::print_banner(out, self.library_version)?;

        let mut outcomes = Outcomes::default();
        for kind in ProbeKind::ALL {
            let client_config = self.config.client_config(kind);
            let outcome = probe::run_probe(
                kind,
                &self.connector,
                &client_config,
                &self.config.collection,
            )
            .await;
            probe::render(kind, &outcome, out)?;
            outcomes.set(kind, outcome.is_success());
        }

        report::print_summary(out, &outcomes)?;
        Ok(outcomes)
    }
}
