//! # VectorDB Doctor
//!
//! Checks whether a vector store client can be built and can reach a collection
//! through three configuration paths:
//! - embedded segment catalog persisted to a local directory
//! - HTTP client against a running server
//! - REST implementation selected through explicit settings
//!
//! ## Example
//!
//! ```no_run
//! use vectordb_doctor::{Doctor, DoctorConfig, LibraryConnector};
//!
//! # async fn run() -> std::io::Result<()> {
//! let doctor = Doctor::new(DoctorConfig::default(), LibraryConnector);
//! let outcomes = doctor.run(&mut std::io::stdout()).await?;
//! println!("local ok: {}", outcomes.local);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod collection;
pub mod doctor;
pub mod error;
pub mod probe;
pub mod report;
pub mod settings;

pub use client::{connect, ClientConfig, HttpClient, LocalClient, VectorClient};
pub use collection::Collection;
pub use doctor::{Doctor, DoctorConfig};
pub use error::{DoctorError, Result};
pub use probe::{Connector, LibraryConnector, ProbeKind, ProbeOutcome};
pub use report::{Outcomes, Recommendation};
pub use settings::{ApiImpl, Settings};
