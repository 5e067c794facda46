//! In-process client over the segment catalog

use crate::catalog::Catalog;
use crate::client::VectorClient;
use crate::collection::Collection;
use crate::error::{DoctorError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Client that reads and writes a local persistence directory directly.
pub struct LocalClient {
    catalog: Mutex<Catalog>,
}

impl LocalClient {
    /// Open (or create) the catalog under `persist_directory`.
    pub fn open(persist_directory: impl AsRef<Path>) -> Result<Self> {
        let catalog = Catalog::open(persist_directory)?;
        Ok(Self {
            catalog: Mutex::new(catalog),
        })
    }

    fn catalog(&self) -> Result<MutexGuard<'_, Catalog>> {
        self.catalog
            .lock()
            .map_err(|_| DoctorError::StorageError("Lock poisoned".to_string()))
    }
}

#[async_trait]
impl VectorClient for LocalClient {
    async fn get_or_create_collection(&self, name: &str) -> Result<Collection> {
        self.catalog()?.get_or_create_collection(name)
    }

    async fn count(&self, collection: &Collection) -> Result<usize> {
        self.catalog()?.count(&collection.id)
    }
}
