//! Embedded segment catalog: the collections of a local persistence directory.
//!
//! The whole catalog lives in one `catalog.json` file. Every change rewrites it
//! through a temporary file and a rename, so a crash leaves either the old or
//! the new catalog on disk, never a torn one.

use crate::collection::{self, Collection};
use crate::error::{DoctorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Name of the catalog file inside the persistence directory.
pub const CATALOG_FILE: &str = "catalog.json";

const FORMAT_VERSION: u32 = 1;

/// One collection and the ids of the records it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub record_ids: Vec<String>,
}

/// On-disk layout of `catalog.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub format_version: u32,
    pub collections: Vec<CatalogEntry>,
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            collections: Vec::new(),
        }
    }
}

/// Collection catalog bound to a persistence directory.
pub struct Catalog {
    path: PathBuf,
    file: CatalogFile,
}

impl Catalog {
    /// Open the catalog under `dir`, creating the directory if needed.
    /// A missing catalog file means an empty store.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(CATALOG_FILE);

        let file = if path.exists() {
            let bytes = fs::read(&path)?;
            let file: CatalogFile = serde_json::from_slice(&bytes).map_err(|e| {
                DoctorError::SerializationError(format!("{}: {}", path.display(), e))
            })?;
            if file.format_version != FORMAT_VERSION {
                return Err(DoctorError::StorageError(format!(
                    "unsupported catalog format {} in {}",
                    file.format_version,
                    path.display()
                )));
            }
            file
        } else {
            CatalogFile::default()
        };

        tracing::debug!(
            path = %path.display(),
            collections = file.collections.len(),
            "opened catalog"
        );
        Ok(Self { path, file })
    }

    fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.file.collections.iter().find(|c| c.name == name)
    }

    /// Return the collection called `name`, adding it to the catalog first if it
    /// is not there yet.
    pub fn get_or_create_collection(&mut self, name: &str) -> Result<Collection> {
        if !collection::is_valid_name(name) {
            return Err(DoctorError::InvalidCollectionName {
                name: name.to_string(),
            });
        }
        if let Some(entry) = self.find(name) {
            return Ok(entry.handle());
        }

        let entry = CatalogEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            record_ids: Vec::new(),
        };
        let handle = entry.handle();
        self.file.collections.push(entry);
        if let Err(e) = self.persist() {
            self.file.collections.pop();
            return Err(e);
        }

        tracing::info!(collection = name, "created collection");
        Ok(handle)
    }

    /// Number of records in the collection with this id.
    pub fn count(&self, collection_id: &str) -> Result<usize> {
        self.file
            .collections
            .iter()
            .find(|c| c.id == collection_id)
            .map(|c| c.record_ids.len())
            .ok_or_else(|| DoctorError::CollectionNotFound {
                name: collection_id.to_string(),
            })
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.file)
            .map_err(|e| DoctorError::SerializationError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut out = fs::File::create(&tmp)?;
            out.write_all(&bytes)?;
            out.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CatalogEntry {
    fn handle(&self) -> Collection {
        Collection {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}
