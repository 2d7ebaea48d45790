//! JSON-file persistence for the animal collection.
//!
//! The file holds a pretty-printed array of animal objects. A missing file
//! loads as an empty collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::Animal;

/// Persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Animal collection stored in a single JSON file.
#[derive(Debug, Clone)]
pub struct AnimalStore {
    path: PathBuf,
}

impl AnimalStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all animals. A missing file yields an empty collection.
    pub fn load(&self) -> StoreResult<Vec<Animal>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no data file, starting with an empty collection");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let animals: Vec<Animal> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = animals.len(), "loaded animals");
        Ok(animals)
    }

    /// Write all animals, replacing the file. Returns a success message.
    pub fn save(&self, animals: &[Animal]) -> StoreResult<String> {
        let json = serde_json::to_string_pretty(animals).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), count = animals.len(), "saved animals");
        Ok(format!("Data saved to {}", self.path.display()))
    }
}
