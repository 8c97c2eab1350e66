//! Loading the dataset from a directory of JSON table files.
//!
//! The five files are independent, so they are read concurrently. Decoding
//! only starts once every read has finished.

use std::path::{Path, PathBuf};

use super::Dataset;
use crate::error::DatasetError;

/// File names of the five tables, in decode order.
pub const TABLE_FILES: [&str; 5] = [
    "elements.json",
    "materials.json",
    "domains.json",
    "weapons.json",
    "characters.json",
];

async fn read_table(path: PathBuf) -> Result<String, DatasetError> {
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| DatasetError::ReadFailed { path, source })
}

impl Dataset {
    /// Read and decode the five tables under `dir`.
    ///
    /// # Errors
    ///
    /// Fails if any table cannot be read or decoded. No partial dataset is
    /// ever returned.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        let [elements, materials, domains, weapons, characters] =
            TABLE_FILES.map(|name| dir.join(name));

        tracing::debug!(dir = %dir.display(), "loading dataset");
        let (elements, materials, domains, weapons, characters) = tokio::try_join!(
            read_table(elements),
            read_table(materials),
            read_table(domains),
            read_table(weapons),
            read_table(characters),
        )?;

        let dataset =
            Self::from_json_tables(&elements, &materials, &domains, &weapons, &characters)?;
        tracing::info!(
            dir = %dir.display(),
            characters = dataset.characters().len(),
            weapons = dataset.weapons().len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Like [`Dataset::load`], but a failure is logged and an empty dataset
    /// is returned so the caller can still render an (empty) view.
    pub async fn load_or_empty(dir: impl AsRef<Path>) -> Self {
        match Self::load(dir).await {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!(error = %e, "error loading data");
                Self::default()
            }
        }
    }
}
