use std::collections::HashMap;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tripmat_omx::{Matrix, MatrixArchive, MatrixArchiveWriter};

use super::MatrixStore;
use crate::model::DemandError;

/// matrix store backed by a scenario matrix-exchange archive. all tables
/// are loaded eagerly on open, mutated in memory, and written back as a
/// whole on [`ArchiveStore::save`]. the archive file handle is released as
/// soon as loading completes.
pub struct ArchiveStore {
    path: PathBuf,
    zone_numbers: Vec<u32>,
    matrices: HashMap<String, Matrix>,
}

impl ArchiveStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ArchiveStore, DemandError> {
        let mut archive = MatrixArchive::open(path.as_ref())?;
        let zone_numbers = archive.zone_numbers().to_vec();
        let mut matrices = HashMap::new();
        for name in archive.table_names() {
            let matrix = archive.read(&name)?;
            matrices.insert(name, matrix);
        }
        log::debug!(
            "loaded {} matrices over {} zones from {:?}",
            matrices.len(),
            zone_numbers.len(),
            path.as_ref()
        );
        Ok(ArchiveStore {
            path: path.as_ref().to_path_buf(),
            zone_numbers,
            matrices,
        })
    }

    /// rewrites the backing archive with the store's current contents.
    pub fn save(&self) -> Result<(), DemandError> {
        let mut writer = MatrixArchiveWriter::create(&self.path, &self.zone_numbers)?;
        for name in self.matrices.keys().sorted() {
            writer.write(name, &self.matrices[name])?;
        }
        writer.finish()?;
        log::info!(
            "wrote {} matrices to {:?}",
            self.matrices.len(),
            self.path
        );
        Ok(())
    }
}

impl MatrixStore for ArchiveStore {
    fn zone_numbers(&self) -> &[u32] {
        &self.zone_numbers
    }

    fn contains(&self, name: &str) -> bool {
        self.matrices.contains_key(name)
    }

    fn get(&self, name: &str) -> Result<Matrix, DemandError> {
        self.matrices
            .get(name)
            .cloned()
            .ok_or_else(|| DemandError::MatrixNotFound(name.to_string()))
    }

    fn set(&mut self, name: &str, matrix: Matrix) -> Result<(), DemandError> {
        if matrix.zones() != self.zone_numbers.len() {
            return Err(DemandError::ShapeMismatch(format!(
                "cannot store {}-zone matrix '{}' in a {}-zone scenario",
                matrix.zones(),
                name,
                self.zone_numbers.len()
            )));
        }
        self.matrices.insert(name.to_string(), matrix);
        Ok(())
    }
}
