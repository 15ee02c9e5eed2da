use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use zip::result::ZipError;
use zip::ZipArchive;

use super::{table_entry, table_name, Manifest, MANIFEST_ENTRY};
use crate::error::OmxError;
use crate::matrix::Matrix;

/// read-only handle on a matrix-exchange archive: a zip container holding
/// a zone-system manifest and one CSV table per named matrix. the backing
/// file is owned by the handle and is released when the handle drops,
/// including on error paths.
pub struct MatrixArchive {
    path: String,
    archive: ZipArchive<File>,
    manifest: Manifest,
}

impl MatrixArchive {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MatrixArchive, OmxError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file =
            File::open(path.as_ref()).map_err(|e| OmxError::Io(path_str.clone(), e))?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| OmxError::ArchiveRead(path_str.clone(), e))?;
        let manifest: Manifest = {
            let entry = archive.by_name(MANIFEST_ENTRY).map_err(|e| match e {
                ZipError::FileNotFound => OmxError::InvalidManifest(
                    path_str.clone(),
                    format!("missing {MANIFEST_ENTRY} entry"),
                ),
                other => OmxError::ArchiveRead(path_str.clone(), other),
            })?;
            serde_json::from_reader(entry)
                .map_err(|e| OmxError::InvalidManifest(path_str.clone(), e.to_string()))?
        };
        log::debug!(
            "opened matrix file {} with {} zones",
            path_str,
            manifest.zone_numbers.len()
        );
        Ok(MatrixArchive {
            path: path_str,
            archive,
            manifest,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn zone_numbers(&self) -> &[u32] {
        &self.manifest.zone_numbers
    }

    pub fn zone_count(&self) -> usize {
        self.manifest.zone_numbers.len()
    }

    /// names of all tables in this archive, sorted for stable iteration.
    pub fn table_names(&self) -> Vec<String> {
        self.archive
            .file_names()
            .filter_map(table_name)
            .map(String::from)
            .sorted()
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(&table_entry(name)).is_some()
    }

    /// reads one named table into a dense matrix, validating that it is
    /// square over this archive's zone system.
    pub fn read(&mut self, name: &str) -> Result<Matrix, OmxError> {
        let zones = self.zone_count();
        let entry = self
            .archive
            .by_name(&table_entry(name))
            .map_err(|e| match e {
                ZipError::FileNotFound => {
                    OmxError::TableNotFound(name.to_string(), self.path.clone())
                }
                other => OmxError::ArchiveRead(self.path.clone(), other),
            })?;
        read_table(entry, name, &self.path, zones)
    }
}

fn read_table<R: Read>(
    reader: R,
    name: &str,
    path: &str,
    zones: usize,
) -> Result<Matrix, OmxError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);
    let mut data: Vec<f64> = Vec::with_capacity(zones * zones);
    let mut rows = 0;
    for record in csv_reader.records() {
        let record = record
            .map_err(|e| OmxError::TableDecode(name.to_string(), path.to_string(), e.to_string()))?;
        if record.len() != zones {
            return Err(OmxError::ShapeMismatch(format!(
                "table '{}' in {} row {} has {} columns, expected {}",
                name,
                path,
                rows,
                record.len(),
                zones
            )));
        }
        for field in record.iter() {
            let value = field.trim().parse::<f64>().map_err(|e| {
                OmxError::TableDecode(name.to_string(), path.to_string(), e.to_string())
            })?;
            data.push(value);
        }
        rows += 1;
    }
    if rows != zones {
        return Err(OmxError::ShapeMismatch(format!(
            "table '{name}' in {path} has {rows} rows, expected {zones}"
        )));
    }
    Matrix::from_vec(zones, data)
}
