use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::{table_entry, Manifest, MANIFEST_ENTRY};
use crate::error::OmxError;
use crate::matrix::Matrix;

/// write-once builder for a matrix-exchange archive. the manifest is
/// written at creation; tables are appended one at a time and must match
/// the declared zone system.
pub struct MatrixArchiveWriter {
    path: String,
    writer: ZipWriter<File>,
    zones: usize,
}

impl MatrixArchiveWriter {
    pub fn create<P: AsRef<Path>>(
        path: P,
        zone_numbers: &[u32],
    ) -> Result<MatrixArchiveWriter, OmxError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file =
            File::create(path.as_ref()).map_err(|e| OmxError::Io(path_str.clone(), e))?;
        let mut writer = ZipWriter::new(file);
        writer
            .start_file(MANIFEST_ENTRY, SimpleFileOptions::default())
            .map_err(|e| OmxError::ArchiveWrite(path_str.clone(), e))?;
        let manifest = Manifest {
            zone_numbers: zone_numbers.to_vec(),
        };
        let encoded = serde_json::to_vec(&manifest)
            .map_err(|e| OmxError::InvalidManifest(path_str.clone(), e.to_string()))?;
        writer
            .write_all(&encoded)
            .map_err(|e| OmxError::Io(path_str.clone(), e))?;
        Ok(MatrixArchiveWriter {
            path: path_str,
            writer,
            zones: zone_numbers.len(),
        })
    }

    pub fn write(&mut self, name: &str, matrix: &Matrix) -> Result<(), OmxError> {
        if matrix.zones() != self.zones {
            return Err(OmxError::ShapeMismatch(format!(
                "cannot write {}-zone table '{}' into {}-zone archive {}",
                matrix.zones(),
                name,
                self.zones,
                self.path
            )));
        }
        self.writer
            .start_file(table_entry(name), SimpleFileOptions::default())
            .map_err(|e| OmxError::ArchiveWrite(self.path.clone(), e))?;
        let mut table = csv::Writer::from_writer(&mut self.writer);
        for origin in 0..self.zones {
            let row = (0..self.zones).map(|d| matrix.get(origin, d).to_string());
            table
                .write_record(row)
                .map_err(|e| OmxError::TableDecode(name.to_string(), self.path.clone(), e.to_string()))?;
        }
        table
            .flush()
            .map_err(|e| OmxError::Io(self.path.clone(), e))?;
        Ok(())
    }

    pub fn finish(self) -> Result<(), OmxError> {
        let path = self.path;
        self.writer
            .finish()
            .map_err(|e| OmxError::ArchiveWrite(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, MatrixArchive, MatrixArchiveWriter, OmxError};
    use std::path::PathBuf;

    fn temp_archive_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tripmat-omx-{}-{}.omx", name, std::process::id()))
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_archive_path("roundtrip");
        let zone_numbers = [1, 2, 3];
        let mut demand = Matrix::zeros(3);
        demand.set(0, 1, 10.0);
        demand.set(2, 0, 3.5);

        let mut writer = MatrixArchiveWriter::create(&path, &zone_numbers).unwrap();
        writer.write("SOV_GP_AM", &demand).unwrap();
        writer.finish().unwrap();

        let mut archive = MatrixArchive::open(&path).unwrap();
        assert_eq!(archive.zone_numbers(), &zone_numbers);
        assert_eq!(archive.table_names(), vec![String::from("SOV_GP_AM")]);
        assert!(archive.contains("SOV_GP_AM"));
        assert!(!archive.contains("SR2_HOV_AM"));
        let read_back = archive.read("SOV_GP_AM").unwrap();
        assert_eq!(read_back, demand);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_missing_table() {
        let path = temp_archive_path("missing-table");
        let writer = MatrixArchiveWriter::create(&path, &[1, 2]).unwrap();
        writer.finish().unwrap();

        let mut archive = MatrixArchive::open(&path).unwrap();
        match archive.read("SOV_GP_AM") {
            Err(OmxError::TableNotFound(name, _)) => assert_eq!(name, "SOV_GP_AM"),
            other => panic!("expected TableNotFound, got {other:?}"),
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_shape_checked_on_write() {
        let path = temp_archive_path("bad-shape");
        let mut writer = MatrixArchiveWriter::create(&path, &[1, 2, 3]).unwrap();
        let wrong = Matrix::zeros(4);
        assert!(writer.write("SOV_GP_AM", &wrong).is_err());
        writer.finish().unwrap();
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_open_missing_file() {
        let path = temp_archive_path("does-not-exist");
        assert!(MatrixArchive::open(&path).is_err());
    }
}
