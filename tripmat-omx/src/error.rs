use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmxError {
    #[error("i/o failure on matrix file {0}: {1}")]
    Io(String, std::io::Error),
    #[error("failure reading matrix file {0}: {1}")]
    ArchiveRead(String, zip::result::ZipError),
    #[error("failure writing matrix file {0}: {1}")]
    ArchiveWrite(String, zip::result::ZipError),
    #[error("matrix file {0} has an invalid manifest: {1}")]
    InvalidManifest(String, String),
    #[error("matrix file {1} has no table named '{0}'")]
    TableNotFound(String, String),
    #[error("failure decoding table '{0}' in matrix file {1}: {2}")]
    TableDecode(String, String, String),
    #[error("matrix shape mismatch: {0}")]
    ShapeMismatch(String),
}
