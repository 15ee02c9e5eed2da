use thiserror::Error;
use tripmat_omx::OmxError;

#[derive(Error, Debug)]
pub enum DemandError {
    #[error("matrix file error: {0}")]
    OmxError(#[from] OmxError),
    #[error("matrix '{0}' not found in scenario store")]
    MatrixNotFound(String),
    #[error("matrix shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("invalid zone range expression '{0}': {1}")]
    InvalidZoneRange(String, String),
    #[error("invalid processor count expression '{0}': {1}")]
    InvalidNumProcessors(String, String),
    #[error("invalid import configuration: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    InternalError(String),
}
