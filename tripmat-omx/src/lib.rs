pub mod archive;
mod error;
mod matrix;

pub use archive::{MatrixArchive, MatrixArchiveWriter};
pub use error::OmxError;
pub use matrix::{Matrix, MatrixStats};
