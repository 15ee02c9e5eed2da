mod manifest;
mod reader;
mod writer;

pub use reader::MatrixArchive;
pub use writer::MatrixArchiveWriter;

pub(crate) use manifest::{table_entry, table_name, Manifest, MANIFEST_ENTRY};
