mod archive_store;
mod in_memory_store;
mod matrix_store;

pub use archive_store::ArchiveStore;
pub use in_memory_store::InMemoryStore;
pub use matrix_store::MatrixStore;
