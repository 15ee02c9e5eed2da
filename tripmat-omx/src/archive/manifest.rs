use serde::{Deserialize, Serialize};

pub const MANIFEST_ENTRY: &str = "manifest.json";
const TABLE_PREFIX: &str = "tables/";
const TABLE_SUFFIX: &str = ".csv";

/// header record of a matrix-exchange archive. all tables in an archive
/// share this zone system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub zone_numbers: Vec<u32>,
}

/// archive entry path for a named table.
pub fn table_entry(name: &str) -> String {
    format!("{TABLE_PREFIX}{name}{TABLE_SUFFIX}")
}

/// inverse of [`table_entry`]: the table name for an archive entry path,
/// or None for entries that are not tables (e.g. the manifest).
pub fn table_name(entry: &str) -> Option<&str> {
    entry
        .strip_prefix(TABLE_PREFIX)
        .and_then(|n| n.strip_suffix(TABLE_SUFFIX))
}
