use tripmat_omx::Matrix;

use crate::model::DemandError;

/// the scenario's keyed matrix store. the tool assumes exclusive,
/// single-writer access to the store for the duration of a run; no locking
/// happens at this seam.
pub trait MatrixStore {
    /// zone labels of the scenario, in matrix row/column order.
    fn zone_numbers(&self) -> &[u32];

    fn contains(&self, name: &str) -> bool;

    /// copy of the named matrix, or [`DemandError::MatrixNotFound`].
    fn get(&self, name: &str) -> Result<Matrix, DemandError>;

    /// replaces (never adds to) the named matrix. the value must match the
    /// store's zone system.
    fn set(&mut self, name: &str, matrix: Matrix) -> Result<(), DemandError>;
}
