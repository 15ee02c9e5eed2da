use std::collections::HashMap;

use tripmat_omx::Matrix;

use super::MatrixStore;
use crate::model::DemandError;

/// matrix store held entirely in memory. used by tests and by callers that
/// manage persistence themselves.
pub struct InMemoryStore {
    zone_numbers: Vec<u32>,
    matrices: HashMap<String, Matrix>,
}

impl InMemoryStore {
    pub fn new(zone_numbers: Vec<u32>) -> InMemoryStore {
        InMemoryStore {
            zone_numbers,
            matrices: HashMap::new(),
        }
    }
}

impl MatrixStore for InMemoryStore {
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

#[cfg(test)]
mod tests {
    use super::{InMemoryStore, MatrixStore};
    use crate::model::DemandError;
    use tripmat_omx::Matrix;

    #[test]
    fn test_set_replaces() {
        let mut store = InMemoryStore::new(vec![1, 2]);
        let mut a = Matrix::zeros(2);
        a.set(0, 1, 5.0);
        store.set("AM_SOVGP", a).unwrap();
        let mut b = Matrix::zeros(2);
        b.set(0, 1, 7.0);
        store.set("AM_SOVGP", b).unwrap();
        assert_eq!(store.get("AM_SOVGP").unwrap().get(0, 1), 7.0);
    }

    #[test]
    fn test_get_missing() {
        let store = InMemoryStore::new(vec![1, 2]);
        match store.get("AM_SOVGP") {
            Err(DemandError::MatrixNotFound(name)) => assert_eq!(name, "AM_SOVGP"),
            other => panic!("expected MatrixNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_set_rejects_wrong_shape() {
        let mut store = InMemoryStore::new(vec![1, 2]);
        assert!(store.set("AM_SOVGP", Matrix::zeros(3)).is_err());
    }
}
