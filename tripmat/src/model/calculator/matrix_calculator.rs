use rayon::prelude::*;
use tripmat_omx::Matrix;

use crate::model::store::MatrixStore;
use crate::model::{DemandError, NumProcessors, ZoneRange};

/// restricts a calculation to the O-D cells whose origin and destination
/// zones both fall inside the named ranges. cells outside the submatrix
/// are left untouched.
#[derive(Debug, Clone)]
pub struct ZoneConstraint {
    pub origins: ZoneRange,
    pub destinations: ZoneRange,
}

/// typed stand-in for the host platform's matrix-expression evaluator,
/// limited to the additive calculations this tool performs. every call is
/// synchronous and blocking; the processor-count setting is a hint for how
/// a single evaluation spreads over matrix rows.
pub struct MatrixCalculator<'a, S: MatrixStore> {
    store: &'a mut S,
    num_processors: NumProcessors,
}

impl<'a, S: MatrixStore> MatrixCalculator<'a, S> {
    pub fn new(store: &'a mut S, num_processors: NumProcessors) -> MatrixCalculator<'a, S> {
        MatrixCalculator {
            store,
            num_processors,
        }
    }

    pub fn set_num_processors(&mut self, num_processors: NumProcessors) {
        self.num_processors = num_processors;
    }

    /// `dest += term_1 + term_2 + ...`, optionally restricted to an
    /// origins x destinations zone subset. all named matrices must already
    /// exist in the store and share its zone system.
    pub fn add_in_place(
        &mut self,
        dest: &str,
        terms: &[&str],
        constraint: Option<&ZoneConstraint>,
    ) -> Result<(), DemandError> {
        let mut result = self.store.get(dest)?;
        let zones = result.zones();
        let term_matrices = terms
            .iter()
            .map(|term| {
                let matrix = self.store.get(term)?;
                if matrix.zones() != zones {
                    return Err(DemandError::ShapeMismatch(format!(
                        "term '{}' has {} zones, destination '{}' has {}",
                        term,
                        matrix.zones(),
                        dest,
                        zones
                    )));
                }
                Ok(matrix)
            })
            .collect::<Result<Vec<Matrix>, DemandError>>()?;

        match constraint {
            Some(constraint) => {
                let origins = constraint.origins.indices(self.store.zone_numbers());
                let destinations = constraint.destinations.indices(self.store.zone_numbers());
                for origin in origins.iter() {
                    for destination in destinations.iter() {
                        let added: f64 = term_matrices
                            .iter()
                            .map(|t| t.get(*origin, *destination))
                            .sum();
                        let value = result.get(*origin, *destination) + added;
                        result.set(*origin, *destination, value);
                    }
                }
            }
            None => {
                let threads = self.num_processors.resolve();
                if threads > 1 && zones > 0 {
                    add_rows_parallel(&mut result, &term_matrices, zones, threads)?;
                } else {
                    for term in term_matrices.iter() {
                        result.add_assign(term)?;
                    }
                }
            }
        }

        self.store.set(dest, result)
    }
}

/// full-range addition spread over matrix rows on a dedicated pool sized
/// by the processor hint.
fn add_rows_parallel(
    result: &mut Matrix,
    terms: &[Matrix],
    zones: usize,
    threads: usize,
) -> Result<(), DemandError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| DemandError::InternalError(format!("failure building thread pool: {e}")))?;
    pool.install(|| {
        result
            .values_mut()
            .par_chunks_mut(zones)
            .enumerate()
            .for_each(|(origin, row)| {
                for term in terms.iter() {
                    let term_row = &term.values()[origin * zones..(origin + 1) * zones];
                    for (cell, value) in row.iter_mut().zip(term_row.iter()) {
                        *cell += value;
                    }
                }
            });
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MatrixCalculator, ZoneConstraint};
    use crate::model::store::{InMemoryStore, MatrixStore};
    use crate::model::{DemandError, NumProcessors, ZoneRange};
    use tripmat_omx::Matrix;

    fn store_with(names: &[(&str, Matrix)], zones: usize) -> InMemoryStore {
        let zone_numbers = (1..=zones as u32).collect();
        let mut store = InMemoryStore::new(zone_numbers);
        for (name, matrix) in names {
            store.set(name, matrix.clone()).unwrap();
        }
        store
    }

    fn filled(zones: usize, value: f64) -> Matrix {
        let mut m = Matrix::zeros(zones);
        for o in 0..zones {
            for d in 0..zones {
                m.set(o, d, value);
            }
        }
        m
    }

    #[test]
    fn test_add_two_terms() {
        let mut store = store_with(
            &[
                ("dest", filled(3, 1.0)),
                ("a", filled(3, 2.0)),
                ("b", filled(3, 3.0)),
            ],
            3,
        );
        let mut calc = MatrixCalculator::new(&mut store, NumProcessors::Fixed(0));
        calc.add_in_place("dest", &["a", "b"], None).unwrap();
        assert_eq!(store.get("dest").unwrap().get(1, 2), 6.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut seq_store = store_with(&[("dest", filled(16, 1.5)), ("a", filled(16, 0.25))], 16);
        let mut par_store = store_with(&[("dest", filled(16, 1.5)), ("a", filled(16, 0.25))], 16);

        let mut seq = MatrixCalculator::new(&mut seq_store, NumProcessors::Fixed(0));
        seq.add_in_place("dest", &["a"], None).unwrap();
        let mut par = MatrixCalculator::new(&mut par_store, NumProcessors::Fixed(4));
        par.add_in_place("dest", &["a"], None).unwrap();

        assert_eq!(
            seq_store.get("dest").unwrap(),
            par_store.get("dest").unwrap()
        );
    }

    #[test]
    fn test_constrained_add_leaves_outside_cells_untouched() {
        let mut store = store_with(&[("dest", filled(4, 1.0)), ("ee", filled(4, 5.0))], 4);
        let external: ZoneRange = "1-2".parse().unwrap();
        let constraint = ZoneConstraint {
            origins: external.clone(),
            destinations: external,
        };
        let mut calc = MatrixCalculator::new(&mut store, NumProcessors::Fixed(0));
        calc.add_in_place("dest", &["ee"], Some(&constraint)).unwrap();

        let dest = store.get("dest").unwrap();
        // inside the external x external submatrix
        assert_eq!(dest.get(0, 0), 6.0);
        assert_eq!(dest.get(1, 0), 6.0);
        // outside: exact equality required
        assert_eq!(dest.get(0, 2), 1.0);
        assert_eq!(dest.get(2, 0), 1.0);
        assert_eq!(dest.get(3, 3), 1.0);
    }

    #[test]
    fn test_unknown_term_aborts() {
        let mut store = store_with(&[("dest", filled(2, 1.0))], 2);
        let mut calc = MatrixCalculator::new(&mut store, NumProcessors::Fixed(0));
        match calc.add_in_place("dest", &["nope"], None) {
            Err(DemandError::MatrixNotFound(name)) => assert_eq!(name, "nope"),
            other => panic!("expected MatrixNotFound, got {other:?}"),
        }
        // destination untouched by the failed evaluation
        assert_eq!(store.get("dest").unwrap().get(0, 0), 1.0);
    }
}
