use crate::error::OmxError;

/// a dense, row-major Z x Z demand table, where Z is the zone count of the
/// scenario it belongs to. values are trips between an origin zone (row)
/// and a destination zone (column).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    zones: usize,
    data: Vec<f64>,
}

/// summary statistics over every O-D cell of a [`Matrix`], reported to the
/// logbook after each import step for audit purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStats {
    pub cells: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum: f64,
}

impl Matrix {
    /// the additive identity for a zone system of the given size.
    pub fn zeros(zones: usize) -> Matrix {
        Matrix {
            zones,
            data: vec![0.0; zones * zones],
        }
    }

    /// builds a matrix from row-major cell values, which must have
    /// exactly `zones * zones` entries.
    pub fn from_vec(zones: usize, data: Vec<f64>) -> Result<Matrix, OmxError> {
        if data.len() != zones * zones {
            return Err(OmxError::ShapeMismatch(format!(
                "expected {} cells for a {}-zone matrix, found {}",
                zones * zones,
                zones,
                data.len()
            )));
        }
        Ok(Matrix { zones, data })
    }

    pub fn zones(&self) -> usize {
        self.zones
    }

    pub fn get(&self, origin: usize, destination: usize) -> f64 {
        self.data[origin * self.zones + destination]
    }

    pub fn set(&mut self, origin: usize, destination: usize, value: f64) {
        self.data[origin * self.zones + destination] = value;
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// elementwise `self += other`. both operands must share zone count
    /// (and, by convention, zone ordering).
    pub fn add_assign(&mut self, other: &Matrix) -> Result<(), OmxError> {
        if self.zones != other.zones {
            return Err(OmxError::ShapeMismatch(format!(
                "cannot add a {}-zone matrix to a {}-zone matrix",
                other.zones, self.zones
            )));
        }
        for (cell, value) in self.data.iter_mut().zip(other.data.iter()) {
            *cell += value;
        }
        Ok(())
    }

    pub fn stats(&self) -> MatrixStats {
        let cells = self.data.len();
        if cells == 0 {
            return MatrixStats {
                cells: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                sum: 0.0,
            };
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for value in self.data.iter() {
            min = min.min(*value);
            max = max.max(*value);
            sum += value;
        }
        MatrixStats {
            cells,
            min,
            max,
            mean: sum / cells as f64,
            sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;

    #[test]
    fn test_add_assign() {
        let mut a = Matrix::zeros(3);
        a.set(0, 1, 10.0);
        let mut b = Matrix::zeros(3);
        b.set(0, 1, 2.0);
        b.set(2, 0, 3.0);
        a.add_assign(&b).unwrap();
        assert_eq!(a.get(0, 1), 12.0);
        assert_eq!(a.get(2, 0), 3.0);
        assert_eq!(a.get(1, 1), 0.0);
    }

    #[test]
    fn test_add_assign_shape_mismatch() {
        let mut a = Matrix::zeros(3);
        let b = Matrix::zeros(4);
        assert!(a.add_assign(&b).is_err());
    }

    #[test]
    fn test_stats() {
        let mut m = Matrix::zeros(3);
        m.set(0, 1, 12.0);
        m.set(1, 2, 1.0);
        m.set(2, 0, 3.0);
        let stats = m.stats();
        assert_eq!(stats.cells, 9);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 12.0);
        assert_eq!(stats.sum, 16.0);
        assert!((stats.mean - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_vec_rejects_bad_length() {
        assert!(Matrix::from_vec(2, vec![1.0, 2.0, 3.0]).is_err());
    }
}
