mod matrix_calculator;

pub use matrix_calculator::{MatrixCalculator, ZoneConstraint};
