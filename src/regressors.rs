//! Fourier regressor matrices
//!
//! Builds design matrices of the form
//! `[1, t, cos(2πt/12), sin(2πt/12), ..., cos(2πmt/12), sin(2πmt/12)]`
//! for seasonal trend regression.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use nalgebra::DMatrix;

use crate::SignalError;

/// Base seasonal period of the harmonic columns, in index units
pub const SEASONAL_PERIOD: f64 = 12.0;

/// Build the regressor matrix for `index` with `m` harmonics.
///
/// `n` is the declared number of observations and must equal `index.len()`.
/// The result has `n` rows and `2 + 2m` columns ordered as intercept, trend,
/// then a cosine/sine pair per harmonic `k = 1..=m`.
pub fn build_regressor_matrix(
    index: &[f64],
    m: usize,
    n: usize,
) -> Result<DMatrix<f64>, SignalError> {
    if index.len() != n {
        return Err(SignalError::ShapeMismatch {
            expected: n,
            got: index.len(),
        });
    }

    let matrix = DMatrix::from_fn(n, 2 + 2 * m, |row, col| {
        let t = index[row];
        match col {
            0 => 1.0,
            1 => t,
            _ => {
                let harmonic = ((col - 2) / 2 + 1) as f64;
                let angle = 2.0 * PI * harmonic * t / SEASONAL_PERIOD;
                if col % 2 == 0 {
                    angle.cos()
                } else {
                    angle.sin()
                }
            }
        }
    });

    Ok(matrix)
}

/// Build the regressor matrix from a named column of tabular rows.
///
/// Every row must carry `column`; the row count is the declared `n`.
pub fn build_regressor_matrix_from_column(
    rows: &[BTreeMap<String, f64>],
    column: &str,
    m: usize,
) -> Result<DMatrix<f64>, SignalError> {
    let index = rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            row.get(column).copied().ok_or_else(|| {
                SignalError::InvalidArgument(format!(
                    "row {row_idx} has no column named '{column}'"
                ))
            })
        })
        .collect::<Result<Vec<f64>, SignalError>>()?;

    build_regressor_matrix(&index, m, rows.len())
}

/// Column labels matching the layout of [`build_regressor_matrix`]
pub fn regressor_column_names(m: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(2 + 2 * m);
    names.push("intercept".to_string());
    names.push("trend".to_string());
    for k in 1..=m {
        names.push(format!("cos{k}"));
        names.push(format!("sin{k}"));
    }
    names
}
