//! Reel matrix orientation.

/// 2D grid of symbol identifiers, row-major.
pub type SymbolMatrix = Vec<Vec<i64>>;

/// Transpose a grid: `R x C` in, `C x R` out, `out[j][i] = m[i][j]`.
///
/// The column count is read from the first row. Ragged input is not
/// validated: a row shorter than the first panics. Callers hand in
/// rectangular grids.
pub fn transpose(matrix: &SymbolMatrix) -> SymbolMatrix {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);

    let mut transposed = vec![Vec::with_capacity(rows); cols];
    for row in 0..rows {
        for (col, out) in transposed.iter_mut().enumerate() {
            out.push(matrix[row][col]);
        }
    }

    transposed
}
