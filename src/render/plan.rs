//! Per-cell draw plan.
//!
//! Every matrix cell is resolved to either a decoded sprite or a placeholder
//! before any pixel is touched. A failed fetch or decode is logged and turned
//! into a placeholder tile; it never aborts the request. This is the only
//! partial-failure recovery path in the system.

use image::RgbaImage;

use crate::render::matrix::SymbolMatrix;
use crate::upstream::SymbolSource;

/// Resolved artwork for one cell.
pub enum CellArt {
    /// Sprite fetched and decoded successfully.
    Sprite(RgbaImage),
    /// Fetch or decode failed; draw the fallback tile.
    Placeholder,
}

/// Row-major grid of resolved cell artwork.
pub struct DrawPlan {
    cells: Vec<Vec<CellArt>>,
}

impl DrawPlan {
    pub fn new(cells: Vec<Vec<CellArt>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellArt {
        &self.cells[row][col]
    }
}

/// Resolve a matrix into a draw plan, fetching cells sequentially in
/// row-major order.
pub async fn build_plan<S: SymbolSource>(
    symbols: &S,
    game_name: &str,
    matrix: &SymbolMatrix,
) -> DrawPlan {
    let mut cells = Vec::with_capacity(matrix.len());

    for row in matrix {
        let mut planned = Vec::with_capacity(row.len());
        for &symbol_id in row {
            planned.push(resolve_cell(symbols, game_name, symbol_id).await);
        }
        cells.push(planned);
    }

    DrawPlan::new(cells)
}

async fn resolve_cell<S: SymbolSource>(symbols: &S, game_name: &str, symbol_id: i64) -> CellArt {
    let bytes = match symbols.fetch_symbol(game_name, symbol_id).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!(symbol_id, %error, "Error loading symbol, using placeholder");
            crate::observability::metrics::record_symbol_failure();
            return CellArt::Placeholder;
        }
    };

    match image::load_from_memory(&bytes) {
        Ok(sprite) => CellArt::Sprite(sprite.to_rgba8()),
        Err(error) => {
            tracing::error!(symbol_id, %error, "Error decoding symbol, using placeholder");
            crate::observability::metrics::record_symbol_failure();
            CellArt::Placeholder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::UpstreamError;
    use std::future::Future;
    use std::io::Cursor;

    /// Serves a tiny PNG for even ids, a 404 for odd ids, and garbage bytes
    /// for id 99.
    struct StubSource;

    impl SymbolSource for StubSource {
        fn fetch_symbol(
            &self,
            _game_name: &str,
            symbol_id: i64,
        ) -> impl Future<Output = Result<Vec<u8>, UpstreamError>> + Send {
            async move {
                if symbol_id == 99 {
                    return Ok(vec![0xDE, 0xAD, 0xBE, 0xEF]);
                }
                if symbol_id % 2 != 0 {
                    return Err(UpstreamError::SymbolStatus {
                        symbol_id,
                        status: reqwest::StatusCode::NOT_FOUND,
                    });
                }
                Ok(tiny_png())
            }
        }
    }

    fn tiny_png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn failed_cells_become_placeholders() {
        let matrix = vec![vec![2, 3], vec![99, 4]];
        let plan = build_plan(&StubSource, "demo", &matrix).await;

        assert_eq!(plan.rows(), 2);
        assert_eq!(plan.cols(), 2);
        assert!(matches!(plan.cell(0, 0), CellArt::Sprite(_)));
        assert!(matches!(plan.cell(0, 1), CellArt::Placeholder));
        assert!(matches!(plan.cell(1, 0), CellArt::Placeholder));
        assert!(matches!(plan.cell(1, 1), CellArt::Sprite(_)));
    }

    #[tokio::test]
    async fn empty_matrix_yields_empty_plan() {
        let plan = build_plan(&StubSource, "demo", &vec![]).await;
        assert_eq!(plan.rows(), 0);
        assert_eq!(plan.cols(), 0);
    }
}
