/// CSR (compressed sparse row) encoding of a dense 2D grid.
///
/// Layout matches the classic data/indices/indptr triple: `data` holds the
/// nonzero values row by row, `indices` the column of each value, and
/// `indptr[r]..indptr[r+1]` spans row r. Round-trips exactly with the dense
/// input for every index, zero or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<i32>,
    pub indices: Vec<usize>,
    pub indptr: Vec<usize>,
}

impl CsrMatrix {
    /// Encode a row-major dense grid. `dense.len()` must equal `rows * cols`.
    pub fn from_dense(dense: &[i32], rows: usize, cols: usize) -> Self {
        assert_eq!(dense.len(), rows * cols, "dense shape mismatch");
        let mut data = Vec::new();
        let mut indices = Vec::new();
        let mut indptr = Vec::with_capacity(rows + 1);
        indptr.push(0);
        for r in 0..rows {
            for c in 0..cols {
                let v = dense[r * cols + c];
                if v != 0 {
                    data.push(v);
                    indices.push(c);
                }
            }
            indptr.push(data.len());
        }
        CsrMatrix { rows, cols, data, indices, indptr }
    }

    pub fn to_dense(&self) -> Vec<i32> {
        let mut dense = vec![0i32; self.rows * self.cols];
        for r in 0..self.rows {
            for i in self.indptr[r]..self.indptr[r + 1] {
                dense[r * self.cols + self.indices[i]] = self.data[i];
            }
        }
        dense
    }

    pub fn nnz(&self) -> usize { self.data.len() }
}
