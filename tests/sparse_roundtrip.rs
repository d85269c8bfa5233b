use pretty_assertions::assert_eq;
use sc2grid::sparse::CsrMatrix;

#[test]
fn roundtrip_small_grid() {
    let dense = vec![
        0, 5, 0, //
        3, 0, 0, //
        0, 0, 9,
    ];
    let m = CsrMatrix::from_dense(&dense, 3, 3);
    assert_eq!(m.data, vec![5, 3, 9]);
    assert_eq!(m.indices, vec![1, 0, 2]);
    assert_eq!(m.indptr, vec![0, 1, 2, 3]);
    assert_eq!(m.to_dense(), dense);
}

#[test]
fn all_zero_grid() {
    let dense = vec![0; 12];
    let m = CsrMatrix::from_dense(&dense, 3, 4);
    assert_eq!(m.nnz(), 0);
    assert_eq!(m.indptr, vec![0, 0, 0, 0]);
    assert_eq!(m.to_dense(), dense);
}

#[test]
fn dense_grid_keeps_everything() {
    let dense: Vec<i32> = (1..=6).collect();
    let m = CsrMatrix::from_dense(&dense, 2, 3);
    assert_eq!(m.nnz(), 6);
    assert_eq!(m.to_dense(), dense);
}

#[test]
fn negative_values_survive() {
    let dense = vec![-1, 0, 0, -7];
    let m = CsrMatrix::from_dense(&dense, 2, 2);
    assert_eq!(m.data, vec![-1, -7]);
    assert_eq!(m.to_dense(), dense);
}

#[test]
fn single_row_and_single_column() {
    let row = vec![0, 2, 0, 4];
    let m = CsrMatrix::from_dense(&row, 1, 4);
    assert_eq!(m.indptr, vec![0, 2]);
    assert_eq!(m.to_dense(), row);

    let col = vec![1, 0, 3];
    let m = CsrMatrix::from_dense(&col, 3, 1);
    assert_eq!(m.indices, vec![0, 0]);
    assert_eq!(m.to_dense(), col);
}

#[test]
fn csr_invariants_hold() {
    let dense: Vec<i32> =
        (0..84 * 84).map(|i| if i % 7 == 0 { (i % 13) as i32 } else { 0 }).collect();
    let m = CsrMatrix::from_dense(&dense, 84, 84);
    assert_eq!(m.indptr.len(), 85);
    assert!(m.indptr.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(m.data.len(), m.indices.len());
    assert_eq!(*m.indptr.last().unwrap(), m.nnz());
    // Column indices strictly increase within each row.
    for r in 0..m.rows {
        let cols = &m.indices[m.indptr[r]..m.indptr[r + 1]];
        assert!(cols.windows(2).all(|w| w[0] < w[1]));
    }
    assert_eq!(m.to_dense(), dense);
}

#[test]
#[should_panic(expected = "dense shape mismatch")]
fn shape_mismatch_panics() {
    CsrMatrix::from_dense(&[1, 2, 3], 2, 2);
}
