use ieom_core::IeomError;
use ieom_ode::{SparseMatrix, Triplet};
use num_complex::Complex64;
use proptest::prelude::*;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn triplet(row: usize, col: usize, value: Complex64) -> Triplet {
    Triplet { row, col, value }
}

#[test]
fn duplicate_positions_are_summed() {
    let matrix = SparseMatrix::from_triplets(
        2,
        3,
        vec![
            triplet(1, 2, c(1.0, 0.0)),
            triplet(0, 1, c(0.5, 0.0)),
            triplet(1, 2, c(0.0, 2.0)),
            triplet(1, 0, c(-1.0, 0.0)),
        ],
    )
    .unwrap();
    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.nnz(), 3);
    assert_eq!(matrix.get(1, 2), c(1.0, 2.0));
    assert_eq!(matrix.get(0, 1), c(0.5, 0.0));
    assert_eq!(matrix.get(0, 0), c(0.0, 0.0));
    assert_eq!(matrix.get(7, 0), c(0.0, 0.0));

    let stored: Vec<(usize, usize)> = matrix.triplets().map(|t| (t.row, t.col)).collect();
    assert_eq!(stored, vec![(0, 1), (1, 0), (1, 2)]);
}

#[test]
fn triplets_outside_the_shape_are_rejected() {
    let err = SparseMatrix::from_triplets(2, 2, vec![triplet(2, 0, c(1.0, 0.0))]).unwrap_err();
    assert!(matches!(err, IeomError::Ode(_)));
    assert_eq!(err.info().code, "index-out-of-bounds");
    assert!(SparseMatrix::from_triplets(2, 2, vec![triplet(0, 2, c(1.0, 0.0))]).is_err());
}

#[test]
fn matvec_and_scale() {
    let mut matrix = SparseMatrix::from_triplets(
        2,
        2,
        vec![triplet(0, 0, c(2.0, 0.0)), triplet(0, 1, c(1.0, 0.0)), triplet(1, 1, c(0.0, 1.0))],
    )
    .unwrap();
    let y = matrix.matvec(&[c(1.0, 0.0), c(3.0, 0.0)]).unwrap();
    assert_eq!(y, vec![c(5.0, 0.0), c(0.0, 3.0)]);

    matrix.scale(c(0.0, 1.0));
    assert_eq!(matrix.get(0, 0), c(0.0, 2.0));
    assert_eq!(matrix.get(1, 1), c(-1.0, 0.0));
}

#[test]
fn matvec_rejects_wrong_lengths() {
    let matrix = SparseMatrix::from_triplets(2, 3, Vec::new()).unwrap();
    let err = matrix.matvec(&[c(1.0, 0.0); 2]).unwrap_err();
    assert_eq!(err.info().code, "dimension-mismatch");
    let mut y = vec![c(0.0, 0.0); 3];
    assert!(matrix.matvec_into(&[c(1.0, 0.0); 3], &mut y).is_err());
}

#[test]
fn bincode_round_trip() {
    let matrix = SparseMatrix::from_triplets(
        3,
        3,
        vec![triplet(0, 2, c(1.5, -0.5)), triplet(2, 1, c(0.0, 4.0))],
    )
    .unwrap();
    let bytes = bincode::serialize(&matrix).unwrap();
    let restored: SparseMatrix = bincode::deserialize(&bytes).unwrap();
    assert_eq!(restored, matrix);
}

proptest! {
    #[test]
    fn matvec_matches_dense_product(
        entries in proptest::collection::vec((0usize..4, 0usize..4, -2.0f64..2.0), 0..24),
        x in proptest::collection::vec(-1.0f64..1.0, 4),
    ) {
        let mut dense = [[0.0f64; 4]; 4];
        let triplets: Vec<Triplet> = entries
            .iter()
            .map(|&(row, col, value)| {
                dense[row][col] += value;
                triplet(row, col, c(value, 0.0))
            })
            .collect();
        let matrix = SparseMatrix::from_triplets(4, 4, triplets).unwrap();
        let x: Vec<Complex64> = x.iter().map(|&v| c(v, 0.0)).collect();
        let y = matrix.matvec(&x).unwrap();
        for row in 0..4 {
            let expected: f64 = (0..4).map(|col| dense[row][col] * x[col].re).sum();
            prop_assert!((y[row].re - expected).abs() < 1e-9);
            prop_assert!(y[row].im.abs() < 1e-12);
        }
    }
}
