//! Integration tests for matrix inversion and left division.
//!
//! Elimination accumulates rounding error, so results are compared with
//! `is_similar` (1e-10 for inverses, 1e-4 for left division).

use pok_linalg::config::SolverConfig;
use pok_linalg::{LinalgError, Matrix};

fn m<R: AsRef<[f64]>>(rows: &[R]) -> Matrix {
    Matrix::from_rows(rows).expect("literal matrix must be rectangular")
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Invert
// ---------------------------------------------------------------------------

#[test]
fn simple_matrix_inverse() {
    init_logging();
    let inv = m(&[[4.0, 7.0], [2.0, 6.0]]).invert().unwrap();
    assert!(inv.is_similar(&m(&[[0.6, -0.7], [-0.2, 0.4]]), 1e-10), "{}", inv);
}

#[test]
fn three_by_three_inverse() {
    let inv = m(&[[3.0, 0.0, 2.0], [2.0, 0.0, -2.0], [0.0, 1.0, 1.0]])
        .invert()
        .unwrap();
    let expected = m(&[[0.2, 0.2, 0.0], [-0.2, 0.3, 1.0], [0.2, -0.3, 0.0]]);
    assert!(inv.is_similar(&expected, 1e-10), "{}", inv);
}

#[test]
fn inverting_non_square_matrix_errors() {
    assert_eq!(
        m(&[[4.0, 7.0]]).invert(),
        Err(LinalgError::NotSquare { rows: 1, cols: 2 })
    );
}

#[test]
fn inverting_singular_matrix_errors() {
    assert!(matches!(
        m(&[[2.0, 4.0], [6.0, 12.0]]).invert(),
        Err(LinalgError::Singular { .. })
    ));
    assert!(matches!(
        Matrix::zeros(3, 3).invert(),
        Err(LinalgError::Singular { col: 0 })
    ));
}

#[test]
fn inverse_needing_row_exchange() {
    // Zero in the leading position; invertible only with a row swap.
    let a = m(&[[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]);
    let inv = a.invert().unwrap();
    let prod = a.multiply_by(&inv).unwrap();
    assert!(prod.is_similar(&Matrix::identity(3), 1e-10), "{}", prod);

    let swap = m(&[[0.0, 1.0], [1.0, 0.0]]);
    assert!(swap.invert().unwrap().is_similar(&swap, 1e-12));
}

#[test]
fn product_with_inverse_is_identity() {
    let a = m(&[
        [2.0, 1.0, 1.0, 0.5],
        [1.0, 3.0, 2.0, -1.0],
        [1.0, 0.0, 0.0, 4.0],
        [0.25, -2.0, 1.5, 1.0],
    ]);
    let inv = a.invert().unwrap();
    assert!(a
        .multiply_by(&inv)
        .unwrap()
        .is_similar(&Matrix::identity(4), 1e-10));
    assert!(inv
        .multiply_by(&a)
        .unwrap()
        .is_similar(&Matrix::identity(4), 1e-10));
}

#[test]
fn empty_matrix_inverts_to_empty() {
    let inv = Matrix::zeros(0, 0).invert().unwrap();
    assert_eq!(inv.shape(), (0, 0));
}

#[test]
fn invert_does_not_mutate_input() {
    let a = m(&[[0.0, 1.0], [1.0, 0.0]]);
    let before = a.clone();
    let _ = a.invert().unwrap();
    assert!(a.is_equal(&before));
}

// ---------------------------------------------------------------------------
// LeftDivide
// ---------------------------------------------------------------------------

#[test]
fn basic_left_divide() {
    init_logging();
    let x = m(&[[2.0], [4.0]]).left_divide(&m(&[[4.0], [4.0]])).unwrap();
    assert!(x.is_similar(&m(&[[1.2]]), 1e-4), "{}", x);
}

#[test]
fn square_left_divide() {
    let a = m(&[[1.0, 2.0], [2.0, 2.0]]);
    let b = m(&[[3.0, 2.0], [1.0, 1.0]]);
    let x = a.left_divide(&b).unwrap();
    assert!(x.is_similar(&m(&[[-2.0, -1.0], [2.5, 1.5]]), 1e-4), "{}", x);
    assert!(a.multiply_by(&x).unwrap().is_similar(&b, 1e-10));
}

#[test]
fn left_divide_with_wrong_dimensions_errors() {
    let a = m(&[[1.0, 2.0], [2.0, 2.0]]);
    let b = m(&[[3.0, 2.0]]);
    assert_eq!(
        a.left_divide(&b),
        Err(LinalgError::IncompatibleDimensions {
            left: (2, 2),
            right: (1, 2)
        })
    );
}

#[test]
fn left_divide_singular_square_system_errors() {
    let a = m(&[[2.0, 4.0], [6.0, 12.0]]);
    let b = m(&[[1.0], [1.0]]);
    assert!(matches!(
        a.left_divide(&b),
        Err(LinalgError::Singular { .. })
    ));
}

#[test]
fn left_divide_rank_deficient_least_squares_errors() {
    // Second column is twice the first, so AᵗA is singular.
    let a = m(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]);
    let b = m(&[[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]]);
    assert!(matches!(
        a.left_divide(&b),
        Err(LinalgError::Singular { .. })
    ));
}

#[test]
fn left_divide_underdetermined_system_errors() {
    let a = m(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = m(&[[1.0], [1.0]]);
    assert!(matches!(
        a.left_divide(&b),
        Err(LinalgError::Singular { .. })
    ));
}

#[test]
fn left_divide_with_ones_column() {
    let a = m(&[[1.0, 1.3], [1.0, 2.1], [1.0, 3.7], [1.0, 4.2]]);
    let b = m(&[[2.2], [5.8], [10.2], [11.8]]);
    let x = a.left_divide(&b).unwrap();
    let expected = m(&[[-1.5225601452564645], [3.1938266000907847]]);
    assert!(x.is_similar(&expected, 1e-4), "{}", x);
}

#[test]
fn least_squares_line_fit() {
    let xs = [0.3, 0.8, 1.2, 1.7, 2.4, 3.1, 3.8, 4.5, 5.1, 5.8, 6.5];
    let ys = [8.61, 7.94, 7.55, 6.85, 6.11, 5.17, 4.19, 3.41, 2.63, 1.77, 0.89];

    let design = Matrix::from_shape_vec((xs.len(), 1), xs.to_vec())
        .unwrap()
        .insert_col(0, &vec![1.0; xs.len()])
        .unwrap();
    let rhs = Matrix::from_shape_vec((ys.len(), 1), ys.to_vec()).unwrap();

    let coeffs = design.left_divide(&rhs).unwrap();
    let expected = m(&[[8.99987709451432], [-1.246552501126634]]);
    assert!(coeffs.is_similar(&expected, 1e-4), "{}", coeffs);
}

#[test]
fn left_divide_consistent_overdetermined_system_is_exact() {
    // b lies in the column space of A, so the residual is zero.
    let a = m(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    let known = m(&[[2.0], [-3.0]]);
    let b = a.multiply_by(&known).unwrap();
    assert!(a.left_divide(&b).unwrap().is_similar(&known, 1e-10));
}

#[test]
fn left_divide_small_scale_least_squares() {
    // AᵗA is about 5e-14 here; only the scale differs from an easy system.
    let a = m(&[[1e-7], [2e-7]]);
    let x = a.left_divide(&a).unwrap();
    assert!(x.is_similar(&m(&[[1.0]]), 1e-10), "{}", x);

    let a = m(&[[1e-7, 1.3e-7], [1e-7, 2.1e-7], [1e-7, 3.7e-7], [1e-7, 4.2e-7]]);
    let b = m(&[[2.2e-7], [5.8e-7], [10.2e-7], [11.8e-7]]);
    let x = a.left_divide(&b).unwrap();
    let expected = m(&[[-1.5225601452564645], [3.1938266000907847]]);
    assert!(x.is_similar(&expected, 1e-4), "{}", x);
}

#[test]
fn invert_matches_left_divide_by_identity() {
    let a = m(&[[4.0, 7.0], [2.0, 6.0]]);
    let via_identity = a.left_divide(&Matrix::identity(2)).unwrap();
    assert!(a.invert().unwrap().is_equal(&via_identity));
}

// ---------------------------------------------------------------------------
// Solver configuration
// ---------------------------------------------------------------------------

#[test]
fn loose_pivot_tolerance_flags_near_singular_matrix() {
    let a = m(&[[1.0, 1.0], [1.0, 1.0 + 1e-9]]);
    assert!(a.invert_with(&SolverConfig::default()).is_ok());
    assert!(matches!(
        a.invert_with(&SolverConfig::new(1e-6)),
        Err(LinalgError::Singular { col: 1 })
    ));
}

#[test]
fn tiny_but_well_conditioned_matrix_inverts() {
    let a = m(&[[2e-13, 0.0], [0.0, 4e-13]]);
    let inv = a.invert().unwrap();
    assert!((inv[(0, 0)] - 5e12).abs() < 1e-2);
    assert!((inv[(1, 1)] - 2.5e12).abs() < 1e-2);
}

#[test]
fn left_divide_with_explicit_config() {
    let a = m(&[[2.0], [4.0]]);
    let b = m(&[[4.0], [4.0]]);
    let x = a.left_divide_with(&b, &SolverConfig::new(1e-8)).unwrap();
    assert!(x.is_similar(&m(&[[1.2]]), 1e-4));
}
