extern crate ndarray;

use ndarray::*;

use std::ops::MulAssign;

///Computes the squared Euclidean norm of a vector.
pub fn sq_norm(vec : ArrayView1<f64>) -> f64 {
    vec.dot(&vec)
}

///Computes the squared Euclidean distance between two vectors
pub fn sq_vec_dist(one : ArrayView1<f64>, two : ArrayView1<f64>) -> f64 {
    let diff = &one - &two;
    diff.dot(&diff)
}

///Scales the rows of `a` by the respective scaling factors in `b`. Useful
///for efficiently computing left-multiplication by a diagonal matrix.
pub fn scale_rows(a : ArrayView2<f64>, b : ArrayView1<f64>) -> Array2<f64> {
    let mut result = a.to_owned();
    let n = a.shape()[0];
    for i in 0..n {
        let scale = b[[i,]];
        let mut row = result.row_mut(i);
        row.mul_assign(scale);
    }
    result
}

///Rescales every row of `a` to unit Euclidean norm. Rows of norm zero
///are left as they are.
pub fn normalize_rows(a : ArrayView2<f64>) -> Array2<f64> {
    let n = a.shape()[0];
    let mut inv_norms : Array1<f64> = Array::zeros((n,));
    for i in 0..n {
        let norm = sq_norm(a.row(i)).sqrt();
        inv_norms[[i,]] = if (norm > 0.0) { 1.0 / norm } else { 1.0 };
    }
    scale_rows(a, inv_norms.view())
}

///For each column of `a`, the largest absolute value of an entry in that column.
pub fn column_abs_max(a : ArrayView2<f64>) -> Array1<f64> {
    a.fold_axis(Axis(0), 0.0f64, |&acc, &x| acc.max(x.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn normalized_rows_have_unit_norm() {
        let a = array![[3.0, 4.0], [0.0, -2.0], [1.0, 1.0]];
        let normalized = normalize_rows(a.view());
        for i in 0..3 {
            assert_equal_scalars(sq_norm(normalized.row(i)), 1.0);
        }
        assert_equal_vectors(&normalized.row(0).to_owned(), &array![0.6, 0.8]);
    }

    #[test]
    fn column_abs_max_ignores_sign() {
        let a = array![[1.0, -5.0], [-3.0, 2.0]];
        assert_equal_vectors(&column_abs_max(a.view()), &array![3.0, 5.0]);
    }

    #[test]
    fn sq_vec_dist_is_symmetric() {
        let one = array![1.0, 2.0, 3.0];
        let two = array![0.0, 4.0, 3.0];
        assert_equal_scalars(sq_vec_dist(one.view(), two.view()), 5.0);
        assert_equal_scalars(sq_vec_dist(two.view(), one.view()), 5.0);
    }
}
