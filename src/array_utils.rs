extern crate ndarray;

use ndarray::*;

pub fn all_finite(vec : ArrayView1<f64>) -> bool {
    vec.iter().all(|x| x.is_finite())
}

pub fn all_finite_matrix(mat : ArrayView2<f64>) -> bool {
    mat.iter().all(|x| x.is_finite())
}

///Stacks equal-length rows into a matrix. An empty list yields a `0 x width` matrix.
pub fn stack_rows(rows : &[Array1<f64>], width : usize) -> Array2<f64> {
    let mut result : Array2<f64> = Array::zeros((rows.len(), width));
    for (i, row) in rows.iter().enumerate() {
        result.row_mut(i).assign(row);
    }
    result
}
