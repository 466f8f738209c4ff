extern crate ndarray;

use ndarray::*;

use crate::array_utils::*;
use crate::linalg_utils::*;
use crate::sampler_error::*;

///Immutable representation of the polytope `{x : Ax <= b}` together with the
///bias direction a chain is guaranteed to move along every so often.
///
///`A` is stored row-major (one constraint per row). Coordinate moves need the
///columns of `A`, so the transpose is cached once here in standard layout.
#[derive(Clone, Debug)]
pub struct ConstraintSystem {
    a : Array2<f64>,
    a_transpose : Array2<f64>,
    b : Array1<f64>,
    bias_direction : Array1<f64>
}

impl ConstraintSystem {
    ///Validates shapes and contents and builds the constraint system.
    ///Rejects empty or non-finite inputs, zero rows of `A` and a zero bias direction.
    pub fn new(a : Array2<f64>, b : Array1<f64>, bias_direction : Array1<f64>) -> Result<ConstraintSystem, SamplerError> {
        let nconstraint = a.shape()[0];
        let nvar = a.shape()[1];
        if (nconstraint == 0 || nvar == 0) {
            return Result::Err(SamplerError::invalid(format!("A must be non-empty, got {} x {}", nconstraint, nvar)));
        }
        check_dimension("b", nconstraint, b.len())?;
        check_dimension("bias_direction", nvar, bias_direction.len())?;

        if (!all_finite_matrix(a.view())) {
            return Result::Err(SamplerError::invalid("A has non-finite entries"));
        }
        if (!all_finite(b.view())) {
            return Result::Err(SamplerError::invalid("b has non-finite entries"));
        }
        if (!all_finite(bias_direction.view())) {
            return Result::Err(SamplerError::invalid("bias_direction has non-finite entries"));
        }
        for i in 0..nconstraint {
            if (sq_norm(a.row(i)) == 0.0) {
                return Result::Err(SamplerError::invalid(format!("row {} of A is zero", i)));
            }
        }
        if (sq_norm(bias_direction.view()) == 0.0) {
            return Result::Err(SamplerError::invalid("bias_direction is zero"));
        }

        let a_transpose = Array::from_shape_fn((nvar, nconstraint), |(j, i)| a[[i, j]]);
        Result::Ok(ConstraintSystem {
            a,
            a_transpose,
            b,
            bias_direction
        })
    }

    pub fn nvar(&self) -> usize {
        self.a.shape()[1]
    }
    pub fn nconstraint(&self) -> usize {
        self.a.shape()[0]
    }
    pub fn a(&self) -> ArrayView2<f64> {
        self.a.view()
    }
    pub fn b(&self) -> ArrayView1<f64> {
        self.b.view()
    }
    pub fn bias_direction(&self) -> ArrayView1<f64> {
        self.bias_direction.view()
    }
    ///Column `idx` of `A`: how much each constraint moves per unit step along `e_idx`.
    pub fn column(&self, idx : usize) -> ArrayView1<f64> {
        self.a_transpose.row(idx)
    }

    ///Computes `Ax`
    pub fn image(&self, x : ArrayView1<f64>) -> Array1<f64> {
        self.a.dot(&x)
    }

    ///Computes the slack `Ax - b`, non-positive everywhere exactly when `x` is feasible.
    pub fn residual(&self, x : ArrayView1<f64>) -> Array1<f64> {
        let mut result = self.image(x);
        result -= &self.b;
        result
    }

    ///Largest constraint violation `max_i (A_i x - b_i)`, clamped below at zero.
    pub fn max_violation(&self, x : ArrayView1<f64>) -> f64 {
        let residual = self.residual(x);
        residual.fold(0.0f64, |acc, &r| acc.max(r))
    }

    pub fn is_feasible(&self, x : ArrayView1<f64>, tolerance : f64) -> bool {
        self.max_violation(x) <= tolerance
    }

    ///Checks that a starting point has the right length. Feasibility is not
    ///enforced, only reported.
    pub fn check_initial(&self, initial : ArrayView1<f64>, tolerance : f64) -> Result<(), SamplerError> {
        check_dimension("initial", self.nvar(), initial.len())?;
        if (!all_finite(initial)) {
            return Result::Err(SamplerError::invalid("initial has non-finite entries"));
        }
        let violation = self.max_violation(initial);
        if (violation > tolerance) {
            warn!("Initial point violates the constraints by {}", violation);
        }
        Result::Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn shape_mismatches_are_rejected() {
        let a = array![[1.0, 0.0], [0.0, 1.0]];
        let err = ConstraintSystem::new(a.clone(), array![1.0], array![1.0, 0.0]).unwrap_err();
        assert_eq!(err, SamplerError::DimensionMismatch { what : "b", expected : 2, found : 1 });
        let err = ConstraintSystem::new(a, array![1.0, 1.0], array![1.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(err, SamplerError::DimensionMismatch { what : "bias_direction", expected : 2, found : 3 });
    }

    #[test]
    fn zero_rows_and_zero_bias_are_rejected() {
        let a = array![[1.0, 0.0], [0.0, 0.0]];
        assert!(ConstraintSystem::new(a, array![1.0, 1.0], array![1.0, 0.0]).is_err());
        let a = array![[1.0, 0.0], [0.0, 1.0]];
        assert!(ConstraintSystem::new(a, array![1.0, 1.0], array![0.0, 0.0]).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let a = array![[1.0, std::f64::NAN]];
        assert!(ConstraintSystem::new(a, array![1.0], array![1.0, 0.0]).is_err());
        let a = array![[1.0, 1.0]];
        assert!(ConstraintSystem::new(a, array![std::f64::INFINITY], array![1.0, 0.0]).is_err());
    }

    #[test]
    fn columns_match_transpose() {
        let constraints = box_constraints(3, 2.0);
        for j in 0..3 {
            assert_equal_vectors(&constraints.column(j).to_owned(), &constraints.a().column(j).to_owned());
        }
    }

    #[test]
    fn residual_and_feasibility() {
        let constraints = box_constraints(2, 1.0);
        let inside = array![0.5, -0.5];
        let outside = array![1.5, 0.0];
        assert!(constraints.is_feasible(inside.view(), 0.0));
        assert!(!constraints.is_feasible(outside.view(), 0.0));
        assert_equal_scalars(constraints.max_violation(outside.view()), 0.5);
        assert_equal_vectors(&constraints.residual(inside.view()), &array![-0.5, -1.5, -1.5, -0.5]);
    }

    #[test]
    fn initial_with_wrong_length_is_rejected() {
        let constraints = box_constraints(2, 1.0);
        assert!(constraints.check_initial(array![0.0].view(), 0.0).is_err());
        assert!(constraints.check_initial(array![0.0, 0.0].view(), 0.0).is_ok());
        //Infeasible starts are only logged
        assert!(constraints.check_initial(array![3.0, 0.0].view(), 0.0).is_ok());
    }
}
