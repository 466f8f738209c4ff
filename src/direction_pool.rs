extern crate ndarray;

use ndarray::*;

use rand::prelude::*;

use crate::array_utils::*;
use crate::constraint_system::*;
use crate::linalg_utils::*;
use crate::params::*;
use crate::rand_utils::*;

///Which non-bias directions go into a [`DirectionPool`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionPoolOptions {
    pub use_constraint_directions : bool,
    pub use_random_directions : bool
}

impl Default for DirectionPoolOptions {
    fn default() -> DirectionPoolOptions {
        DirectionPoolOptions {
            use_constraint_directions : true,
            use_random_directions : true
        }
    }
}

///The fixed set of unit directions a chain may move along, together with
///how each constraint row projects onto each of them.
///
///Rows are, in order: the rows of `A` (optional) and `nvar / 5` standard normal
///directions (optional), with the last of these replaced by the bias direction.
///When both are left out the pool holds the bias direction alone.
///Every row is normalized to unit length.
pub struct DirectionPool {
    directions : Array2<f64>,
    ///`direction_alphas[[j, i]] = A[i] . directions[j]`, one row per direction
    direction_alphas : Array2<f64>,
    ///`tol * max_i |direction_alphas[[j, i]]|` per direction
    direction_thresholds : Array1<f64>,
    ///`tol * max_i |A[i, j]|` per coordinate
    coord_thresholds : Array1<f64>
}

impl DirectionPool {
    pub fn new<R : Rng + ?Sized>(constraints : &ConstraintSystem, options : DirectionPoolOptions,
                                 rng : &mut R) -> DirectionPool {
        let nvar = constraints.nvar();
        let mut rows = Vec::new();
        if (options.use_constraint_directions) {
            for i in 0..constraints.nconstraint() {
                rows.push(constraints.a().row(i).to_owned());
            }
        }
        if (options.use_random_directions) {
            let random_rows = generate_standard_normal_rows(rng, num_random_directions(nvar), nvar);
            for row in random_rows.genrows() {
                rows.push(row.to_owned());
            }
        }
        //The bias takes over the last slot; it only gets a row of its own in an otherwise empty pool
        match (rows.last_mut()) {
            Option::Some(last) => *last = constraints.bias_direction().to_owned(),
            Option::None => rows.push(constraints.bias_direction().to_owned())
        }

        let directions = normalize_rows(stack_rows(&rows, nvar).view());
        DirectionPool::from_directions(constraints, directions)
    }

    ///Builds a pool from explicit (already normalized) direction rows. The last
    ///row is taken to be the bias direction.
    pub fn from_directions(constraints : &ConstraintSystem, directions : Array2<f64>) -> DirectionPool {
        let direction_alphas = directions.dot(&constraints.a().t());
        let mut direction_thresholds = column_abs_max(direction_alphas.t());
        direction_thresholds *= BOUND_TOLERANCE;
        let mut coord_thresholds = column_abs_max(constraints.a());
        coord_thresholds *= BOUND_TOLERANCE;

        debug!("Built direction pool with {} directions in {} dimensions",
               directions.shape()[0], directions.shape()[1]);

        DirectionPool {
            directions,
            direction_alphas,
            direction_thresholds,
            coord_thresholds
        }
    }

    pub fn len(&self) -> usize {
        self.directions.shape()[0]
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn bias_index(&self) -> usize {
        self.len() - 1
    }
    pub fn direction(&self, idx : usize) -> ArrayView1<f64> {
        self.directions.row(idx)
    }
    pub fn directions(&self) -> ArrayView2<f64> {
        self.directions.view()
    }
    pub fn direction_alphas(&self, idx : usize) -> ArrayView1<f64> {
        self.direction_alphas.row(idx)
    }
    pub fn direction_threshold(&self, idx : usize) -> f64 {
        self.direction_thresholds[[idx,]]
    }
    pub fn coord_threshold(&self, idx : usize) -> f64 {
        self.coord_thresholds[[idx,]]
    }
}
