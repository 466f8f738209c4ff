extern crate ndarray;

use ndarray::*;

use crate::constraint_system::*;
use crate::linalg_utils::*;
use crate::params::*;

///What the cached slack vector holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlackKind {
    ///`Ax - b`, used by chains that stay inside the polytope
    Residual,
    ///`Ax`, used by the sphere chain, which tests feasibility of a rescaled point
    Image
}

///The axis a single Gibbs move acts along.
#[derive(Clone, Debug)]
pub enum MoveAxis<'a> {
    ///The standard basis vector `e_idx`
    Coordinate(usize),
    ///A unit direction from the pool
    Direction(ArrayView1<'a, f64>)
}

///Current point of a chain plus everything derived from it that the
///chain keeps incrementally up to date.
#[derive(Clone, Debug)]
pub struct ChainState {
    state : Array1<f64>,
    ///This is always maintained to equal `Ax - b` or `Ax`, according to `slack_kind`
    slack : Array1<f64>,
    slack_kind : SlackKind,
    ///This is always maintained to equal `||state||^2`
    norm_sq : f64,
    ///`||initial||^2`, the squared radius of the ball or sphere
    norm_bound : f64
}

impl ChainState {
    pub fn new(constraints : &ConstraintSystem, initial : ArrayView1<f64>, slack_kind : SlackKind) -> ChainState {
        let slack = match (slack_kind) {
            SlackKind::Residual => constraints.residual(initial),
            SlackKind::Image => constraints.image(initial)
        };
        let norm_sq = sq_norm(initial);
        ChainState {
            state : initial.to_owned(),
            slack,
            slack_kind,
            norm_sq,
            norm_bound : norm_sq
        }
    }

    pub fn state(&self) -> ArrayView1<f64> {
        self.state.view()
    }
    pub fn slack(&self) -> ArrayView1<f64> {
        self.slack.view()
    }
    pub fn slack_kind(&self) -> SlackKind {
        self.slack_kind
    }
    pub fn norm_sq(&self) -> f64 {
        self.norm_sq
    }
    pub fn norm_bound(&self) -> f64 {
        self.norm_bound
    }

    ///`A_i x - b_i` for row `i`, whichever quantity is cached.
    pub fn residual(&self, i : usize, b : ArrayView1<f64>) -> f64 {
        match (self.slack_kind) {
            SlackKind::Residual => self.slack[[i,]],
            SlackKind::Image => self.slack[[i,]] - b[[i,]]
        }
    }

    ///The current value `V` of the coordinate or projection being resampled.
    pub fn axis_value(&self, axis : &MoveAxis) -> f64 {
        match (axis) {
            MoveAxis::Coordinate(idx) => self.state[[*idx,]],
            MoveAxis::Direction(direction) => direction.dot(&self.state)
        }
    }

    ///Moves the coordinate or projection from `value_before` to `new_value`.
    ///`alphas` holds each constraint row's projection onto the move axis, so
    ///the slack stays in sync in `O(nconstraint)` on top of the `O(nvar)` state update.
    pub fn apply_move(&mut self, axis : &MoveAxis, alphas : ArrayView1<f64>, value_before : f64, new_value : f64) {
        let delta = new_value - value_before;
        match (axis) {
            MoveAxis::Coordinate(idx) => {
                self.state[[*idx,]] = new_value;
            },
            MoveAxis::Direction(direction) => {
                self.state.scaled_add(delta, direction);
            }
        }
        self.slack.scaled_add(delta, &alphas);
        //Axes have unit norm, so only the component along the axis changes
        self.norm_sq += new_value * new_value - value_before * value_before;
    }

    ///Scales the state about the origin, keeping the slack in sync.
    pub fn rescale(&mut self, multiplier : f64, constraints : &ConstraintSystem) {
        self.state *= multiplier;
        match (self.slack_kind) {
            SlackKind::Residual => {
                self.slack += &constraints.b();
                self.slack *= multiplier;
                self.slack -= &constraints.b();
            },
            SlackKind::Image => {
                self.slack *= multiplier;
            }
        }
        self.norm_sq *= multiplier * multiplier;
    }

    ///Recomputes `norm_sq` from the state, discarding accumulated update error.
    pub fn refresh_norm(&mut self) {
        self.norm_sq = sq_norm(self.state.view());
    }

    ///Refreshes the cached norm, then, if roundoff has carried the state outside
    ///the ball of radius `sqrt(norm_bound)`, pulls it back to squared norm
    ///`BALL_SHRINK_FACTOR * norm_bound`. Returns whether a rescale happened.
    pub fn shrink_into_ball(&mut self, constraints : &ConstraintSystem) -> bool {
        self.refresh_norm();
        if (self.norm_sq > self.norm_bound) {
            let target = BALL_SHRINK_FACTOR * self.norm_bound;
            let multiplier = (target / self.norm_sq).sqrt();
            trace!("State left the ball (|x|^2 = {} > {}), rescaling by {}", self.norm_sq, self.norm_bound, multiplier);
            self.rescale(multiplier, constraints);
            self.refresh_norm();
            true
        } else {
            false
        }
    }

    ///Largest absolute difference between the cached slack and a from-scratch
    ///recomputation. Takes `O(nvar * nconstraint)`, so it is only meant for
    ///diagnostics outside the sampling loop.
    pub fn slack_drift(&self, constraints : &ConstraintSystem) -> f64 {
        let recomputed = match (self.slack_kind) {
            SlackKind::Residual => constraints.residual(self.state.view()),
            SlackKind::Image => constraints.image(self.state.view())
        };
        let diff = &recomputed - &self.slack;
        diff.fold(0.0f64, |acc, &d| acc.max(d.abs()))
    }

    ///Absolute difference between the cached squared norm and a recomputation.
    pub fn norm_drift(&self) -> f64 {
        (sq_norm(self.state.view()) - self.norm_sq).abs()
    }
}
