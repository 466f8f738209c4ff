//Move scheduling
//
//Every INVPERIOD-th iteration replaces the coordinate move with a move along a pooled direction
pub const INVPERIOD : usize = 13;
//Number of random directions in the pool is nvar / RANDOM_DIRECTION_DIVISOR
pub const RANDOM_DIRECTION_DIVISOR : usize = 5;

//Numerical algorithm constants
//
//Relative threshold below which a constraint row is treated as parallel to the move,
//also the width of the clamp applied to marginally infeasible intervals
pub const BOUND_TOLERANCE : f64 = 1.0e-7;
//Stand-in for an infinite bound on directions no constraint row limits
pub const UNCONSTRAINED_BOUND : f64 = 1.0e12;
//Fraction of the squared radius the ball chain is pulled back to after drifting outside
pub const BALL_SHRINK_FACTOR : f64 = 0.999;
//Relative slack allowed when testing a sphere projection against b, since the
//projected point only lands on the sphere to within a few ulps
pub const PROJECTION_TOLERANCE : f64 = 1.0e-12;

//Defaults for a sampling run
pub const DEFAULT_HOW_OFTEN : i64 = 1000;
pub const DEFAULT_SIGMA : f64 = 1.0;
pub const DEFAULT_BURNIN : usize = 500;
pub const DEFAULT_NDRAW : usize = 1000;

pub const DEFAULT_TEST_THRESH : f64 = 1.0e-6;

///Number of random directions added to the pool for a problem in `nvar` dimensions.
pub fn num_random_directions(nvar : usize) -> usize {
    nvar / RANDOM_DIRECTION_DIVISOR
}
