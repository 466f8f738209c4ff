extern crate ndarray;

use ndarray::*;
use serde::{Deserialize, Serialize};

use rand::prelude::*;

use crate::candidate_policy::*;
use crate::constraint_system::*;
use crate::gibbs_driver::*;
use crate::line_sampler::*;
use crate::linalg_utils::*;
use crate::sampler_error::*;
use crate::sampler_params::*;
use crate::sphere_projection::*;

///Weighted draws from the uniform distribution on a sphere intersected with a polytope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SphereSamples {
    ///`ndraw x nvar`, every row on the sphere of radius `||initial||`
    pub samples : Array2<f64>,
    ///Importance weight of each row
    pub weights : Array1<f64>,
    ///Candidates whose projection left the polytope
    pub rejected : usize,
    pub iterations : usize
}

impl SphereSamples {
    ///Importance-weighted mean of the samples, the estimate of the uniform
    ///mean over the sphere and polytope. `None` when there are no samples.
    pub fn weighted_mean(&self) -> Option<Array1<f64>> {
        let total_weight = self.weights.sum();
        if (self.samples.shape()[0] == 0 || !(total_weight > 0.0)) {
            return Option::None;
        }
        let mut result = self.weights.dot(&self.samples);
        result /= total_weight;
        Option::Some(result)
    }

    ///Fraction of driver iterations whose candidate was accepted.
    pub fn acceptance_rate(&self) -> f64 {
        if (self.iterations == 0) {
            return 0.0;
        }
        1.0 - (self.rejected as f64) / (self.iterations as f64)
    }
}

///Draws `ndraw` states of a Gibbs chain targeting `N(0, sigma^2 I)` restricted
///to `Ax <= b`, after discarding `burnin` states. `initial` must be feasible.
pub fn sample_truncated_normal<R : Rng + ?Sized>(constraints : &ConstraintSystem, initial : ArrayView1<f64>,
                                                 params : &SamplerParams, rng : &mut R) -> Result<Array2<f64>, SamplerError> {
    let line_sampler = TruncatedNormalLineSampler::new(params.sigma);
    let driver = GibbsDriver::new(constraints, params, line_sampler, AcceptAll, rng)?;
    let output = driver.run(initial)?;
    Result::Ok(output.samples)
}

///Draws `ndraw` states of a hit-and-run chain targeting the uniform distribution
///on the ball of radius `||initial||` intersected with `Ax <= b`. `sigma` is ignored.
pub fn sample_uniform_in_ball<R : Rng + ?Sized>(constraints : &ConstraintSystem, initial : ArrayView1<f64>,
                                                params : &SamplerParams, rng : &mut R) -> Result<Array2<f64>, SamplerError> {
    check_radius(initial)?;
    let driver = GibbsDriver::new(constraints, params, UniformLineSampler, AcceptAll, rng)?;
    let output = driver.run(initial)?;
    Result::Ok(output.samples)
}

///Draws `ndraw` weighted points from the uniform distribution on the sphere of
///radius `||initial||` intersected with `Ax <= b`, by projecting a ball chain onto
///the sphere and keeping only projections inside the polytope. `sigma` is ignored.
///
///The number of iterations is unbounded unless `params.max_iterations` is set.
pub fn sample_uniform_on_sphere<R : Rng + ?Sized>(constraints : &ConstraintSystem, initial : ArrayView1<f64>,
                                                  params : &SamplerParams, rng : &mut R) -> Result<SphereSamples, SamplerError> {
    check_radius(initial)?;
    let driver = GibbsDriver::new(constraints, params, UniformLineSampler, SphereProjection, rng)?;
    let output = driver.run(initial)?;
    Result::Ok(SphereSamples {
        samples : output.samples,
        weights : output.weights,
        rejected : output.rejected,
        iterations : output.iterations
    })
}

fn check_radius(initial : ArrayView1<f64>) -> Result<(), SamplerError> {
    if (sq_norm(initial) > 0.0) {
        Result::Ok(())
    } else {
        Result::Err(SamplerError::invalid("initial must be nonzero, its norm is the radius"))
    }
}
