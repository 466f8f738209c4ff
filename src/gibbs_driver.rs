extern crate ndarray;

use ndarray::*;

use rand::prelude::*;

use crate::candidate_policy::*;
use crate::chain_state::*;
use crate::constraint_system::*;
use crate::direction_pool::*;
use crate::feasible_interval::*;
use crate::line_sampler::*;
use crate::move_schedule::*;
use crate::params::*;
use crate::rand_utils::*;
use crate::sampler_error::*;
use crate::sampler_params::*;

///Everything a finished run produced.
pub struct DriverOutput {
    ///`ndraw x nvar`, one recorded point per row
    pub samples : Array2<f64>,
    ///Weight of each recorded point
    pub weights : Array1<f64>,
    ///Accepted candidates, burn-in included
    pub accepted : usize,
    pub rejected : usize,
    pub iterations : usize,
    ///Distance between the cached slack and a recomputation at the end of the run
    pub final_slack_drift : f64
}

///The shared hit-and-run / Gibbs loop. Each iteration picks an axis according to
///the [`MoveSchedule`], computes the feasible interval along it, lets the
///[`LineSampler`] draw a new value, updates the chain, and asks the
///[`CandidatePolicy`] whether the result is a sample. The loop runs until
///`burnin + ndraw` candidates have been accepted.
pub struct GibbsDriver<'a, L : LineSampler, P : CandidatePolicy> {
    constraints : &'a ConstraintSystem,
    params : &'a SamplerParams,
    pool : DirectionPool,
    draws : RandomDraws,
    line_sampler : L,
    policy : P
}

impl<'a, L : LineSampler, P : CandidatePolicy> GibbsDriver<'a, L, P> {
    ///Validates `params`, then builds the direction pool and pre-generates all
    ///uniforms and move indices from `rng`, in that order.
    pub fn new<R : Rng + ?Sized>(constraints : &'a ConstraintSystem, params : &'a SamplerParams,
                                 line_sampler : L, policy : P, rng : &mut R) -> Result<GibbsDriver<'a, L, P>, SamplerError> {
        params.validate()?;
        let options = DirectionPoolOptions {
            use_constraint_directions : params.use_constraint_directions,
            use_random_directions : params.use_random_directions
        };
        let pool = DirectionPool::new(constraints, options, rng);
        let draws = RandomDraws::generate(rng, params.total_draws(), constraints.nvar(), pool.len());
        Result::Ok(GibbsDriver {
            constraints,
            params,
            pool,
            draws,
            line_sampler,
            policy
        })
    }

    pub fn pool(&self) -> &DirectionPool {
        &self.pool
    }

    pub fn run(&self, initial : ArrayView1<f64>) -> Result<DriverOutput, SamplerError> {
        self.constraints.check_initial(initial, BOUND_TOLERANCE)?;

        let nvar = self.constraints.nvar();
        let burnin = self.params.burnin;
        let required = self.params.total_draws();

        let mut samples : Array2<f64> = Array::zeros((self.params.ndraw, nvar));
        let mut weights : Array1<f64> = Array::zeros((self.params.ndraw,));
        let mut chain = ChainState::new(self.constraints, initial, self.policy.slack_kind());
        let mut schedule = MoveSchedule::new(self.params.bias_period());

        let mut accepted : usize = 0;
        let mut rejected : usize = 0;
        let mut iter_count : usize = 0;

        info!("Sampling {} draws after {} burn-in in {} dimensions under {} constraints",
              self.params.ndraw, burnin, nvar, self.constraints.nconstraint());

        while (accepted < required) {
            if let Option::Some(max_iterations) = self.params.max_iterations {
                if (iter_count >= max_iterations) {
                    warn!("Stopping after {} iterations with {} of {} candidates accepted",
                          iter_count, accepted, required);
                    return Result::Err(SamplerError::SamplingTimeout {
                        iterations : iter_count,
                        accepted,
                        required
                    });
                }
            }

            let next_move = schedule.next_move();
            self.step(&mut chain, next_move, iter_count);

            match (self.policy.judge(&chain, self.constraints)) {
                Verdict::Accept { weight } => {
                    if (accepted >= burnin) {
                        let row = accepted - burnin;
                        self.policy.write_point(&chain, samples.row_mut(row));
                        weights[[row,]] = weight;
                    }
                    accepted += 1;
                },
                Verdict::Reject => {
                    rejected += 1;
                }
            }
            iter_count += 1;
        }

        let final_slack_drift = chain.slack_drift(self.constraints);
        info!("Finished after {} iterations: {} accepted, {} rejected", iter_count, accepted, rejected);
        debug!("Final slack drift {}", final_slack_drift);

        Result::Ok(DriverOutput {
            samples,
            weights,
            accepted,
            rejected,
            iterations : iter_count,
            final_slack_drift
        })
    }

    ///One Gibbs move: choose the axis, bound it, draw, update.
    fn step(&self, chain : &mut ChainState, next_move : Move, iter_count : usize) {
        let (axis, alphas, threshold) = match (next_move) {
            Move::Coordinate => {
                let idx = self.draws.coord_index(iter_count);
                (MoveAxis::Coordinate(idx), self.constraints.column(idx), self.pool.coord_threshold(idx))
            },
            Move::Direction => {
                let idx = self.draws.direction_index(iter_count);
                self.direction_axis(idx)
            },
            Move::Bias => {
                self.direction_axis(self.pool.bias_index())
            }
        };

        let value = chain.axis_value(&axis);
        let b = self.constraints.b();
        let mut interval = polytope_interval(value, alphas, threshold,
                                             |i| chain.residual(i, b), self.line_sampler.scale());
        if (self.line_sampler.confined_to_ball()) {
            interval = interval.intersect_ball(value, chain.norm_sq(), chain.norm_bound());
        }

        let new_value = self.line_sampler.draw(&interval, self.draws.uniform(iter_count));
        chain.apply_move(&axis, alphas, value, new_value);

        if (self.line_sampler.confined_to_ball()) {
            chain.shrink_into_ball(self.constraints);
        }
    }

    fn direction_axis(&self, idx : usize) -> (MoveAxis<'_>, ArrayView1<'_, f64>, f64) {
        (MoveAxis::Direction(self.pool.direction(idx)), self.pool.direction_alphas(idx), self.pool.direction_threshold(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere_projection::*;
    use crate::test_utils::*;

    #[test]
    fn slack_cache_survives_a_long_run() {
        let mut rng = seeded_rng(31);
        let constraints = random_polytope(8, 20, &mut rng);
        let params = SamplerParams::default().with_burnin(100).with_ndraw(3000).with_how_often(7);
        let driver = GibbsDriver::new(&constraints, &params, TruncatedNormalLineSampler::new(1.0), AcceptAll, &mut rng).unwrap();
        let output = driver.run(Array::zeros((8,)).view()).unwrap();
        assert_eq!(output.iterations, 3100);
        assert_eq!(output.rejected, 0);
        assert!(output.final_slack_drift < 1.0e-9);
    }

    #[test]
    fn sphere_run_counts_rejections() {
        //x_0 <= 0.5 cuts off a cap of the unit circle
        let constraints = ConstraintSystem::new(array![[1.0, 0.0]], array![0.5], array![0.0, 1.0]).unwrap();
        let params = SamplerParams::default().with_burnin(50).with_ndraw(500);
        let mut rng = seeded_rng(8);
        let driver = GibbsDriver::new(&constraints, &params, UniformLineSampler, SphereProjection, &mut rng).unwrap();
        let output = driver.run(array![0.0, 1.0].view()).unwrap();
        assert_eq!(output.accepted, 550);
        assert!(output.rejected > 0);
        assert_eq!(output.iterations, output.accepted + output.rejected);
        assert!(output.final_slack_drift < 1.0e-9);
        assert_all_feasible(&constraints, &output.samples, 1.0e-9);
        assert_all_on_sphere(&output.samples, 1.0, 1.0e-9);
    }

    #[test]
    fn timeout_is_reported() {
        let constraints = box_constraints(2, 1.0);
        let params = SamplerParams::default().with_burnin(0).with_ndraw(50).with_max_iterations(10);
        let mut rng = seeded_rng(1);
        let driver = GibbsDriver::new(&constraints, &params, UniformLineSampler, SphereProjection, &mut rng).unwrap();
        let err = driver.run(array![0.5, 0.5].view()).err().unwrap();
        match (err) {
            SamplerError::SamplingTimeout { iterations, accepted, required } => {
                assert_eq!(iterations, 10);
                assert!(accepted <= 10);
                assert_eq!(required, 50);
            },
            other => panic!("unexpected error {}", other)
        }
    }

    #[test]
    fn invalid_params_fail_before_sampling() {
        let constraints = box_constraints(2, 1.0);
        let params = SamplerParams::default().with_sigma(-1.0);
        let mut rng = seeded_rng(1);
        let result = GibbsDriver::new(&constraints, &params, TruncatedNormalLineSampler::new(-1.0), AcceptAll, &mut rng);
        assert!(result.is_err());
    }
}
