use serde::{Deserialize, Serialize};

use crate::params::*;
use crate::sampler_error::*;

///Run configuration shared by all three samplers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerParams {
    ///Every `how_often`-th iteration moves along the bias direction.
    ///Zero or negative values disable forced bias moves.
    pub how_often : i64,
    ///Scale of the white Gaussian. Only used by the truncated normal sampler.
    pub sigma : f64,
    pub burnin : usize,
    pub ndraw : usize,
    ///Upper limit on driver iterations. Only reachable in practice by the
    ///sphere sampler, whose accept/reject loop has no guaranteed acceptance rate.
    pub max_iterations : Option<usize>,
    ///Whether the rows of `A` are part of the direction pool
    pub use_constraint_directions : bool,
    ///Whether `nvar / 5` random directions are part of the direction pool
    pub use_random_directions : bool
}

impl Default for SamplerParams {
    fn default() -> SamplerParams {
        SamplerParams {
            how_often : DEFAULT_HOW_OFTEN,
            sigma : DEFAULT_SIGMA,
            burnin : DEFAULT_BURNIN,
            ndraw : DEFAULT_NDRAW,
            max_iterations : Option::None,
            use_constraint_directions : true,
            use_random_directions : true
        }
    }
}

impl SamplerParams {
    pub fn with_how_often(mut self, how_often : i64) -> SamplerParams {
        self.how_often = how_often;
        self
    }
    pub fn with_sigma(mut self, sigma : f64) -> SamplerParams {
        self.sigma = sigma;
        self
    }
    pub fn with_burnin(mut self, burnin : usize) -> SamplerParams {
        self.burnin = burnin;
        self
    }
    pub fn with_ndraw(mut self, ndraw : usize) -> SamplerParams {
        self.ndraw = ndraw;
        self
    }
    pub fn with_max_iterations(mut self, max_iterations : usize) -> SamplerParams {
        self.max_iterations = Option::Some(max_iterations);
        self
    }
    pub fn with_constraint_directions(mut self, use_constraint_directions : bool) -> SamplerParams {
        self.use_constraint_directions = use_constraint_directions;
        self
    }
    pub fn with_random_directions(mut self, use_random_directions : bool) -> SamplerParams {
        self.use_random_directions = use_random_directions;
        self
    }

    ///Total number of recorded-or-discarded states a run must produce.
    pub fn total_draws(&self) -> usize {
        self.burnin + self.ndraw
    }

    ///The bias period, if bias moves are enabled at all.
    pub fn bias_period(&self) -> Option<usize> {
        if (self.how_often > 0) {
            Option::Some(self.how_often as usize)
        } else {
            Option::None
        }
    }

    pub fn validate(&self) -> Result<(), SamplerError> {
        if (!self.sigma.is_finite() || self.sigma <= 0.0) {
            return Result::Err(SamplerError::invalid(format!("sigma must be positive and finite, got {}", self.sigma)));
        }
        if let Option::Some(0) = self.max_iterations {
            return Result::Err(SamplerError::invalid("max_iterations must be at least 1"));
        }
        Result::Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = SamplerParams::default();
        assert_eq!(params.how_often, 1000);
        assert_eq!(params.sigma, 1.0);
        assert_eq!(params.burnin, 500);
        assert_eq!(params.ndraw, 1000);
        assert_eq!(params.total_draws(), 1500);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn non_positive_how_often_disables_bias_moves() {
        assert_eq!(SamplerParams::default().with_how_often(-1).bias_period(), Option::None);
        assert_eq!(SamplerParams::default().with_how_often(0).bias_period(), Option::None);
        assert_eq!(SamplerParams::default().with_how_often(7).bias_period(), Option::Some(7));
    }

    #[test]
    fn bad_sigma_is_rejected() {
        assert!(SamplerParams::default().with_sigma(0.0).validate().is_err());
        assert!(SamplerParams::default().with_sigma(-2.0).validate().is_err());
        assert!(SamplerParams::default().with_sigma(std::f64::NAN).validate().is_err());
    }

    #[test]
    fn zero_draws_are_allowed() {
        let params = SamplerParams::default().with_ndraw(0).with_burnin(0);
        assert!(params.validate().is_ok());
        assert_eq!(params.total_draws(), 0);
    }
}
