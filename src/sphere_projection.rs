extern crate ndarray;

use ndarray::*;

use crate::candidate_policy::*;
use crate::chain_state::*;
use crate::constraint_system::*;
use crate::linalg_utils::*;
use crate::params::*;

///Turns a chain on the ball into samples on the sphere of the same radius.
///
///Each state is radially projected onto the sphere and accepted only if the
///projection satisfies every constraint. Projection favours directions along
///which the polytope covers more of the ball, so each accepted point carries
///the weight `1 / (1 - M^n)`, where `M` is the smallest fraction of the projected
///point that still lies in the polytope.
#[derive(Clone, Copy, Debug, Default)]
pub struct SphereProjection;

///Factor taking a state of squared norm `norm_sq` onto the sphere of squared radius `norm_bound`.
pub fn sphere_multiplier(norm_sq : f64, norm_bound : f64) -> f64 {
    (norm_bound / norm_sq).sqrt()
}

///Smallest `M >= 0` such that `M * point` satisfies every constraint that
///`point` (with image `image = A point`) pulls towards, i.e.
///`max(0, max_{i : image_i < 0} b_i / image_i)`.
pub fn reentry_multiple(image : ArrayView1<f64>, b : ArrayView1<f64>) -> f64 {
    let mut result = 0.0f64;
    for (&a_x, &b_i) in image.iter().zip(b.iter()) {
        if (a_x < 0.0) {
            let val = b_i / a_x;
            if (val > result) {
                result = val;
            }
        }
    }
    result
}

///Importance weight `1 / (1 - M^nvar)` for a sphere point whose image is `image`.
pub fn importance_weight(image : ArrayView1<f64>, b : ArrayView1<f64>, nvar : usize) -> f64 {
    let reentry = reentry_multiple(image, b);
    1.0 / (1.0 - reentry.powi(nvar as i32))
}

///Projection factor for the chain's current state, from its exact squared norm
///rather than the incrementally maintained one.
fn projection_multiplier(chain : &ChainState) -> f64 {
    sphere_multiplier(sq_norm(chain.state()), chain.norm_bound())
}

impl CandidatePolicy for SphereProjection {
    fn slack_kind(&self) -> SlackKind {
        SlackKind::Image
    }

    fn judge(&self, chain : &ChainState, constraints : &ConstraintSystem) -> Verdict {
        let multiplier = projection_multiplier(chain);
        let b = constraints.b();
        let astate = chain.slack();
        for i in 0..constraints.nconstraint() {
            let projected = astate[[i,]] * multiplier;
            let slack = PROJECTION_TOLERANCE * projected.abs().max(b[[i,]].abs());
            if (projected > b[[i,]] + slack) {
                return Verdict::Reject;
            }
        }
        let projected_image = &astate * multiplier;
        let weight = importance_weight(projected_image.view(), b, constraints.nvar());
        Verdict::Accept { weight }
    }

    fn write_point(&self, chain : &ChainState, mut out : ArrayViewMut1<f64>) {
        let multiplier = projection_multiplier(chain);
        out.assign(&chain.state());
        out *= multiplier;
    }
}
