extern crate ndarray;

use ndarray::*;

use crate::chain_state::*;
use crate::constraint_system::*;

///Outcome of inspecting the chain after a move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Accept { weight : f64 },
    Reject
}

///Decides whether the state a chain reached counts as a sample, and what
///point gets recorded for it.
pub trait CandidatePolicy {
    ///The slack quantity the chain should cache for this policy.
    fn slack_kind(&self) -> SlackKind;
    fn judge(&self, chain : &ChainState, constraints : &ConstraintSystem) -> Verdict;
    ///Writes the recorded point for an accepted state into `out`.
    fn write_point(&self, chain : &ChainState, out : ArrayViewMut1<f64>);
}

///Every state the chain visits is a sample, recorded as is, with unit weight.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl CandidatePolicy for AcceptAll {
    fn slack_kind(&self) -> SlackKind {
        SlackKind::Residual
    }
    fn judge(&self, _chain : &ChainState, _constraints : &ConstraintSystem) -> Verdict {
        Verdict::Accept { weight : 1.0 }
    }
    fn write_point(&self, chain : &ChainState, mut out : ArrayViewMut1<f64>) {
        out.assign(&chain.state());
    }
}
