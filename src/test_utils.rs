extern crate ndarray;

use ndarray::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::constraint_system::*;
use crate::linalg_utils::*;
use crate::params::*;
use crate::rand_utils::*;

pub fn seeded_rng(seed : u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn assert_equal_scalars(one : f64, two : f64) {
    assert_equal_scalars_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_equal_scalars_to_within(one : f64, two : f64, thresh : f64) {
    if ((one - two).abs() > thresh) {
        panic!("{} and {} differ by more than {}", one, two, thresh);
    }
}

pub fn assert_equal_vectors(one : &Array1<f64>, two : &Array1<f64>) {
    assert_equal_vectors_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_equal_vectors_to_within(one : &Array1<f64>, two : &Array1<f64>, thresh : f64) {
    let dist = sq_vec_dist(one.view(), two.view()).sqrt();
    if (dist > thresh) {
        panic!("{} and {} are {} apart", one, two, dist);
    }
}

///The box `|x_j| <= c` for every coordinate, written as `[I; -I] x <= c`.
pub fn box_constraints(nvar : usize, c : f64) -> ConstraintSystem {
    let mut a = Array::zeros((2 * nvar, nvar));
    for j in 0..nvar {
        a[[j, j]] = 1.0;
        a[[nvar + j, j]] = -1.0;
    }
    let b = Array::from_elem((2 * nvar,), c);
    let bias = Array::ones((nvar,));
    ConstraintSystem::new(a, b, bias).unwrap()
}

///Random polytope with unit-norm rows and every `b_i >= 0.5`, so the ball
///of radius 0.5 about the origin is feasible.
pub fn random_polytope<R : Rng + ?Sized>(nvar : usize, nconstraint : usize, rng : &mut R) -> ConstraintSystem {
    let a = normalize_rows(generate_standard_normal_rows(rng, nconstraint, nvar).view());
    let offsets = generate_standard_normal_random(rng, nconstraint);
    let b = offsets.mapv(|z| 0.5 + z.abs());
    let bias = generate_standard_normal_random(rng, nvar);
    ConstraintSystem::new(a, b, bias).unwrap()
}

///A random point of norm at most `radius`, checked to be feasible.
pub fn random_feasible_point<R : Rng + ?Sized>(constraints : &ConstraintSystem, radius : f64, rng : &mut R) -> Array1<f64> {
    let nvar = constraints.nvar();
    let u : f64 = rng.gen();
    let mut result = generate_nsphere_random(rng, nvar);
    result *= radius * u.powf(1.0 / (nvar as f64));
    assert!(constraints.is_feasible(result.view(), 0.0));
    result
}

pub fn assert_all_feasible(constraints : &ConstraintSystem, samples : &Array2<f64>, tolerance : f64) {
    for (i, row) in samples.genrows().into_iter().enumerate() {
        let violation = constraints.max_violation(row);
        if (violation > tolerance) {
            panic!("Sample {} = {} violates the constraints by {}", i, row, violation);
        }
    }
}

pub fn assert_all_in_ball(samples : &Array2<f64>, radius : f64, rel_tolerance : f64) {
    for row in samples.genrows() {
        let norm = sq_norm(row).sqrt();
        if (norm > radius * (1.0 + rel_tolerance)) {
            panic!("Sample {} has norm {} above {}", row, norm, radius);
        }
    }
}

pub fn assert_all_on_sphere(samples : &Array2<f64>, radius : f64, rel_tolerance : f64) {
    for row in samples.genrows() {
        let norm = sq_norm(row).sqrt();
        if ((norm - radius).abs() > radius * rel_tolerance) {
            panic!("Sample {} has norm {}, not {}", row, norm, radius);
        }
    }
}

///Kolmogorov-Smirnov distance between the empirical distribution of `samples`
///and the continuous CDF `cdf`.
pub fn ks_statistic<F>(mut samples : Vec<f64>, cdf : F) -> f64 where F : Fn(f64) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = samples.len() as f64;
    let mut result = 0.0f64;
    for (i, &x) in samples.iter().enumerate() {
        let f = cdf(x);
        let below = (i as f64) / n;
        let above = ((i + 1) as f64) / n;
        result = result.max((f - below).abs()).max((above - f).abs());
    }
    result
}
