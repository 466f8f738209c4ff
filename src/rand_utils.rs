extern crate ndarray;

use ndarray::*;

use rand::prelude::*;
use rand::distributions::Uniform;
use rand::seq::SliceRandom;
use ndarray_rand::RandomExt;
use rand_distr::StandardNormal;

///Generates a vector of `dims` independent standard normal variates.
pub fn generate_standard_normal_random<R : Rng + ?Sized>(rng : &mut R, dims : usize) -> Array1<f64> {
    let as_vec : Vec<f64> = rng.sample_iter(StandardNormal).take(dims).collect();

    Array::from(as_vec)
}

///Generates a `count x dims` matrix of independent standard normal variates,
///one random direction per row (not yet normalized).
pub fn generate_standard_normal_rows<R : Rng + ?Sized>(rng : &mut R, count : usize, dims : usize) -> Array2<f64> {
    Array::random_using((count, dims), StandardNormal, rng)
}

///Generates a random vector on the unit `dims`-sphere.
pub fn generate_nsphere_random<R : Rng + ?Sized>(rng : &mut R, dims : usize) -> Array1<f64> {
    let mut vec = generate_standard_normal_random(rng, dims);
    let norm = vec.dot(&vec).sqrt();
    vec /= norm;
    vec
}

///Generates `len` indices in `0..bound`, each value appearing `len / bound` or
///`len / bound + 1` times, in shuffled order.
pub fn generate_shuffled_indices<R : Rng + ?Sized>(rng : &mut R, len : usize, bound : usize) -> Vec<usize> {
    if (bound == 0) {
        return Vec::new();
    }
    let mut result : Vec<usize> = (0..len).map(|i| i % bound).collect();
    result.shuffle(rng);
    result
}

///All of the randomness a chain consumes, generated up front so that the
///number of draws taken from the source does not depend on control flow.
///Lookups wrap around modulo the stream length, so a chain running for
///longer than the stream reuses earlier draws.
pub struct RandomDraws {
    pub uniforms : Array1<f64>,
    pub coord_indices : Vec<usize>,
    pub direction_indices : Vec<usize>
}

impl RandomDraws {
    pub fn generate<R : Rng + ?Sized>(rng : &mut R, len : usize, nvar : usize, ndir : usize) -> RandomDraws {
        let uniforms = Array::random_using((len,), Uniform::new(0.0f64, 1.0f64), rng);
        let coord_indices = generate_shuffled_indices(rng, len, nvar);
        let direction_indices = generate_shuffled_indices(rng, len, ndir);
        RandomDraws {
            uniforms,
            coord_indices,
            direction_indices
        }
    }

    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn uniform(&self, iter_count : usize) -> f64 {
        self.uniforms[[iter_count % self.len(),]]
    }

    pub fn coord_index(&self, iter_count : usize) -> usize {
        self.coord_indices[iter_count % self.coord_indices.len()]
    }

    pub fn direction_index(&self, iter_count : usize) -> usize {
        self.direction_indices[iter_count % self.direction_indices.len()]
    }
}
