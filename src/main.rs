#![allow(non_snake_case)]
#![allow(unused_parens)]

extern crate ndarray;
extern crate pretty_env_logger;
#[macro_use] extern crate log;

use ndarray::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::process;

use polytope_gibbs::constraint_system::*;
use polytope_gibbs::sampler_error::*;
use polytope_gibbs::sampler_params::*;
use polytope_gibbs::samplers::*;

fn column_means(samples : &Array2<f64>) -> Option<Array1<f64>> {
    samples.mean_axis(Axis(0))
}

///The triangle `x_0 >= -0.5, x_1 >= -0.5, x_0 + x_1 <= 1` in the plane.
fn triangle() -> Result<ConstraintSystem, SamplerError> {
    let a = array![[-1.0, 0.0],
                   [0.0, -1.0],
                   [1.0, 1.0]];
    let b = array![0.5, 0.5, 1.0];
    let bias = array![1.0, 1.0];
    ConstraintSystem::new(a, b, bias)
}

fn run() -> Result<(), SamplerError> {
    let seed = 1234;
    let mut rng = StdRng::seed_from_u64(seed);

    let constraints = triangle()?;
    let initial = array![0.25, 0.25];
    let params = SamplerParams::default()
                 .with_burnin(500)
                 .with_ndraw(5000)
                 .with_how_often(100)
                 .with_max_iterations(1_000_000);

    info!("Sampling a truncated normal");
    let gaussian = sample_truncated_normal(&constraints, initial.view(), &params, &mut rng)?;
    if let Option::Some(mean) = column_means(&gaussian) {
        info!("Truncated normal mean: {}", mean);
    }

    info!("Sampling uniformly in the ball of radius {}", initial.dot(&initial).sqrt());
    let ball = sample_uniform_in_ball(&constraints, initial.view(), &params, &mut rng)?;
    if let Option::Some(mean) = column_means(&ball) {
        info!("Ball mean: {}", mean);
    }

    info!("Sampling uniformly on the sphere of radius {}", initial.dot(&initial).sqrt());
    let sphere = sample_uniform_on_sphere(&constraints, initial.view(), &params, &mut rng)?;
    info!("Sphere acceptance rate: {}", sphere.acceptance_rate());
    if let Option::Some(mean) = sphere.weighted_mean() {
        info!("Sphere weighted mean: {}", mean);
    }
    Result::Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Result::Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
