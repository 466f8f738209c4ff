use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

///Standard normal CDF, `P(Z <= x)`. Computed through `erfc` so that the
///lower tail keeps full relative precision.
pub fn ndtr(x : f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

///Standard normal quantile, the inverse of [`ndtr`].
///Accurate for small `p`; for `p` near one use [`ndtri_upper`] on `1 - p` instead.
pub fn ndtri(p : f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

///Standard normal survival function, `P(Z > x)`.
pub fn ndtr_upper(x : f64) -> f64 {
    0.5 * erfc(x / SQRT_2)
}

///Inverse of [`ndtr_upper`]: the `x` with `P(Z > x) = q`.
pub fn ndtri_upper(q : f64) -> f64 {
    SQRT_2 * erfc_inv(2.0 * q)
}

///Inverts the CDF of a standard normal restricted to `[lower, upper]` at `unif`.
///
///Intervals reaching into the negative half-line are inverted through the lower
///tail; intervals entirely in the positive half-line are mirrored and inverted through
///the upper tail, so neither case evaluates the CDF near one.
///When the interval carries no representable probability mass the draw comes from
///the exponential approximation to the far tail instead.
pub fn truncated_standard_normal_quantile(lower : f64, upper : f64, unif : f64) -> f64 {
    let result = if (lower < 0.0) {
        let cdf_lower = ndtr(lower);
        let cdf_upper = ndtr(upper);
        let p = unif * (cdf_upper - cdf_lower) + cdf_lower;
        if (p < 0.5) {
            ndtri(p)
        } else {
            ndtri_upper(1.0 - p)
        }
    } else {
        let sf_lower = ndtr_upper(lower);
        let sf_upper = ndtr_upper(upper);
        let q = unif * (sf_lower - sf_upper) + sf_upper;
        if (q < 0.5) {
            ndtri_upper(q)
        } else {
            ndtri(1.0 - q)
        }
    };

    if (result.is_finite()) {
        //Roundoff in the inversion can land a hair outside the interval
        clamp(result, lower, upper)
    } else {
        trace!("Tail mass underflow on [{}, {}], using exponential tail", lower, upper);
        exponential_tail_quantile(lower, upper, unif)
    }
}

///Far-tail approximation: beyond `|x| ~ 38` the normal density restricted to
///`[lower, upper]` is, to double precision, an exponential starting at the
///bound nearest zero with rate equal to that bound.
fn exponential_tail_quantile(lower : f64, upper : f64, unif : f64) -> f64 {
    if (lower >= 0.0) {
        shifted_exponential_quantile(lower, upper, unif)
    } else if (upper <= 0.0) {
        -shifted_exponential_quantile(-upper, -lower, 1.0 - unif)
    } else {
        //Straddles zero, so the mass cannot have underflowed; only roundoff lands here
        clamp(0.0, lower, upper)
    }
}

fn shifted_exponential_quantile(start : f64, end : f64, unif : f64) -> f64 {
    let rate = start.max(1.0);
    let width = end - start;
    let truncated_mass = -(-rate * width).exp_m1();
    let offset = -(-unif * truncated_mass).ln_1p() / rate;
    clamp(start + offset, start, end)
}

pub fn clamp(x : f64, lower : f64, upper : f64) -> f64 {
    x.max(lower).min(upper)
}
