//! Fractional-order Bessel-type series.
//!
//! All four functions share one truncated power-series kernel
//!
//! ```text
//! S(x, N) = sum_{k=0}^{N} (-1)^k x^(2k) coeff(k) / (4^k k! prod(1)...prod(k))
//! ```
//!
//! and differ only in the per-index `prod` and `coeff` factors and the power
//! of `x` in front. `y1_prime`/`y2_prime` come from their own series and are
//! not computed by differentiating `y1`/`y2`.

/// Sums terms `k = 0..=terms` of the kernel.
///
/// The `(-1)^k x^(2k) / (4^k k! prod(1)...prod(k))` part is carried from one
/// term to the next, so no factorial is ever formed explicitly.
pub fn series_sum<P, C>(x: f64, terms: usize, prod: P, coeff: C) -> f64
where
    P: Fn(usize) -> f64,
    C: Fn(usize) -> f64,
{
    let step = -x * x / 4.0;
    let mut base = 1.0;
    let mut sum = coeff(0);

    for k in 1..=terms {
        base *= step / (k as f64 * prod(k));
        sum += base * coeff(k);
    }

    sum
}

pub fn y1(x: f64, order: f64, terms: usize) -> f64 {
    x.powf(order) * series_sum(x, terms, |j| j as f64 + order, |_| 1.0)
}

pub fn y2(x: f64, order: f64, terms: usize) -> f64 {
    x.powf(-order) * series_sum(x, terms, |j| j as f64 - order, |_| 1.0)
}

pub fn y1_prime(x: f64, order: f64, terms: usize) -> f64 {
    x.powf(order - 1.0)
        * series_sum(
            x,
            terms,
            |j| j as f64 + order,
            |k| 2.0 * k as f64 + order,
        )
}

pub fn y2_prime(x: f64, order: f64, terms: usize) -> f64 {
    x.powf(-order - 1.0)
        * series_sum(
            x,
            terms,
            |j| j as f64 - order,
            |k| 2.0 * k as f64 - order,
        )
}
