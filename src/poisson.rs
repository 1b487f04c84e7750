//! Poisson density curve sampling
//!
//! The probability of observing exactly `n` events by time `t` under a Poisson
//! process with rate `rate`: `(rate*t)^n * e^(-rate*t) / n!`. Curve sampling
//! matches the companion plotting script: evenly spaced `t` values from zero,
//! exclusive of `t_max`.

/// `n!` as an f64; exact for the small `n` these curves use
fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Poisson probability of exactly `n` events by time `t` at the given rate
pub fn density(t: f64, rate: f64, n: u32) -> f64 {
    (rate * t).powi(n as i32) / factorial(n) * (-rate * t).exp()
}

/// Sample the density over `[0, t_max)` at `samples` evenly spaced points
pub fn density_curve(rate: f64, n: u32, t_max: f64, samples: usize) -> Vec<(f64, f64)> {
    let step = t_max / samples as f64;
    (0..samples)
        .map(|i| {
            let t = i as f64 * step;
            (t, density(t, rate, n))
        })
        .collect()
}
