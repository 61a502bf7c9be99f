use gerg_core::UniformSource;

/// Normal variate generator built on a cached Box–Muller pair.
///
/// The first call of every pair consumes two uniforms `u1`, `u2`, computes
/// `rho = sqrt(-2 ln(1 - u2))` and returns the cosine branch; the next call
/// returns the sine branch without touching the uniform source. A fresh
/// generator starts at the beginning of a pair.
#[derive(Debug, Clone)]
pub struct NormalPair {
    mean: f64,
    sigma: f64,
    u1: f64,
    rho: f64,
    cached: bool,
}

impl NormalPair {
    /// Creates a generator for `N(mean, sigma^2)` with an empty cache.
    pub fn new(mean: f64, sigma: f64) -> Self {
        Self {
            mean,
            sigma,
            u1: 0.0,
            rho: 0.0,
            cached: false,
        }
    }

    /// Returns `true` when the next draw will be served from the cache.
    pub fn has_cached(&self) -> bool {
        self.cached
    }

    /// Draws the next normal variate.
    pub fn sample<U: UniformSource + ?Sized>(&mut self, uniforms: &mut U) -> f64 {
        let angle = if self.cached {
            self.cached = false;
            (2.0 * std::f64::consts::PI * self.u1).sin()
        } else {
            self.u1 = uniforms.next_uniform();
            let u2 = uniforms.next_uniform();
            self.rho = (-2.0 * (1.0 - u2).ln()).sqrt();
            self.cached = true;
            (2.0 * std::f64::consts::PI * self.u1).cos()
        };
        self.rho * angle * self.sigma + self.mean
    }
}

// Matches the eight-digit constant the density has always been evaluated with.
const PDF_PI: f64 = 3.14159265;

/// Gaussian density at `x`.
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    (-(x - mu) * (x - mu) / (2.0 * sigma * sigma)).exp() / (sigma * (2.0 * PDF_PI).sqrt())
}

/// Gaussian cumulative distribution at `x`, built on [`approx_erf`].
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    0.5 * (1.0 + approx_erf((x - mu) / (sigma * std::f64::consts::SQRT_2)))
}

/// Abramowitz–Stegun 7.1.26 rational approximation of the error function.
///
/// The rational form is only valid for `x >= 0`; negative arguments use
/// `erf(-x) = -erf(x)`. Absolute error stays below `1.5e-7`.
pub fn approx_erf(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.3275911 * z);
    let poly = ((((1.061405429 * t - 1.453152027) * t + 1.421413741) * t - 0.284496736) * t
        + 0.254829592)
        * t;
    let value = 1.0 - poly * (-z * z).exp();
    if x < 0.0 {
        -value
    } else {
        value
    }
}
