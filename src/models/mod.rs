pub mod black_scholes;

use crate::state::{ModelParams, OptionKind};

/// All pricing models implement this trait.
/// price() must be a pure function: deterministic output from inputs only.
/// Send + Sync required for sharing across request handlers.
pub trait PricingModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Theoretical price of a European option of `kind`.
    /// Does not validate: out-of-domain params yield NaN or infinities.
    fn price(&self, params: &ModelParams, kind: OptionKind) -> f64;
}

/// Black-Scholes price for the five scalar inputs.
pub fn price(s: f64, k: f64, t: f64, r: f64, sigma: f64, kind: OptionKind) -> f64 {
    black_scholes::BlackScholes::new().price(&ModelParams::new(s, k, t, r, sigma), kind)
}

#[inline]
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    price(s, k, t, r, sigma, OptionKind::Call)
}

#[inline]
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    price(s, k, t, r, sigma, OptionKind::Put)
}
