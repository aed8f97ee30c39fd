use crate::models::PricingModel;
use crate::state::{ModelParams, OptionKind};
use statrs::distribution::{ContinuousCDF, Normal};

/// Black-Scholes pricing for European calls and puts.
///
/// call = S * Phi(d1) - K * e^(-rT) * Phi(d2)
/// put  = K * e^(-rT) * Phi(-d2) - S * Phi(-d1)
///
/// where d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T))
/// and   d2 = d1 - sigma * sqrt(T).
pub struct BlackScholes {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl BlackScholes {
    pub fn new() -> Self {
        Self { normal: Normal::standard() }
    }

    #[inline]
    fn call(&self, p: &ModelParams) -> f64 {
        p.spot * self.normal.cdf(p.d1) - p.strike * p.discount * self.normal.cdf(p.d2)
    }

    #[inline]
    fn put(&self, p: &ModelParams) -> f64 {
        p.strike * p.discount * self.normal.cdf(-p.d2) - p.spot * self.normal.cdf(-p.d1)
    }
}

impl PricingModel for BlackScholes {
    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    #[inline]
    fn price(&self, params: &ModelParams, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call(params),
            OptionKind::Put => self.put(params),
        }
    }
}
