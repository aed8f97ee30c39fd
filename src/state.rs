use crate::config::AppConfig;
use crate::errors::{PricerError, PricerResult};
use crate::models::black_scholes::BlackScholes;
use crate::models::PricingModel;
use portable_atomic::{AtomicU64, Ordering};
use std::str::FromStr;
use std::sync::Arc;

// ── Option Kind ──

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    #[default]
    Call,
    Put,
}

impl OptionKind {
    /// Parse an optional form/JSON value. Absent or blank means `Call`.
    pub fn parse_or_default(raw: Option<&str>) -> PricerResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(PricerError::InvalidInput(format!(
                "option_type must be call or put, got {other:?}"
            ))),
        }
    }
}

/// Same rules as the form field: trimmed, case-insensitive, null or blank means `Call`.
impl<'de> serde::Deserialize<'de> for OptionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_or_default(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

pub const SPOT_NOT_POSITIVE: &str = "Stock price should be greater than 0";

// ── Pricing Request (created per evaluation, then dropped) ──

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricingRequest {
    #[serde(rename = "S")]
    pub spot: f64,
    #[serde(rename = "K")]
    pub strike: f64,
    #[serde(rename = "T")]
    pub ttl_years: f64,
    #[serde(rename = "r")]
    pub rate: f64,
    pub sigma: f64,
    #[serde(rename = "option_type", default)]
    pub kind: OptionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Quote {
    #[serde(rename = "option_type")]
    pub kind: OptionKind,
    pub price: f64,
}

impl PricingRequest {
    /// S, K, T and sigma must be finite and strictly positive. r only has to be finite.
    pub fn validate(&self) -> PricerResult<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricerError::InvalidInput(SPOT_NOT_POSITIVE.into()));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricerError::InvalidInput(
                "Strike price should be greater than 0".into(),
            ));
        }
        if !self.ttl_years.is_finite() || self.ttl_years <= 0.0 {
            return Err(PricerError::InvalidInput(
                "Time to expiry should be greater than 0".into(),
            ));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(PricerError::InvalidInput(
                "Volatility should be greater than 0".into(),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricerError::InvalidInput(
                "Risk-free rate should be a finite number".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn params(&self) -> ModelParams {
        ModelParams::new(self.spot, self.strike, self.ttl_years, self.rate, self.sigma)
    }

    /// Validate, price with `model`, and reject a non-finite result.
    pub fn evaluate(&self, model: &dyn PricingModel) -> PricerResult<Quote> {
        self.validate()?;
        let price = model.price(&self.params(), self.kind);
        if !price.is_finite() {
            return Err(PricerError::Model(format!(
                "{} produced a non-finite {} price",
                model.name(),
                self.kind
            )));
        }
        Ok(Quote { kind: self.kind, price })
    }
}

// ── Precomputed Model Parameters ──

/// Per-evaluation quantities shared by the call and put legs.
/// Built without validation: degenerate inputs give IEEE-754 results, not errors.
#[derive(Debug, Clone, Copy)]
pub struct ModelParams {
    pub spot: f64,
    pub strike: f64,
    // Precomputed
    pub discount: f64,
    pub d1: f64,
    pub d2: f64,
}

impl ModelParams {
    #[inline]
    pub fn new(spot: f64, strike: f64, ttl_years: f64, rate: f64, sigma: f64) -> Self {
        let ln_s_k = (spot / strike).ln();
        let sigma_sqrt_t = sigma * ttl_years.sqrt();
        let d1 = (ln_s_k + (rate + 0.5 * sigma * sigma) * ttl_years) / sigma_sqrt_t;
        Self {
            spot,
            strike,
            discount: (-rate * ttl_years).exp(),
            d1,
            d2: d1 - sigma_sqrt_t,
        }
    }
}

// ── Performance Counters (lock-free) ──

#[derive(Debug)]
pub struct PerfCounters {
    pub pages_served: AtomicU64,
    pub quotes_priced: AtomicU64,
    pub inputs_rejected: AtomicU64,
    pub model_failures: AtomicU64,
}

impl PerfCounters {
    pub fn new() -> Self {
        Self {
            pages_served: AtomicU64::new(0),
            quotes_priced: AtomicU64::new(0),
            inputs_rejected: AtomicU64::new(0),
            model_failures: AtomicU64::new(0),
        }
    }

    /// Count the outcome of one evaluation.
    pub fn record(&self, outcome: &PricerResult<Quote>) {
        let counter = match outcome {
            Ok(_) => &self.quotes_priced,
            Err(PricerError::Model(_)) => &self.model_failures,
            Err(_) => &self.inputs_rejected,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            pages_served: self.pages_served.load(Ordering::Relaxed),
            quotes_priced: self.quotes_priced.load(Ordering::Relaxed),
            inputs_rejected: self.inputs_rejected.load(Ordering::Relaxed),
            model_failures: self.model_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CountersSnapshot {
    pub pages_served: u64,
    pub quotes_priced: u64,
    pub inputs_rejected: u64,
    pub model_failures: u64,
}

// ── Shared Application State ──

pub struct AppState {
    pub config: AppConfig,
    pub model: BlackScholes,
    pub counters: PerfCounters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            model: BlackScholes::new(),
            counters: PerfCounters::new(),
        })
    }

    /// Price an already-parsed request with the shared model, then count and log the outcome.
    pub fn quote(&self, request: PricerResult<PricingRequest>) -> PricerResult<Quote> {
        let outcome = request.and_then(|req| req.evaluate(&self.model));
        self.counters.record(&outcome);
        match &outcome {
            Ok(q) => tracing::info!(kind = %q.kind, price = q.price, "option priced"),
            Err(PricerError::Model(e)) => tracing::error!("pricing failed: {e}"),
            Err(e) => tracing::warn!("input rejected: {e}"),
        }
        outcome
    }
}
