use crate::errors::{PricerError, PricerResult};
use crate::state::{OptionKind, PricingRequest, SPOT_NOT_POSITIVE};

/// Raw urlencoded form fields, kept as text so the page can echo them back.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PriceForm {
    #[serde(rename = "S")]
    pub spot: Option<String>,
    #[serde(rename = "K")]
    pub strike: Option<String>,
    #[serde(rename = "T")]
    pub ttl_years: Option<String>,
    #[serde(rename = "r")]
    pub rate: Option<String>,
    pub sigma: Option<String>,
    pub option_type: Option<String>,
}

impl PriceForm {
    /// S is checked before anything else is parsed; an absent S counts as zero.
    pub fn to_request(&self) -> PricerResult<PricingRequest> {
        let spot = match self.spot.as_deref().map(str::trim) {
            None | Some("") => 0.0,
            raw => parse_field("S", raw)?,
        };
        if spot <= 0.0 {
            return Err(PricerError::InvalidInput(SPOT_NOT_POSITIVE.into()));
        }

        let request = PricingRequest {
            spot,
            strike: parse_field("K", self.strike.as_deref())?,
            ttl_years: parse_field("T", self.ttl_years.as_deref())?,
            rate: parse_field("r", self.rate.as_deref())?,
            sigma: parse_field("sigma", self.sigma.as_deref())?,
            kind: OptionKind::parse_or_default(self.option_type.as_deref())?,
        };
        request.validate()?;
        Ok(request)
    }

    /// Selected kind for re-rendering; falls back to call on garbage.
    pub fn kind(&self) -> OptionKind {
        OptionKind::parse_or_default(self.option_type.as_deref()).unwrap_or_default()
    }
}

fn parse_field(name: &str, raw: Option<&str>) -> PricerResult<f64> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(PricerError::InvalidInput(format!("{name} is required")));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PricerError::InvalidInput(format!("{name} must be a number, got {raw:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PriceForm {
        PriceForm {
            spot: Some("100".into()),
            strike: Some(" 100 ".into()),
            ttl_years: Some("1".into()),
            rate: Some("0.05".into()),
            sigma: Some("0.2".into()),
            option_type: None,
        }
    }

    #[test]
    fn test_missing_option_type_is_call() {
        let req = filled().to_request().unwrap();
        assert_eq!(req.kind, OptionKind::Call);
        assert_eq!(req.strike, 100.0);
    }

    #[test]
    fn test_put_selected() {
        let form = PriceForm { option_type: Some("put".into()), ..filled() };
        assert_eq!(form.to_request().unwrap().kind, OptionKind::Put);
    }

    #[test]
    fn test_unknown_option_type_rejected() {
        let form = PriceForm { option_type: Some("binary".into()), ..filled() };
        assert!(form.to_request().is_err());
        assert_eq!(form.kind(), OptionKind::Call);
    }

    #[test]
    fn test_missing_field_named() {
        let form = PriceForm { sigma: None, ..filled() };
        assert_eq!(form.to_request().unwrap_err().to_string(), "sigma is required");
    }

    #[test]
    fn test_non_numeric_and_non_finite_rejected() {
        let form = PriceForm { rate: Some("five".into()), ..filled() };
        assert!(form.to_request().unwrap_err().to_string().starts_with("r must be a number"));

        let form = PriceForm { ttl_years: Some("inf".into()), ..filled() };
        assert!(form.to_request().is_err());
    }

    #[test]
    fn test_spot_checked_before_other_fields() {
        let form = PriceForm { spot: Some("-3".into()), strike: Some("abc".into()), ..filled() };
        assert_eq!(form.to_request().unwrap_err().to_string(), SPOT_NOT_POSITIVE);

        let form = PriceForm { spot: None, sigma: None, ..filled() };
        assert_eq!(form.to_request().unwrap_err().to_string(), SPOT_NOT_POSITIVE);

        let form = PriceForm { spot: Some("abc".into()), ..filled() };
        assert!(form.to_request().unwrap_err().to_string().starts_with("S must be a number"));
    }

    #[test]
    fn test_zero_spot_rejected() {
        let form = PriceForm { spot: Some("0".into()), ..filled() };
        assert_eq!(
            form.to_request().unwrap_err().to_string(),
            "Stock price should be greater than 0"
        );
    }
}
