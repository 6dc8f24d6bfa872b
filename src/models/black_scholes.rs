// src/models/black_scholes.rs
//! Black-Scholes-Merton pricing model for a single European vanilla option
//!
//! # Model Parameters
//!
//! - S: spot price of the underlying
//! - K: strike price
//! - T: time to maturity in years
//! - r: continuously compounded risk-free rate (may be negative)
//! - σ: annualized volatility
//!
//! The model is an immutable value. `price` and `greeks` accept an optional
//! spot override so a range of underlying prices can be swept without
//! rebuilding the model.
//!
//! # Input Handling
//!
//! [`BlackScholesModel::new`] stores its inputs as given. Zero or negative
//! strike, maturity or volatility make the formulas undefined and the
//! resulting NaN/Inf is returned unchanged. [`BlackScholesModel::try_new`]
//! rejects such inputs up front.

use crate::analytics::bs_analytic;
use crate::analytics::Greeks;
use crate::error::{validation::*, PricingResult};
use crate::models::OptionType;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholesModel {
    spot: f64,       // Underlying asset price
    strike: f64,     // Strike price
    maturity: f64,   // Time to maturity (years)
    rate: f64,       // Risk-free rate (decimal)
    volatility: f64, // Volatility (decimal)
    option_type: OptionType,
}

impl BlackScholesModel {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        BlackScholesModel {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            option_type,
        }
    }

    /// Construct a model, rejecting inputs the closed form is undefined for
    pub fn try_new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        validate_positive("spot", spot)?;
        validate_positive("strike", strike)?;
        validate_positive("maturity", maturity)?;
        validate_finite("rate", rate)?;
        validate_positive("volatility", volatility)?;

        Ok(Self::new(spot, strike, maturity, rate, volatility, option_type))
    }

    /// Construct from an option type string, failing on anything but call/put
    pub fn from_type_str(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        option_type: &str,
    ) -> PricingResult<Self> {
        let option_type = option_type.parse()?;
        Ok(Self::new(spot, strike, maturity, rate, volatility, option_type))
    }

    /// Construct from an option type string where anything but "call" is a put
    pub fn lenient(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        option_type: &str,
    ) -> Self {
        Self::new(
            spot,
            strike,
            maturity,
            rate,
            volatility,
            OptionType::lenient(option_type),
        )
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    #[inline]
    fn spot_or(&self, spot: Option<f64>) -> f64 {
        spot.unwrap_or(self.spot)
    }

    /// The d₁/d₂ terms at the stored spot, or at `spot` when given
    pub fn d1_d2(&self, spot: Option<f64>) -> (f64, f64) {
        bs_analytic::d1_d2(
            self.spot_or(spot),
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }

    /// Fair value at the stored spot, or at `spot` when given
    pub fn price(&self, spot: Option<f64>) -> f64 {
        bs_analytic::bs_price(
            self.option_type,
            self.spot_or(spot),
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }

    /// Delta, Gamma, Vega, Theta and Rho at the stored spot, or at `spot`
    pub fn greeks(&self, spot: Option<f64>) -> Greeks {
        bs_analytic::bs_greeks(
            self.option_type,
            self.spot_or(spot),
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn sample(option_type: OptionType) -> BlackScholesModel {
        BlackScholesModel::new(100.0, 105.0, 1.0, 0.05, 0.2, option_type)
    }

    #[test]
    fn test_d1_d2_uses_override() {
        let model = sample(OptionType::Call);
        let (d1, d2) = model.d1_d2(None);
        assert!((d1 - 0.106049179153).abs() < 1e-10);
        assert!((d1 - d2 - 0.2).abs() < 1e-12);

        let (d1_at_k, _) = model.d1_d2(Some(105.0));
        // ln(1) = 0 leaves (r + σ²/2)T / σ√T
        assert!((d1_at_k - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_override_does_not_mutate() {
        let model = sample(OptionType::Put);
        let before = model.price(None);
        let _ = model.price(Some(80.0));
        let _ = model.greeks(Some(120.0));
        assert_eq!(model.spot(), 100.0);
        assert_eq!(model.price(None), before);
    }

    #[test]
    fn test_try_new_rejects_degenerate_inputs() {
        assert!(BlackScholesModel::try_new(100.0, 105.0, 1.0, 0.05, 0.2, OptionType::Call).is_ok());
        assert!(BlackScholesModel::try_new(100.0, 105.0, 1.0, -0.01, 0.2, OptionType::Call).is_ok());

        match BlackScholesModel::try_new(100.0, 105.0, 0.0, 0.05, 0.2, OptionType::Call) {
            Err(PricingError::InvalidParameters { parameter, .. }) => assert_eq!(parameter, "maturity"),
            other => panic!("expected maturity error, got {:?}", other),
        }
        assert!(BlackScholesModel::try_new(100.0, -1.0, 1.0, 0.05, 0.2, OptionType::Put).is_err());
        assert!(BlackScholesModel::try_new(100.0, 105.0, 1.0, 0.05, 0.0, OptionType::Put).is_err());
        assert!(BlackScholesModel::try_new(100.0, 105.0, 1.0, f64::NAN, 0.2, OptionType::Put).is_err());
    }

    #[test]
    fn test_string_constructors() {
        let strict = BlackScholesModel::from_type_str(100.0, 105.0, 1.0, 0.05, 0.2, "CALL").unwrap();
        assert_eq!(strict.option_type(), OptionType::Call);
        assert!(BlackScholesModel::from_type_str(100.0, 105.0, 1.0, 0.05, 0.2, "cal").is_err());

        let lenient = BlackScholesModel::lenient(100.0, 105.0, 1.0, 0.05, 0.2, "cal");
        assert_eq!(lenient.option_type(), OptionType::Put);
        assert_eq!(lenient.price(None), sample(OptionType::Put).price(None));
    }

    #[test]
    fn test_new_keeps_invalid_inputs() {
        let model = BlackScholesModel::new(100.0, 105.0, 0.0, 0.05, 0.2, OptionType::Call);
        assert_eq!(model.maturity(), 0.0);
        assert!(model.greeks(None).gamma.is_nan());
    }
}
