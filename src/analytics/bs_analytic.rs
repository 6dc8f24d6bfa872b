// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x) and its density φ(x).
//!
//! None of these functions validate their inputs. A zero maturity or
//! volatility divides by zero inside d₁, and a non-positive strike takes the
//! logarithm of a non-positive number; the resulting NaN/Inf flows through
//! to the caller untouched.

use super::greeks::Greeks;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::models::OptionType;

/// The d₁ and d₂ terms shared by the price and every Greek
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
#[inline]
pub fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Black-Scholes European option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// # Returns
/// Present value of the option
pub fn bs_price(option_type: OptionType, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    let discounted_strike = k * (-r * t).exp();
    match option_type {
        OptionType::Call => s * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1),
    }
}

/// Black-Scholes European call option price
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_price(OptionType::Call, s, k, r, sigma, t)
}

/// Black-Scholes European put option price
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_price(OptionType::Put, s, k, r, sigma, t)
}

/// All five Black-Scholes Greeks in one evaluation
///
/// φ(d₁), Φ(d₁) and Φ(d₂) are computed once and shared.
///
/// | Greek | Call                              | Put                                |
/// |-------|-----------------------------------|------------------------------------|
/// | Δ     | Φ(d₁)                             | Φ(d₁) - 1                          |
/// | Γ     | φ(d₁) / (S σ √T)                  | same                               |
/// | ν     | S φ(d₁) √T                        | same                               |
/// | Θ     | -S φ(d₁) σ/(2√T) - rK e^(-rT) Φ(d₂) | -S φ(d₁) σ/(2√T) + rK e^(-rT) Φ(-d₂) |
/// | ρ     | K T e^(-rT) Φ(d₂)                 | -K T e^(-rT) Φ(-d₂)                |
///
/// # Interpretation
/// - Delta: hedge ratio, in [0, 1] for calls and [-1, 0] for puts
/// - Gamma: convexity, maximal near the money, identical for calls and puts
/// - Vega: sensitivity to a unit change in σ, identical for calls and puts
/// - Theta: decay convention, i.e. the change in value as calendar time passes
/// - Rho: sensitivity to a unit change in r
pub fn bs_greeks(option_type: OptionType, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Greeks {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    let sqrt_t = t.sqrt();

    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);
    let cdf_d2 = norm_cdf(d2);

    let discounted_strike = k * (-r * t).exp();
    let time_decay = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);

    let gamma = pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * pdf_d1 * sqrt_t;

    let (delta, theta, rho) = match option_type {
        OptionType::Call => (
            cdf_d1,
            time_decay - r * discounted_strike * cdf_d2,
            t * discounted_strike * cdf_d2,
        ),
        OptionType::Put => {
            let cdf_minus_d2 = norm_cdf(-d2);
            (
                cdf_d1 - 1.0,
                time_decay + r * discounted_strike * cdf_minus_d2,
                -t * discounted_strike * cdf_minus_d2,
            )
        }
    };

    Greeks {
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// Black-Scholes Gamma (∂²V/∂S²), same for calls and puts
pub fn bs_gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, sigma, t);
    norm_pdf(d1) / (s * sigma * t.sqrt())
}

/// Black-Scholes Vega (∂V/∂σ), same for calls and puts
pub fn bs_vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, sigma, t);
    s * norm_pdf(d1) * t.sqrt()
}
