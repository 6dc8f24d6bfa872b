//! # bsm-greeks: Black-Scholes-Merton Pricing and Greeks
//!
//! Closed-form valuation of European vanilla options under the
//! Black-Scholes-Merton model, together with the five first/second order
//! sensitivities and tooling to sweep them across a range of spot prices.
//!
//! ## Key Features
//!
//! - **Closed Form**: Price, Delta, Gamma, Vega, Theta and Rho for calls and puts
//! - **Spot Overrides**: Evaluate an immutable model at any spot without rebuilding it
//! - **Parallel Sweeps**: Spot ranges evaluated on the Rayon pool, order preserved
//! - **Charts and CSV**: 2×3 SVG chart grid and CSV export of a sweep
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_greeks::models::{BlackScholesModel, OptionType};
//!
//! // Spot=100, Strike=105, 1 year, 5% rate, 20% vol
//! let model = BlackScholesModel::new(100.0, 105.0, 1.0, 0.05, 0.2, OptionType::Call);
//!
//! let price = model.price(None);
//! let greeks = model.greeks(None);
//! assert!((price - 8.0214).abs() < 1e-3);
//! assert!((greeks.delta - 0.5422).abs() < 1e-3);
//!
//! // Same model, different underlying price
//! let itm = model.price(Some(120.0));
//! assert!(itm > price);
//! ```
//!
//! ## Degenerate Inputs
//!
//! The pricing queries never fail. Zero maturity or volatility and
//! non-positive strikes produce NaN or infinite results that are returned
//! as-is; use [`models::BlackScholesModel::try_new`] to reject them at
//! construction instead.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod models;
pub mod visualizer;
pub mod output;

// Re-export commonly used types for convenience
pub use analytics::{Greek, Greeks};
pub use error::{PricingError, PricingResult};
pub use models::{BlackScholesModel, OptionType};
