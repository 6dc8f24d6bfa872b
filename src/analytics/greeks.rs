// src/analytics/greeks.rs
//! Named option sensitivities
//!
//! The five Greeks are reported under the fixed keys `Delta`, `Gamma`,
//! `Vega`, `Theta` and `Rho`, always iterated in that order.

use std::collections::BTreeMap;
use std::fmt;

/// One of the five first/second order Black-Scholes sensitivities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Greek {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// ∂V/∂σ
    Vega,
    /// Time decay
    Theta,
    /// ∂V/∂r
    Rho,
}

impl Greek {
    /// All Greeks in reporting order
    pub const ALL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    /// Key under which this Greek is reported
    pub fn name(self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Vega => "Vega",
            Greek::Theta => "Theta",
            Greek::Rho => "Rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five Greeks of a single evaluation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl Greeks {
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }

    /// `(name, value)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Greek::ALL.into_iter().map(move |g| (g.name(), self.get(g)))
    }

    /// Keyed lookup table of the five values
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter().collect()
    }
}
