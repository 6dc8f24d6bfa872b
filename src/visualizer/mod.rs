// src/visualizer/mod.rs
//! Spot-price sweeps of a pricing model
//!
//! Evaluates `price` and `greeks` of a [`BlackScholesModel`] over a range of
//! underlying prices and lays the results out as six charts (price and the
//! five Greeks against spot) in a 2×3 grid. Nothing here recomputes a
//! pricing formula; every value comes from the model's two queries.
//!
//! Each spot is independent, so the sweep runs on the rayon pool and
//! collects results back in input order.

pub mod svg;

use crate::analytics::{Greek, Greeks};
use crate::error::{validation::*, PricingResult};
use crate::models::BlackScholesModel;
use bitflags::bitflags;
use rayon::prelude::*;

pub use svg::{render_svg, save_svg};

bitflags! {
    /// Selection of charts to draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Panels: u32 {
        const NONE  = 0;
        const PRICE = 1 << 0;
        const DELTA = 1 << 1;
        const GAMMA = 1 << 2;
        const VEGA  = 1 << 3;
        const THETA = 1 << 4;
        const RHO   = 1 << 5;
        const ALL   = Self::PRICE.bits()
            | Self::DELTA.bits()
            | Self::GAMMA.bits()
            | Self::VEGA.bits()
            | Self::THETA.bits()
            | Self::RHO.bits();
    }
}

/// One chart of the analysis grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Price,
    Greek(Greek),
}

impl Panel {
    /// Grid order: row-major over a 2×3 layout
    pub const ALL: [Panel; 6] = [
        Panel::Price,
        Panel::Greek(Greek::Delta),
        Panel::Greek(Greek::Gamma),
        Panel::Greek(Greek::Vega),
        Panel::Greek(Greek::Theta),
        Panel::Greek(Greek::Rho),
    ];

    pub const ROWS: usize = 2;
    pub const COLS: usize = 3;

    pub fn title(self) -> &'static str {
        match self {
            Panel::Price => "Option Price vs Underlying",
            Panel::Greek(Greek::Delta) => "Delta (Sensitivity to Price)",
            Panel::Greek(Greek::Gamma) => "Gamma (Stability of Delta)",
            Panel::Greek(Greek::Vega) => "Vega (Sensitivity to Volatility)",
            Panel::Greek(Greek::Theta) => "Theta (Time Decay)",
            Panel::Greek(Greek::Rho) => "Rho (Interest Rate Sensitivity)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Panel::Price => "blue",
            Panel::Greek(Greek::Delta) => "green",
            Panel::Greek(Greek::Gamma) => "red",
            Panel::Greek(Greek::Vega) => "purple",
            Panel::Greek(Greek::Theta) => "orange",
            Panel::Greek(Greek::Rho) => "brown",
        }
    }

    pub fn flag(self) -> Panels {
        match self {
            Panel::Price => Panels::PRICE,
            Panel::Greek(Greek::Delta) => Panels::DELTA,
            Panel::Greek(Greek::Gamma) => Panels::GAMMA,
            Panel::Greek(Greek::Vega) => Panels::VEGA,
            Panel::Greek(Greek::Theta) => Panels::THETA,
            Panel::Greek(Greek::Rho) => Panels::RHO,
        }
    }

    /// `(row, col)` of this panel in the grid
    pub fn position(self) -> (usize, usize) {
        let index = Panel::ALL
            .iter()
            .position(|&p| p == self)
            .unwrap_or_default();
        (index / Self::COLS, index % Self::COLS)
    }
}

/// Range of spot prices to sweep and the charts to draw
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub points: usize,
    pub panels: Panels,
}

impl SweepConfig {
    pub fn validate(&self) -> PricingResult<()> {
        validate_range(self.start, self.end)?;
        validate_points(self.points)?;
        Ok(())
    }

    /// `points` evenly spaced spots from `start` to `end`, both inclusive
    pub fn spots(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.end
                        } else {
                            self.start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            start: 50.0,
            end: 150.0,
            points: 101,
            panels: Panels::ALL,
        }
    }
}

/// Price and Greeks of one model across a sweep of spot prices
#[derive(Clone, Debug)]
pub struct Analysis {
    pub model: BlackScholesModel,
    pub spots: Vec<f64>,
    pub prices: Vec<f64>,
    pub greeks: Vec<Greeks>,
}

impl Analysis {
    pub fn title(&self) -> String {
        format!(
            "Black-Scholes Analysis: {} Option",
            self.model.option_type().label()
        )
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// y-values of one chart, aligned with `spots`
    pub fn series(&self, panel: Panel) -> Vec<f64> {
        match panel {
            Panel::Price => self.prices.clone(),
            Panel::Greek(greek) => self.greeks.iter().map(|g| g.get(greek)).collect(),
        }
    }
}

/// Evaluate the model at every spot, in parallel, preserving order
pub fn analyze(model: &BlackScholesModel, spots: &[f64]) -> Analysis {
    let (prices, greeks): (Vec<f64>, Vec<Greeks>) = spots
        .par_iter()
        .map(|&s| (model.price(Some(s)), model.greeks(Some(s))))
        .unzip();

    let non_finite = prices.iter().filter(|p| !p.is_finite()).count();
    tracing::debug!(
        points = spots.len(),
        non_finite,
        option_type = %model.option_type(),
        "spot sweep evaluated"
    );

    Analysis {
        model: *model,
        spots: spots.to_vec(),
        prices,
        greeks,
    }
}

/// Sequential counterpart of [`analyze`]
pub fn analyze_sequential(model: &BlackScholesModel, spots: &[f64]) -> Analysis {
    let (prices, greeks): (Vec<f64>, Vec<Greeks>) = spots
        .iter()
        .map(|&s| (model.price(Some(s)), model.greeks(Some(s))))
        .unzip();

    Analysis {
        model: *model,
        spots: spots.to_vec(),
        prices,
        greeks,
    }
}

/// Validate the sweep configuration and analyze the model over it
pub fn plot_analysis(model: &BlackScholesModel, cfg: &SweepConfig) -> PricingResult<Analysis> {
    cfg.validate()?;
    Ok(analyze(model, &cfg.spots()))
}
