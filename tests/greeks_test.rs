// tests/greeks_test.rs
use bsm_greeks::analytics::bs_analytic;
use bsm_greeks::models::{BlackScholesModel, OptionType};

const S: f64 = 100.0;
const K: f64 = 105.0;
const T: f64 = 1.0;
const R: f64 = 0.05;
const SIGMA: f64 = 0.2;

fn model(option_type: OptionType) -> BlackScholesModel {
    BlackScholesModel::new(S, K, T, R, SIGMA, option_type)
}

#[test]
fn test_call_greeks_reference() {
    let g = model(OptionType::Call).greeks(None);

    println!("\nCall Greeks: {:?}", g);

    assert!((g.delta - 0.542228333585).abs() < 1e-9, "Delta: {}", g.delta);
    assert!((g.gamma - 0.019835261904).abs() < 1e-9, "Gamma: {}", g.gamma);
    assert!((g.vega - 39.670523808427).abs() < 1e-8, "Vega: {}", g.vega);
    assert!((g.theta + 6.277126437010).abs() < 1e-8, "Theta: {}", g.theta);
    assert!((g.rho - 46.201481123337).abs() < 1e-8, "Rho: {}", g.rho);
}

#[test]
fn test_put_greeks_reference() {
    let g = model(OptionType::Put).greeks(None);

    println!("\nPut Greeks: {:?}", g);

    assert!((g.delta + 0.457771666415).abs() < 1e-9, "Delta: {}", g.delta);
    assert!((g.gamma - 0.019835261904).abs() < 1e-9, "Gamma: {}", g.gamma);
    assert!((g.vega - 39.670523808427).abs() < 1e-8, "Vega: {}", g.vega);
    assert!((g.theta + 1.283171958381).abs() < 1e-8, "Theta: {}", g.theta);
    assert!((g.rho + 53.677608449238).abs() < 1e-8, "Rho: {}", g.rho);
}

#[test]
fn test_greeks_mapping_keys() {
    let g = model(OptionType::Call).greeks(None);
    let keys: Vec<&str> = g.iter().map(|(name, _)| name).collect();
    assert_eq!(keys, ["Delta", "Gamma", "Vega", "Theta", "Rho"]);

    let map = g.to_map();
    assert_eq!(map["Delta"], g.delta);
    assert_eq!(map["Rho"], g.rho);
}

#[test]
fn test_gamma_vega_identical_for_call_and_put() {
    for &spot in &[60.0, 95.0, 105.0, 140.0] {
        let call = model(OptionType::Call).greeks(Some(spot));
        let put = model(OptionType::Put).greeks(Some(spot));
        assert_eq!(call.gamma, put.gamma, "Gamma differs at S={}", spot);
        assert_eq!(call.vega, put.vega, "Vega differs at S={}", spot);
    }
}

#[test]
fn test_delta_gamma_vs_finite_difference() {
    let h = 0.01;
    for option_type in [OptionType::Call, OptionType::Put] {
        let m = model(option_type);
        let g = m.greeks(None);

        let up = m.price(Some(S + h));
        let mid = m.price(None);
        let down = m.price(Some(S - h));

        let fd_delta = (up - down) / (2.0 * h);
        let fd_gamma = (up - 2.0 * mid + down) / (h * h);

        println!(
            "\n{} Delta: analytic {} / fd {}; Gamma: analytic {} / fd {}",
            option_type, g.delta, fd_delta, g.gamma, fd_gamma
        );

        assert!((g.delta - fd_delta).abs() < 1e-6, "Delta mismatch for {}", option_type);
        assert!((g.gamma - fd_gamma).abs() < 1e-5, "Gamma mismatch for {}", option_type);
    }
}

#[test]
fn test_vega_rho_theta_vs_finite_difference() {
    let h = 1e-4;
    for option_type in [OptionType::Call, OptionType::Put] {
        let g = model(option_type).greeks(None);
        let price = |k: f64, t: f64, r: f64, sigma: f64| {
            bs_analytic::bs_price(option_type, S, k, r, sigma, t)
        };

        let fd_vega = (price(K, T, R, SIGMA + h) - price(K, T, R, SIGMA - h)) / (2.0 * h);
        let fd_rho = (price(K, T, R + h, SIGMA) - price(K, T, R - h, SIGMA)) / (2.0 * h);
        // decay convention: value lost as time to maturity shrinks
        let fd_theta = (price(K, T - h, R, SIGMA) - price(K, T + h, R, SIGMA)) / (2.0 * h);

        println!(
            "\n{} Vega {} / {}; Rho {} / {}; Theta {} / {}",
            option_type, g.vega, fd_vega, g.rho, fd_rho, g.theta, fd_theta
        );

        assert!((g.vega - fd_vega).abs() < 1e-4, "Vega mismatch for {}", option_type);
        assert!((g.rho - fd_rho).abs() < 1e-4, "Rho mismatch for {}", option_type);
        assert!((g.theta - fd_theta).abs() < 1e-4, "Theta mismatch for {}", option_type);
    }
}

#[test]
fn test_atm_zero_rate_regression() {
    // S = K, r = 0: d1 = σ√T/2 = -d2, call = K(2Φ(d1) - 1)
    let m = BlackScholesModel::new(100.0, 100.0, 1.0, 0.0, 0.2, OptionType::Call);
    let (d1, d2) = m.d1_d2(None);
    assert!((d1 - 0.1).abs() < 1e-12);
    assert!((d1 + d2).abs() < 1e-12);

    let identity = 100.0 * (2.0 * bsm_greeks::math_utils::norm_cdf(d1) - 1.0);
    let price = m.price(None);
    assert!((price - identity).abs() < 1e-10);
    assert!((price - 7.965567455406).abs() < 1e-8);

    let g = m.greeks(None);
    // r = 0 leaves only the diffusion part of theta
    assert!((g.theta + 3.969525474770).abs() < 1e-8);
}
