//! Stochastic oscillator (%K and %D) series.

/// Stochastic series aligned to the input bars.
#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
}

/// %K = (close - lowest low) / (highest high - lowest low) * 100 over the
/// `k_period` window; %D is an SMA(`d_period`) of %K. A flat window yields
/// %K = 50.
pub fn stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    k_period: usize,
    d_period: usize,
) -> StochasticSeries {
    let n = closes.len();
    let mut k = vec![None; n];
    let mut d = vec![None; n];
    if k_period == 0 || d_period == 0 || n < k_period {
        return StochasticSeries { k, d };
    }

    for i in (k_period - 1)..n {
        let window = i + 1 - k_period..=i;
        let lowest = lows[window.clone()].iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let highest = highs[window].iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        k[i] = Some(if highest != lowest {
            ((closes[i] - lowest) / (highest - lowest)) * 100.0
        } else {
            50.0
        });
    }

    // %D over the defined part of %K.
    let defined: Vec<f64> = k.iter().filter_map(|v| *v).collect();
    let offset = n - defined.len();
    for i in (d_period - 1)..defined.len() {
        let window = &defined[i + 1 - d_period..=i];
        d[offset + i] = Some(window.iter().sum::<f64>() / d_period as f64);
    }

    StochasticSeries { k, d }
}
