//! Average True Range series (Wilder smoothing).

/// TR = max(high - low, |high - prev close|, |low - prev close|).
fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// ATR over the bars, aligned to the input. True range needs a previous
/// close, so the first defined entry is at index `period`.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut true_ranges = Vec::with_capacity(n - 1);
    for i in 1..n {
        true_ranges.push(true_range(highs[i], lows[i], closes[i - 1]));
    }

    let mut atr: f64 = true_ranges.iter().take(period).sum::<f64>() / period as f64;
    out[period] = Some(atr);

    for i in period..true_ranges.len() {
        atr = (atr * (period - 1) as f64 + true_ranges[i]) / period as f64;
        out[i + 1] = Some(atr);
    }

    out
}
