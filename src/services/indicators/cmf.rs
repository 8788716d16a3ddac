//! Chaikin Money Flow series.

/// CMF = sum(money-flow volume) / sum(volume) over the window, where the
/// money-flow multiplier is ((close - low) - (high - close)) / (high - low).
/// A flat bar contributes zero; a window with no volume stays undefined.
pub fn cmf(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    volumes: &[f64],
    period: usize,
) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if period == 0 || n < period {
        return out;
    }

    let mfv: Vec<f64> = (0..n)
        .map(|i| {
            let range = highs[i] - lows[i];
            if range > 0.0 {
                let multiplier = ((closes[i] - lows[i]) - (highs[i] - closes[i])) / range;
                multiplier * volumes[i]
            } else {
                0.0
            }
        })
        .collect();

    for i in (period - 1)..n {
        let window = i + 1 - period..=i;
        let volume_sum: f64 = volumes[window.clone()].iter().sum();
        if volume_sum > 0.0 {
            let flow_sum: f64 = mfv[window].iter().sum();
            out[i] = Some(flow_sum / volume_sum);
        }
    }

    out
}
