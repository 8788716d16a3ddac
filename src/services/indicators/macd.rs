//! MACD line, signal line, and histogram series.

use super::ema::ema;

/// MACD series aligned to the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// MACD line = EMA(fast) - EMA(slow), signal = EMA of the MACD line,
/// histogram = MACD - signal. Each series carries `None` through its own
/// warm-up window.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    let n = closes.len();
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let mut macd_line = vec![None; n];
    for i in 0..n {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            macd_line[i] = Some(f - s);
        }
    }

    // The signal line is an EMA over the defined part of the MACD line.
    let defined: Vec<f64> = macd_line.iter().filter_map(|v| *v).collect();
    let offset = n - defined.len();
    let signal_defined = ema(&defined, signal_period);

    let mut signal = vec![None; n];
    for (j, value) in signal_defined.iter().enumerate() {
        signal[offset + j] = *value;
    }

    let mut histogram = vec![None; n];
    for i in 0..n {
        if let (Some(m), Some(s)) = (macd_line[i], signal[i]) {
            histogram[i] = Some(m - s);
        }
    }

    MacdSeries {
        macd: macd_line,
        signal,
        histogram,
    }
}
