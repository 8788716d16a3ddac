//! Bollinger Bands series.

/// Band series aligned to the input closes.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
    pub width: Vec<Option<f64>>,
}

/// Middle band = SMA(`period`), upper/lower = middle +/- `mult` standard
/// deviations (population), width = upper - lower.
pub fn bollinger(closes: &[f64], period: usize, mult: f64) -> BollingerSeries {
    let n = closes.len();
    let mut series = BollingerSeries {
        upper: vec![None; n],
        middle: vec![None; n],
        lower: vec![None; n],
        width: vec![None; n],
    };
    if period == 0 || n < period {
        return series;
    }

    for i in (period - 1)..n {
        let window = &closes[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance =
            window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();

        let upper = mean + mult * std_dev;
        let lower = mean - mult * std_dev;
        series.middle[i] = Some(mean);
        series.upper[i] = Some(upper);
        series.lower[i] = Some(lower);
        series.width[i] = Some(upper - lower);
    }

    series
}
