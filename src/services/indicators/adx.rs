//! Average Directional Index series with +DI/-DI (Wilder smoothing).

/// ADX series aligned to the input bars.
#[derive(Debug, Clone)]
pub struct AdxSeries {
    pub adx: Vec<Option<f64>>,
    pub plus_di: Vec<Option<f64>>,
    pub minus_di: Vec<Option<f64>>,
}

/// Wilder's smoothing aligned to the input: the first defined entry is the
/// plain average of the first `period` values.
fn wilder_smooth(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut smoothed: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    out[period - 1] = Some(smoothed);
    for i in period..values.len() {
        smoothed = (smoothed * (period - 1) as f64 + values[i]) / period as f64;
        out[i] = Some(smoothed);
    }

    out
}

/// Directional movement and ADX. +DI/-DI become defined at bar `period`,
/// ADX after a second smoothing pass at bar `2 * period - 1`.
pub fn adx(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> AdxSeries {
    let n = closes.len();
    let mut series = AdxSeries {
        adx: vec![None; n],
        plus_di: vec![None; n],
        minus_di: vec![None; n],
    };
    if period == 0 || n < period + 1 {
        return series;
    }

    // One entry per bar-to-bar change: change c describes bar c + 1.
    let mut plus_dm = Vec::with_capacity(n - 1);
    let mut minus_dm = Vec::with_capacity(n - 1);
    let mut tr = Vec::with_capacity(n - 1);

    for i in 1..n {
        let up_move = highs[i] - highs[i - 1];
        let down_move = lows[i - 1] - lows[i];

        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });

        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        tr.push(hl.max(hc).max(lc));
    }

    let smoothed_plus = wilder_smooth(&plus_dm, period);
    let smoothed_minus = wilder_smooth(&minus_dm, period);
    let smoothed_tr = wilder_smooth(&tr, period);

    let mut dx = Vec::new();
    for c in (period - 1)..tr.len() {
        let (sp, sm, st) = match (smoothed_plus[c], smoothed_minus[c], smoothed_tr[c]) {
            (Some(sp), Some(sm), Some(st)) => (sp, sm, st),
            _ => continue,
        };

        let (plus_di, minus_di) = if st > 0.0 {
            ((sp / st) * 100.0, (sm / st) * 100.0)
        } else {
            (0.0, 0.0)
        };
        series.plus_di[c + 1] = Some(plus_di);
        series.minus_di[c + 1] = Some(minus_di);

        let di_sum = plus_di + minus_di;
        dx.push(if di_sum > 0.0 {
            ((plus_di - minus_di).abs() / di_sum) * 100.0
        } else {
            0.0
        });
    }

    // dx[j] corresponds to change index (period - 1) + j, i.e. bar period + j.
    let smoothed_dx = wilder_smooth(&dx, period);
    for (j, value) in smoothed_dx.iter().enumerate() {
        if value.is_some() {
            series.adx[period + j] = *value;
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let highs = (0..count).map(|i| 102.0 + i as f64 * 1.5).collect();
        let lows = (0..count).map(|i| 99.0 + i as f64 * 1.5).collect();
        let closes = (0..count).map(|i| 101.0 + i as f64 * 1.5).collect();
        (highs, lows, closes)
    }

    #[test]
    fn test_adx_warmup_offsets() {
        let (h, l, c) = uptrend(40);
        let series = adx(&h, &l, &c, 14);
        assert!(series.plus_di[..14].iter().all(Option::is_none));
        assert!(series.plus_di[14].is_some());
        assert!(series.adx[..27].iter().all(Option::is_none));
        assert!(series.adx[27].is_some());
    }

    #[test]
    fn test_adx_uptrend_favors_plus_di() {
        let (h, l, c) = uptrend(40);
        let series = adx(&h, &l, &c, 14);
        let plus = series.plus_di.last().unwrap().unwrap();
        let minus = series.minus_di.last().unwrap().unwrap();
        assert!(plus > minus, "+DI {} should exceed -DI {}", plus, minus);
    }

    #[test]
    fn test_adx_steady_uptrend_is_strong() {
        let (h, l, c) = uptrend(60);
        let series = adx(&h, &l, &c, 14);
        let value = series.adx.last().unwrap().unwrap();
        assert!(value > 25.0, "one-way trend should read strong, got {}", value);
        assert!(value <= 100.0);
    }

    #[test]
    fn test_adx_insufficient_data() {
        let (h, l, c) = uptrend(10);
        let series = adx(&h, &l, &c, 14);
        assert!(series.adx.iter().all(Option::is_none));
        assert!(series.plus_di.iter().all(Option::is_none));
    }
}
