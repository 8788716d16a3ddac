//! On-Balance Volume series.

/// Cumulative OBV: volume is added on up-closes and subtracted on
/// down-closes. Defined from the first bar, which starts the tally at zero.
pub fn obv(closes: &[f64], volumes: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(closes.len());
    let mut running = 0.0;

    for i in 0..closes.len() {
        if i > 0 {
            if closes[i] > closes[i - 1] {
                running += volumes[i];
            } else if closes[i] < closes[i - 1] {
                running -= volumes[i];
            }
        }
        out.push(Some(running));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obv_accumulates_on_up_closes() {
        let closes = vec![100.0, 101.0, 102.0];
        let volumes = vec![10.0, 20.0, 30.0];
        let out = obv(&closes, &volumes);
        assert_eq!(out, vec![Some(0.0), Some(20.0), Some(50.0)]);
    }

    #[test]
    fn test_obv_distributes_on_down_closes() {
        let closes = vec![100.0, 99.0, 98.0];
        let volumes = vec![10.0, 20.0, 30.0];
        let out = obv(&closes, &volumes);
        assert_eq!(out, vec![Some(0.0), Some(-20.0), Some(-50.0)]);
    }

    #[test]
    fn test_obv_flat_close_ignores_volume() {
        let closes = vec![100.0, 100.0];
        let volumes = vec![10.0, 500.0];
        let out = obv(&closes, &volumes);
        assert_eq!(out[1], Some(0.0));
    }
}
