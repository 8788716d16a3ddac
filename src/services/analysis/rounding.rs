//! Rounding conventions for emitted values.
//!
//! Price-scale values round to the nearest whole unit in signal and
//! recommendation text; structured price/score floats carry 2 dp;
//! MACD-scale values carry 4 dp; percentage and ratio values carry 2 dp.

/// Round to 2 decimal places (price and percent/ratio scale).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places (MACD scale).
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(101.256), 101.26);
        assert_eq!(round2(101.254), 101.25);
        assert_eq!(round2(-0.005), -0.01);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_456), 0.123_5);
        assert_eq!(round4(-0.000_04), -0.000_0);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for value in [101.25, -3.33, 0.0, 12345.0, 0.1234] {
            assert_eq!(round2(round2(value)), round2(value));
            assert_eq!(round4(round4(value)), round4(value));
        }
    }
}
