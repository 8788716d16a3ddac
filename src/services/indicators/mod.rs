//! Per-bar indicator table.
//!
//! Builds the annotated bar sequence the scoring engine consumes. Every
//! series is aligned to the input bars and stays `None` through its own
//! warm-up window.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod cmf;
pub mod ema;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod sma;
pub mod stochastic;

use crate::types::{AnnotatedBar, Bar, IndicatorSnapshot};

const SMA_SHORT: usize = 20;
const SMA_MEDIUM: usize = 50;
const SMA_LONG: usize = 200;
const EMA_FAST: usize = 12;
const EMA_SLOW: usize = 26;
const RSI_PERIOD: usize = 14;
const MACD_SIGNAL: usize = 9;
const STOCH_K: usize = 14;
const STOCH_D: usize = 3;
const BOLLINGER_PERIOD: usize = 20;
const BOLLINGER_MULT: f64 = 2.0;
const ATR_PERIOD: usize = 14;
const VOLUME_WINDOW: usize = 20;
const CMF_PERIOD: usize = 20;
const ADX_PERIOD: usize = 14;

/// Annotate `bars` with the full indicator table.
pub fn build_table(bars: &[Bar]) -> Vec<AnnotatedBar> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let sma20 = sma::sma(&closes, SMA_SHORT);
    let sma50 = sma::sma(&closes, SMA_MEDIUM);
    let sma200 = sma::sma(&closes, SMA_LONG);
    let ema12 = ema::ema(&closes, EMA_FAST);
    let ema26 = ema::ema(&closes, EMA_SLOW);
    let rsi14 = rsi::rsi(&closes, RSI_PERIOD);
    let macd = macd::macd(&closes, EMA_FAST, EMA_SLOW, MACD_SIGNAL);
    let stoch = stochastic::stochastic(&highs, &lows, &closes, STOCH_K, STOCH_D);
    let bb = bollinger::bollinger(&closes, BOLLINGER_PERIOD, BOLLINGER_MULT);
    let atr14 = atr::atr(&highs, &lows, &closes, ATR_PERIOD);
    let obv = obv::obv(&closes, &volumes);
    let obv_values: Vec<f64> = obv.iter().map(|v| v.unwrap_or(0.0)).collect();
    let obv_sma20 = sma::sma(&obv_values, VOLUME_WINDOW);
    let avg_volume20 = sma::sma(&volumes, VOLUME_WINDOW);
    let cmf20 = cmf::cmf(&highs, &lows, &closes, &volumes, CMF_PERIOD);
    let adx = adx::adx(&highs, &lows, &closes, ADX_PERIOD);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| AnnotatedBar {
            bar: bar.clone(),
            ind: IndicatorSnapshot {
                sma20: sma20[i],
                sma50: sma50[i],
                sma200: sma200[i],
                ema12: ema12[i],
                ema26: ema26[i],
                rsi14: rsi14[i],
                macd: macd.macd[i],
                macd_signal: macd.signal[i],
                macd_hist: macd.histogram[i],
                stoch_k: stoch.k[i],
                stoch_d: stoch.d[i],
                bb_upper: bb.upper[i],
                bb_middle: bb.middle[i],
                bb_lower: bb.lower[i],
                bb_width: bb.width[i],
                atr14: atr14[i],
                obv: obv[i],
                obv_sma20: obv_sma20[i],
                avg_volume20: avg_volume20[i],
                cmf20: cmf20[i],
                adx14: adx.adx[i],
                plus_di: adx.plus_di[i],
                minus_di: adx.minus_di[i],
            },
        })
        .collect()
}
