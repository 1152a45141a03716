use crate::config;
use crate::models::Quote;
use serde::{Deserialize, Serialize};

/// The three independent per-security signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub price_strength: bool,
    pub breakout_zone: bool,
    pub volume_spike: bool,
}

impl Signals {
    /// Evaluate all three signals for one quote.
    ///
    /// `volume_multiplier` is scanner-specific (1000 for the pulse scan,
    /// 500 for the F&O scan) and deliberately not shared.
    pub fn evaluate(quote: &Quote, volume_multiplier: f64) -> Self {
        Self {
            price_strength: quote.last_price > quote.ohlc.open,
            breakout_zone: quote.last_price > config::BREAKOUT_FRACTION * quote.ohlc.high,
            volume_spike: (quote.volume as f64) > volume_multiplier * quote.average_price,
        }
    }

    /// Count of signals that fired, 0–3.
    pub fn score(&self) -> u8 {
        self.price_strength as u8 + self.breakout_zone as u8 + self.volume_spike as u8
    }
}

/// Rule-set variants for the top-movers scan.
///
/// `Full` is canonical: all three signals scored, top 10 by volume.
/// `Status` is the deprecated single-rule alternate (last > open only,
/// top 15) kept for parity with older deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverMode {
    Full,
    Status,
}

impl MoverMode {
    pub fn top_n(&self) -> usize {
        match self {
            MoverMode::Full => config::FO_TOP_N,
            MoverMode::Status => config::FO_STATUS_TOP_N,
        }
    }

    pub fn score(&self, quote: &Quote) -> u8 {
        match self {
            MoverMode::Full => Signals::evaluate(quote, config::FO_VOLUME_MULTIPLIER).score(),
            MoverMode::Status => (quote.last_price > quote.ohlc.open) as u8,
        }
    }
}
