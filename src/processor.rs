use crate::config;
use crate::models::{IndexMoverEntry, MoverEntry, PulseEntry, SecurityQuote};
use crate::rules::{MoverMode, Signals};

/// Round to 2 decimal places (percent-change and impact fields).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Market-pulse scan: keep securities where at least
/// `PULSE_SCORE_THRESHOLD` of the three signals fired.
///
/// Output order is universe iteration order; no further sort.
pub fn market_pulse(quotes: &[SecurityQuote]) -> Vec<PulseEntry> {
    quotes
        .iter()
        .filter_map(|row| {
            let score = Signals::evaluate(&row.quote, config::PULSE_VOLUME_MULTIPLIER).score();
            if score < config::PULSE_SCORE_THRESHOLD {
                return None;
            }
            Some(PulseEntry {
                symbol: row.symbol.clone(),
                security_id: row.security_id,
                last_price: row.quote.last_price,
                volume: row.quote.volume,
                score,
                market_pulse: true,
            })
        })
        .collect()
}

/// Top-movers scan: score every security with data (no threshold filter),
/// sort by traded volume descending, truncate to the mode's top-N.
pub fn top_movers(quotes: &[SecurityQuote], mode: MoverMode) -> Vec<MoverEntry> {
    let mut movers: Vec<MoverEntry> = quotes
        .iter()
        .map(|row| MoverEntry {
            symbol: row.symbol.clone(),
            security_id: row.security_id,
            last_price: row.quote.last_price,
            volume: row.quote.volume,
            score: mode.score(&row.quote),
        })
        .collect();

    movers.sort_by(|a, b| b.volume.cmp(&a.volume));
    movers.truncate(mode.top_n());
    movers
}

/// Index-mover scan: percent change scaled by index weight, ordered by
/// absolute impact so the biggest market-moving names come first
/// regardless of direction.
pub fn index_movers(quotes: &[SecurityQuote]) -> Vec<IndexMoverEntry> {
    let mut movers: Vec<IndexMoverEntry> = quotes
        .iter()
        .filter_map(|row| {
            let open = row.quote.ohlc.open;
            // Zero open means no session baseline; skip rather than divide.
            if open == 0.0 {
                return None;
            }

            let change_pct = round2((row.quote.last_price - open) / open * 100.0);
            let weight = config::index_weight(&row.symbol);
            Some(IndexMoverEntry {
                symbol: row.symbol.clone(),
                security_id: row.security_id,
                last_price: row.quote.last_price,
                change_pct,
                weight,
                impact_score: round2(change_pct * weight),
            })
        })
        .collect();

    movers.sort_by(|a, b| b.impact_score.abs().total_cmp(&a.impact_score.abs()));
    movers
}
