use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// -----------------------------------------------
// DHAN MARKET-FEED WIRE TYPES
// -----------------------------------------------

/// Request body for `POST /v2/marketfeed/quote`: segment → security ids.
pub type QuoteRequest = HashMap<&'static str, Vec<u32>>;

/// Response from `POST /v2/marketfeed/quote`.
///
/// The payload is keyed segment → security-id-string → quote, e.g.
/// `{ "data": { "NSE_EQ": { "2885": { ... } } }, "status": "success" }`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub data: HashMap<String, HashMap<String, Quote>>,

    #[serde(default)]
    pub status: String,
}

/// Per-security quote snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub last_price: f64,

    #[serde(default)]
    pub ohlc: Ohlc,

    #[serde(default)]
    pub volume: u64,

    // Defaults to 1 so the volume-spike ratio stays finite when the
    // gateway omits the field.
    #[serde(default = "default_average_price")]
    pub average_price: f64,
}

fn default_average_price() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    #[serde(default)]
    pub open: f64,

    #[serde(default)]
    pub high: f64,

    #[serde(default)]
    pub low: f64,

    #[serde(default)]
    pub close: f64,
}

// -----------------------------------------------
// DOMAIN TYPES
// -----------------------------------------------

/// A universe row with its fetched quote.
#[derive(Debug, Clone)]
pub struct SecurityQuote {
    pub symbol: String,
    pub security_id: u32,
    pub quote: Quote,
}

/// Market-pulse scan entry: securities where at least two signals fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulseEntry {
    pub symbol: String,
    pub security_id: u32,
    pub last_price: f64,
    pub volume: u64,
    pub score: u8,
    pub market_pulse: bool,
}

/// F&O top-movers entry, sorted by traded volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoverEntry {
    pub symbol: String,
    pub security_id: u32,
    pub last_price: f64,
    pub volume: u64,
    pub score: u8,
}

/// Index-mover entry: percent change scaled by index weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexMoverEntry {
    pub symbol: String,
    pub security_id: u32,
    pub last_price: f64,
    pub change_pct: f64,
    pub weight: f64,
    pub impact_score: f64,
}

/// The aggregate of all three scans. Exactly one snapshot is live at a time;
/// a refresh replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub market_pulse: Vec<PulseEntry>,
    pub fo_scanner: Vec<MoverEntry>,
    pub index_mover: Vec<IndexMoverEntry>,
    pub captured_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_response_parse() {
        let payload = r#"{
            "data": {
                "NSE_EQ": {
                    "2885": {
                        "last_price": 2931.4,
                        "ohlc": { "open": 2902.0, "high": 2940.5, "low": 2898.1, "close": 2899.9 },
                        "volume": 4821055,
                        "average_price": 2921.3
                    }
                }
            },
            "status": "success"
        }"#;

        let envelope: QuoteResponse = serde_json::from_str(payload).unwrap();
        let quote = &envelope.data["NSE_EQ"]["2885"];
        assert_eq!(quote.last_price, 2931.4);
        assert_eq!(quote.ohlc.open, 2902.0);
        assert_eq!(quote.volume, 4_821_055);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        // Gateway gaps: no ohlc, no volume, no average_price
        let payload = r#"{ "data": { "NSE_EQ": { "1333": { "last_price": 1650.0 } } } }"#;

        let envelope: QuoteResponse = serde_json::from_str(payload).unwrap();
        let quote = &envelope.data["NSE_EQ"]["1333"];
        assert_eq!(quote.ohlc, Ohlc::default());
        assert_eq!(quote.volume, 0);
        // average_price falls back to 1, keeping the spike ratio finite
        assert_eq!(quote.average_price, 1.0);
    }
}
