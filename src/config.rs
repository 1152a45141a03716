use std::time::Duration;

// -----------------------------------------------
// DHAN API ENDPOINTS
// -----------------------------------------------
pub const DHAN_BASE_URL: &str = "https://api.dhan.co";

pub fn dhan_quote_url() -> String {
    format!("{}/v2/marketfeed/quote", DHAN_BASE_URL)
}

/// Exchange segment key used for every quote request.
pub const NSE_SEGMENT: &str = "NSE_EQ";

// -----------------------------------------------
// HTTP CLIENT CONFIG
// -----------------------------------------------
// Per-call ceiling. A hanging gateway call degrades to "absent" for that
// security instead of stalling the whole snapshot refresh.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

pub const MAX_CONCURRENT_FETCHES: usize = 10;

// -----------------------------------------------
// SCANNER CONSTANTS
// -----------------------------------------------
// The two volume-spike multipliers are intentionally different and must not
// be unified: the pulse scan over the full universe uses 1000, the reduced
// F&O scan uses 500.
pub const PULSE_VOLUME_MULTIPLIER: f64 = 1000.0;
pub const FO_VOLUME_MULTIPLIER: f64 = 500.0;

/// Minimum signal score (out of 3) for a security to count as "pulse active".
pub const PULSE_SCORE_THRESHOLD: u8 = 2;

/// A last price above this fraction of the session high counts as breakout zone.
pub const BREAKOUT_FRACTION: f64 = 0.8;

/// Top-mover truncation, canonical 3-signal mode.
pub const FO_TOP_N: usize = 10;
/// Top-mover truncation, deprecated single-rule "status" mode.
pub const FO_STATUS_TOP_N: usize = 15;

// -----------------------------------------------
// SNAPSHOT CACHE
// -----------------------------------------------
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(10);

// -----------------------------------------------
// STOCK UNIVERSE (market pulse scan)
// -----------------------------------------------
// Symbol → Dhan NSE_EQ security id. Insertion order is the scan order.
pub const STOCK_UNIVERSE: &[(&str, u32)] = &[
    ("RELIANCE", 2885),
    ("TCS", 11536),
    ("HDFCBANK", 1333),
    ("INFY", 1594),
    ("ICICIBANK", 4963),
    ("SBIN", 3045),
    ("ITC", 1660),
    ("LT", 11483),
    ("AXISBANK", 5900),
    ("BHARTIARTL", 10604),
    ("KOTAKBANK", 1922),
    ("HINDUNILVR", 1394),
    ("BAJFINANCE", 317),
    ("MARUTI", 10999),
    ("ASIANPAINT", 236),
    ("TITAN", 3506),
    ("SUNPHARMA", 3351),
    ("TATAMOTORS", 3456),
    ("TATASTEEL", 3499),
    ("WIPRO", 3787),
    ("HCLTECH", 7229),
    ("TECHM", 13538),
    ("ULTRACEMCO", 11532),
    ("NTPC", 11630),
    ("POWERGRID", 14977),
    ("ONGC", 2475),
    ("COALINDIA", 20374),
    ("ADANIENT", 25),
    ("ADANIPORTS", 15083),
    ("JSWSTEEL", 11723),
    ("DRREDDY", 881),
    ("CIPLA", 694),
    ("DIVISLAB", 10940),
    ("EICHERMOT", 910),
    ("GRASIM", 1232),
    ("HEROMOTOCO", 1348),
    ("BAJAJFINSV", 16675),
    ("BRITANNIA", 547),
    ("NESTLEIND", 17963),
    ("TATACONSUM", 3432),
    ("HINDALCO", 1363),
    ("INDUSINDBK", 5258),
    ("APOLLOHOSP", 157),
    ("SBILIFE", 21808),
    ("HDFCLIFE", 467),
];

// -----------------------------------------------
// F&O WATCHLIST (top-movers scan)
// -----------------------------------------------
pub const FNO_UNIVERSE: &[(&str, u32)] = &[
    ("RELIANCE", 2885),
    ("TCS", 11536),
    ("HDFCBANK", 1333),
    ("INFY", 1594),
    ("ICICIBANK", 4963),
    ("SBIN", 3045),
    ("ITC", 1660),
    ("LT", 11483),
    ("AXISBANK", 5900),
    ("BHARTIARTL", 10604),
    ("KOTAKBANK", 1922),
    ("BAJFINANCE", 317),
    ("MARUTI", 10999),
    ("TITAN", 3506),
    ("SUNPHARMA", 3351),
    ("TATAMOTORS", 3456),
    ("TATASTEEL", 3499),
    ("WIPRO", 3787),
    ("HCLTECH", 7229),
    ("TECHM", 13538),
    ("NTPC", 11630),
    ("ONGC", 2475),
    ("COALINDIA", 20374),
    ("ADANIENT", 25),
    ("ADANIPORTS", 15083),
    ("JSWSTEEL", 11723),
    ("HINDALCO", 1363),
    ("INDUSINDBK", 5258),
];

// -----------------------------------------------
// INDEX CONSTITUENTS (index-mover scan)
// -----------------------------------------------
pub const INDEX_UNIVERSE: &[(&str, u32)] = &[
    ("HDFCBANK", 1333),
    ("RELIANCE", 2885),
    ("ICICIBANK", 4963),
    ("INFY", 1594),
    ("ITC", 1660),
    ("TCS", 11536),
    ("LT", 11483),
    ("BHARTIARTL", 10604),
    ("AXISBANK", 5900),
    ("SBIN", 3045),
];

/// Percentage contribution of each constituent to the index.
pub const INDEX_WEIGHTS: &[(&str, f64)] = &[
    ("HDFCBANK", 11.5),
    ("RELIANCE", 9.1),
    ("ICICIBANK", 7.9),
    ("INFY", 5.1),
    ("ITC", 4.1),
    ("TCS", 3.9),
    ("LT", 3.7),
    ("BHARTIARTL", 3.4),
    ("AXISBANK", 3.0),
    ("SBIN", 2.7),
];

/// Weight lookup for the index-mover scan. Unweighted symbols count as 0.
pub fn index_weight(symbol: &str) -> f64 {
    INDEX_WEIGHTS
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

// -----------------------------------------------
// RUNTIME CONFIGURATION
// -----------------------------------------------

/// Get the execution mode from environment or default to server
pub fn get_execution_mode() -> String {
    std::env::var("PULSE_MODE").unwrap_or_else(|_| "server".to_string())
}

/// Get server port from environment or default
pub fn get_port() -> u16 {
    std::env::var("PULSE_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or(3001)
}
