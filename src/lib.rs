pub mod api_server;
pub mod config;
pub mod dhan_client;
pub mod error;
pub mod logging;
pub mod models;
pub mod processor;
pub mod rules;
pub mod snapshot;

// Re-exports for convenience
pub use dhan_client::{DhanClient, DhanCredentials};
pub use error::FetchError;
pub use models::{IndexMoverEntry, MoverEntry, Ohlc, PulseEntry, Quote, SecurityQuote, Snapshot};
pub use rules::{MoverMode, Signals};
pub use snapshot::{Clock, SnapshotCache, SystemClock};
