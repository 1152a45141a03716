use crate::config;
use crate::dhan_client::DhanClient;
use crate::models::Snapshot;
use crate::processor;
use crate::rules::MoverMode;
use chrono::Local;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::info;

// -----------------------------------------------
// CLOCK
// -----------------------------------------------

/// Time source for cache freshness. Injectable so tests can drive the TTL
/// window deterministically.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// -----------------------------------------------
// SNAPSHOT CACHE
// -----------------------------------------------

struct CachedSnapshot {
    snapshot: Snapshot,
    captured: Instant,
}

/// Single-slot TTL memo for the aggregate snapshot.
///
/// FRESH (slot younger than the TTL) serves the stored snapshot with no
/// upstream calls. STALE refreshes lazily, on demand. Concurrent requests
/// arriving while stale are coalesced through the refresh gate so each TTL
/// window pays for at most one upstream pass.
pub struct SnapshotCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<CachedSnapshot>>,
    refresh_gate: Mutex<()>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            slot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Return the cached snapshot if fresh, otherwise run `refresh` and
    /// store its result.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Snapshot
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Snapshot>,
    {
        if let Some(snapshot) = self.fresh().await {
            return snapshot;
        }

        let _gate = self.refresh_gate.lock().await;

        // A request that held the gate ahead of us may have refreshed already.
        if let Some(snapshot) = self.fresh().await {
            return snapshot;
        }

        let started = Instant::now();
        let snapshot = refresh().await;
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "snapshot refreshed"
        );

        let mut slot = self.slot.write().await;
        *slot = Some(CachedSnapshot {
            snapshot: snapshot.clone(),
            captured: self.clock.now(),
        });
        snapshot
    }

    async fn fresh(&self) -> Option<Snapshot> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|cached| self.clock.now().duration_since(cached.captured) < self.ttl)
            .map(|cached| cached.snapshot.clone())
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(config::SNAPSHOT_TTL)
    }
}

// -----------------------------------------------
// AGGREGATE BUILDER
// -----------------------------------------------

/// Run all three scans and assemble a snapshot.
///
/// Never fails: a dead gateway yields empty scan lists, not an error. The
/// dashboard always gets its best-effort aggregate.
pub async fn build_snapshot(client: &Arc<DhanClient>) -> Snapshot {
    let (stocks, fno, index) = tokio::join!(
        Arc::clone(client).fetch_universe(config::STOCK_UNIVERSE),
        Arc::clone(client).fetch_universe(config::FNO_UNIVERSE),
        Arc::clone(client).fetch_universe(config::INDEX_UNIVERSE),
    );

    info!(
        stocks = stocks.len(),
        fno = fno.len(),
        index = index.len(),
        "universe fetch complete"
    );

    Snapshot {
        market_pulse: processor::market_pulse(&stocks),
        fo_scanner: processor::top_movers(&fno, MoverMode::Full),
        index_mover: processor::index_movers(&index),
        captured_at: Local::now().format("%d-%b-%Y %H:%M:%S%.3f").to_string(),
    }
}
