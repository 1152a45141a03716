use crate::dhan_client::{DhanClient, DhanCredentials};
use crate::models::Snapshot;
use crate::snapshot::{self, SnapshotCache};
use anyhow::Result;
use axum::{
    extract::State,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

// -----------------------------------------------
// API RESPONSE ENVELOPE
// -----------------------------------------------

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub processing_time_ms: Option<u64>,
}

// -----------------------------------------------
// APPLICATION STATE
// -----------------------------------------------

#[derive(Clone)]
pub struct AppState {
    client: Arc<DhanClient>,
    cache: Arc<SnapshotCache>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let credentials = DhanCredentials::from_env()?;
        Ok(Self {
            client: Arc::new(DhanClient::new(&credentials)?),
            cache: Arc::new(SnapshotCache::default()),
        })
    }
}

// -----------------------------------------------
// API HANDLERS
// -----------------------------------------------

/// GET /api/snapshot - Current scan aggregate, served from the TTL cache.
///
/// Always succeeds: a total gateway outage returns empty scan lists.
async fn get_snapshot(State(app_state): State<AppState>) -> Json<ApiResponse<Snapshot>> {
    let start_time = Instant::now();

    let client = Arc::clone(&app_state.client);
    let snap = app_state
        .cache
        .get_or_refresh(|| async move { snapshot::build_snapshot(&client).await })
        .await;

    Json(ApiResponse {
        success: true,
        data: Some(snap),
        error: None,
        processing_time_ms: Some(start_time.elapsed().as_millis() as u64),
    })
}

/// GET /api/health - Liveness probe.
async fn get_health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse {
        success: true,
        data: Some("ok"),
        error: None,
        processing_time_ms: None,
    })
}

/// GET / - Auto-refreshing dashboard page.
async fn get_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

// -----------------------------------------------
// SERVER SETUP
// -----------------------------------------------

pub async fn start_server(port: u16) -> Result<()> {
    let app_state = AppState::new()?;

    let app = Router::new()
        .route("/", get(get_dashboard))
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/health", get(get_health))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Market Pulse server running on http://{}", addr);
    println!("Available endpoints:");
    println!("   GET  /              (dashboard)");
    println!("   GET  /api/snapshot");
    println!("   GET  /api/health");
    println!();

    axum::serve(listener, app).await?;
    Ok(())
}

// -----------------------------------------------
// DASHBOARD PAGE
// -----------------------------------------------
// Polls /api/snapshot on the same cadence as the cache TTL, so at most one
// upstream pass per reload cycle.
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Market Pulse</title>
<style>
  body { font-family: -apple-system, Segoe UI, sans-serif; margin: 2rem; background: #111; color: #eee; }
  h1 { font-size: 1.4rem; }
  h2 { font-size: 1.1rem; margin-top: 2rem; }
  table { border-collapse: collapse; min-width: 40rem; }
  th, td { text-align: left; padding: 0.3rem 1rem 0.3rem 0; border-bottom: 1px solid #333; }
  .pos { color: #4caf50; }
  .neg { color: #ef5350; }
  #captured { color: #888; font-size: 0.85rem; }
</style>
</head>
<body>
<h1>Market Pulse</h1>
<div id="captured">loading…</div>

<h2>Market Pulse (score ≥ 2)</h2>
<table id="pulse"><thead><tr><th>Symbol</th><th>Last</th><th>Volume</th><th>Score</th></tr></thead><tbody></tbody></table>

<h2>F&amp;O Top Movers (by volume)</h2>
<table id="movers"><thead><tr><th>Symbol</th><th>Last</th><th>Volume</th><th>Score</th></tr></thead><tbody></tbody></table>

<h2>Index Movers (by |impact|)</h2>
<table id="index"><thead><tr><th>Symbol</th><th>Last</th><th>Change %</th><th>Weight</th><th>Impact</th></tr></thead><tbody></tbody></table>

<script>
function fill(id, rows, cols) {
  const body = document.querySelector('#' + id + ' tbody');
  body.innerHTML = '';
  for (const row of rows) {
    const tr = document.createElement('tr');
    for (const col of cols) {
      const td = document.createElement('td');
      const val = row[col];
      td.textContent = val;
      if ((col === 'change_pct' || col === 'impact_score') && typeof val === 'number') {
        td.className = val >= 0 ? 'pos' : 'neg';
      }
      tr.appendChild(td);
    }
    body.appendChild(tr);
  }
}

async function refresh() {
  try {
    const res = await fetch('/api/snapshot');
    const payload = await res.json();
    if (!payload.success || !payload.data) return;
    const snap = payload.data;
    document.getElementById('captured').textContent = 'captured ' + snap.captured_at;
    fill('pulse', snap.market_pulse, ['symbol', 'last_price', 'volume', 'score']);
    fill('movers', snap.fo_scanner, ['symbol', 'last_price', 'volume', 'score']);
    fill('index', snap.index_mover, ['symbol', 'last_price', 'change_pct', 'weight', 'impact_score']);
  } catch (err) {
    document.getElementById('captured').textContent = 'snapshot fetch failed: ' + err;
  }
}

refresh();
setInterval(refresh, 10000);
</script>
</body>
</html>
"#;
