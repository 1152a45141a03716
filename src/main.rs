use anyhow::Result;
use colored::Colorize;
use market_pulse::{api_server, config, logging, snapshot, DhanClient, DhanCredentials};
use std::sync::Arc;

/// Run all three scans once and print the results
async fn run_scan() -> Result<()> {
    println!("{}", "=".repeat(60).blue());
    println!("{}", "Market Pulse Scan".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!();

    let credentials = DhanCredentials::from_env()?;
    let client = Arc::new(DhanClient::new(&credentials)?);

    println!("{}", "Scanning universes...".cyan());
    let snap = snapshot::build_snapshot(&client).await;
    println!();

    println!("{}", "Market Pulse (score >= 2)".cyan().bold());
    if snap.market_pulse.is_empty() {
        println!("{} No securities with an active pulse", "ℹ".blue());
    }
    for entry in &snap.market_pulse {
        println!(
            "  {} {:<12} ₹{:<10.2} vol {:<12} score {}",
            "✓".green(),
            entry.symbol.yellow(),
            entry.last_price,
            entry.volume,
            entry.score
        );
    }
    println!();

    println!("{}", "F&O Top Movers (by volume)".cyan().bold());
    for entry in &snap.fo_scanner {
        println!(
            "  {} {:<12} ₹{:<10.2} vol {:<12} score {}",
            "→".cyan(),
            entry.symbol.yellow(),
            entry.last_price,
            entry.volume,
            entry.score
        );
    }
    println!();

    println!("{}", "Index Movers (by |impact|)".cyan().bold());
    for entry in &snap.index_mover {
        let change = format!("{:+.2}%", entry.change_pct);
        let change = if entry.change_pct >= 0.0 {
            change.green()
        } else {
            change.red()
        };
        println!(
            "  {} {:<12} {} weight {:<5} impact {:.2}",
            "→".cyan(),
            entry.symbol.yellow(),
            change,
            entry.weight,
            entry.impact_score
        );
    }
    println!();

    println!("{}", "=".repeat(60).blue());
    println!("{} Captured at {}", "✓".green(), snap.captured_at);
    println!("{}", "=".repeat(60).blue());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let mode = config::get_execution_mode();

    match mode.as_str() {
        "server" => {
            println!("{}", "=".repeat(60).blue());
            println!("{}", "Market Pulse Server".green().bold());
            println!("{}", "=".repeat(60).blue());
            println!();
            api_server::start_server(config::get_port()).await?;
        }
        "scan" => run_scan().await?,
        _ => {
            eprintln!("Invalid mode '{}'. Use 'server' or 'scan'", mode);
            eprintln!("Set PULSE_MODE environment variable to control execution mode");
            eprintln!("Examples:");
            eprintln!("  PULSE_MODE=server PULSE_PORT=3001 cargo run   # Start dashboard server");
            eprintln!("  PULSE_MODE=scan cargo run                     # Run one scan pass");
            std::process::exit(1);
        }
    }

    Ok(())
}
