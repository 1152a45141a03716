use market_pulse::{processor, MoverMode, Ohlc, Quote, SecurityQuote};

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, last: f64, open: f64, high: f64, volume: u64, avg: f64) -> SecurityQuote {
        SecurityQuote {
            symbol: symbol.to_string(),
            security_id: 42,
            quote: Quote {
                last_price: last,
                ohlc: Ohlc {
                    open,
                    high,
                    low: 0.0,
                    close: 0.0,
                },
                volume,
                average_price: avg,
            },
        }
    }

    #[test]
    fn test_pulse_includes_score_two_and_three_only() {
        let quotes = vec![
            // score 0
            row("ZERO", 90.0, 100.0, 200.0, 0, 100.0),
            // score 1 (price strength only)
            row("ONE", 101.0, 100.0, 200.0, 0, 100.0),
            // score 2 (price strength + breakout)
            row("TWO", 101.0, 100.0, 110.0, 0, 100.0),
            // score 3
            row("THREE", 101.0, 100.0, 110.0, 200_000, 100.0),
        ];

        let pulse = processor::market_pulse(&quotes);
        let symbols: Vec<&str> = pulse.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TWO", "THREE"]);
    }

    #[test]
    fn test_low_score_securities_survive_in_mover_scan() {
        let quotes = vec![
            row("ZERO", 90.0, 100.0, 200.0, 500, 100.0),
            row("ONE", 101.0, 100.0, 200.0, 100, 100.0),
        ];

        // Pulse drops both; the mover scan keeps both
        assert!(processor::market_pulse(&quotes).is_empty());
        let movers = processor::top_movers(&quotes, MoverMode::Full);
        assert_eq!(movers.len(), 2);
        assert_eq!(movers[0].symbol, "ZERO");
    }

    #[test]
    fn test_mover_truncation_with_more_than_ten_qualifying() {
        let quotes: Vec<SecurityQuote> = (0u64..25)
            .map(|i| row(&format!("S{i}"), 105.0, 100.0, 110.0, i * 100, 100.0))
            .collect();

        let movers = processor::top_movers(&quotes, MoverMode::Full);
        assert_eq!(movers.len(), 10);
        assert_eq!(movers[0].volume, 2_400);
        assert!(movers.windows(2).all(|w| w[0].volume >= w[1].volume));

        let status = processor::top_movers(&quotes, MoverMode::Status);
        assert_eq!(status.len(), 15);
    }

    #[test]
    fn test_index_mover_worked_example() {
        // open=100, last=110 → change 10.00%; HDFCBANK weight 11.5 → impact 115.00
        let quotes = vec![row("HDFCBANK", 110.0, 100.0, 110.0, 0, 100.0)];
        let movers = processor::index_movers(&quotes);

        assert_eq!(movers.len(), 1);
        assert_eq!(movers[0].change_pct, 10.0);
        assert_eq!(movers[0].impact_score, 115.0);
    }

    #[test]
    fn test_index_mover_zero_open_excluded() {
        let quotes = vec![
            row("HDFCBANK", 110.0, 0.0, 110.0, 0, 100.0),
            row("ITC", 105.0, 100.0, 110.0, 0, 100.0),
        ];

        let movers = processor::index_movers(&quotes);
        assert_eq!(movers.len(), 1);
        assert_eq!(movers[0].symbol, "ITC");
    }

    #[test]
    fn test_index_movers_ordered_by_absolute_impact() {
        let quotes = vec![
            // SBIN (2.7): -2% → impact -5.4
            row("SBIN", 98.0, 100.0, 110.0, 0, 100.0),
            // HDFCBANK (11.5): +10% → impact 115.0
            row("HDFCBANK", 110.0, 100.0, 110.0, 0, 100.0),
            // ITC (4.1): +5% → impact 20.5
            row("ITC", 105.0, 100.0, 110.0, 0, 100.0),
        ];

        let movers = processor::index_movers(&quotes);
        let impacts: Vec<f64> = movers.iter().map(|e| e.impact_score).collect();
        assert_eq!(impacts, vec![115.0, 20.5, -5.4]);
    }

    #[test]
    fn test_one_missing_security_does_not_suppress_the_rest() {
        // A failed fetch never reaches the scanners; the remaining rows scan
        // as usual
        let quotes = vec![
            row("TWO", 101.0, 100.0, 110.0, 0, 100.0),
            row("THREE", 101.0, 100.0, 110.0, 200_000, 100.0),
        ];

        let pulse = processor::market_pulse(&quotes);
        assert_eq!(pulse.len(), 2);
    }
}
