use market_pulse::{config, MoverMode, Ohlc, Quote, Signals};

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(last: f64, open: f64, high: f64, volume: u64, avg: f64) -> Quote {
        Quote {
            last_price: last,
            ohlc: Ohlc {
                open,
                high,
                low: 0.0,
                close: 0.0,
            },
            volume,
            average_price: avg,
        }
    }

    #[test]
    fn test_signal_predicates_match_thresholds() {
        let q = quote(105.0, 100.0, 120.0, 150_000, 100.0);
        let signals = Signals::evaluate(&q, config::PULSE_VOLUME_MULTIPLIER);

        // last 105 > open 100
        assert!(signals.price_strength);
        // last 105 > 0.8 * high 120 = 96
        assert!(signals.breakout_zone);
        // volume 150_000 > 1000 * avg 100 = 100_000
        assert!(signals.volume_spike);
        assert_eq!(signals.score(), 3);
    }

    #[test]
    fn test_pulse_and_fo_multipliers_differ() {
        assert_eq!(config::PULSE_VOLUME_MULTIPLIER, 1000.0);
        assert_eq!(config::FO_VOLUME_MULTIPLIER, 500.0);

        // A volume that spikes under the F&O rule but not the pulse rule
        let q = quote(100.0, 100.0, 200.0, 75_000, 100.0);
        assert!(Signals::evaluate(&q, config::FO_VOLUME_MULTIPLIER).volume_spike);
        assert!(!Signals::evaluate(&q, config::PULSE_VOLUME_MULTIPLIER).volume_spike);
    }

    #[test]
    fn test_absent_average_price_defaults_keep_spike_finite() {
        // average_price 1.0 is the documented gateway-absent default:
        // volume must exceed the bare multiplier to spike
        let q = quote(100.0, 100.0, 200.0, 999, 1.0);
        assert!(!Signals::evaluate(&q, config::PULSE_VOLUME_MULTIPLIER).volume_spike);

        let q = quote(100.0, 100.0, 200.0, 1_001, 1.0);
        assert!(Signals::evaluate(&q, config::PULSE_VOLUME_MULTIPLIER).volume_spike);
    }

    #[test]
    fn test_signals_order_insensitive() {
        let q = quote(105.0, 100.0, 110.0, 10, 100.0);
        let first = Signals::evaluate(&q, 1000.0);
        let second = Signals::evaluate(&q, 1000.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_status_mode_is_single_rule() {
        let down_heavy_volume = quote(95.0, 100.0, 96.0, 10_000_000, 100.0);
        assert_eq!(MoverMode::Status.score(&down_heavy_volume), 0);

        let up_no_volume = quote(105.0, 100.0, 200.0, 0, 100.0);
        assert_eq!(MoverMode::Status.score(&up_no_volume), 1);
    }
}
