//! Caller configuration

use std::time::Duration;

use tracing::warn;

use crate::core::ColumnPolicy;
use crate::types::{clamp_ticket_count, DRAW_DELAY_MS, GENERATE_DELAY_MS, NUMBER_COUNT};

/// Pacing and batch settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerConfig {
    pub ticket_count: usize,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub draw_delay: Duration,
    pub generate_delay: Duration,
    pub column_policy: ColumnPolicy,
    pub max_calls: usize,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            ticket_count: 1,
            seed: None,
            draw_delay: Duration::from_millis(DRAW_DELAY_MS),
            generate_delay: Duration::from_millis(GENERATE_DELAY_MS),
            column_policy: ColumnPolicy::AsDrawn,
            max_calls: NUMBER_COUNT,
        }
    }
}

impl CallerConfig {
    /// Create from `TAMBOLA_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults; values that fail to parse are
    /// logged and also fall back.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let ticket_count = parse_var::<i64>(&lookup, "TAMBOLA_TICKETS")
            .map(clamp_ticket_count)
            .unwrap_or(defaults.ticket_count);

        let seed = parse_var::<u64>(&lookup, "TAMBOLA_SEED");

        let draw_delay = parse_var::<u64>(&lookup, "TAMBOLA_DRAW_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.draw_delay);

        let generate_delay = parse_var::<u64>(&lookup, "TAMBOLA_GENERATE_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.generate_delay);

        let column_policy = parse_var::<ColumnPolicy>(&lookup, "TAMBOLA_COLUMN_POLICY")
            .unwrap_or(defaults.column_policy);

        let max_calls = parse_var::<usize>(&lookup, "TAMBOLA_MAX_CALLS")
            .map(|n| n.min(NUMBER_COUNT))
            .unwrap_or(defaults.max_calls);

        Self {
            ticket_count,
            seed,
            draw_delay,
            generate_delay,
            column_policy,
            max_calls,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = raw, "ignoring unparsable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CallerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CallerConfig::default());
        assert_eq!(config.draw_delay, Duration::from_millis(1000));
        assert_eq!(config.generate_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_reads_every_key() {
        let config = CallerConfig::from_lookup(lookup(&[
            ("TAMBOLA_TICKETS", "6"),
            ("TAMBOLA_SEED", "42"),
            ("TAMBOLA_DRAW_DELAY_MS", "0"),
            ("TAMBOLA_GENERATE_DELAY_MS", "25"),
            ("TAMBOLA_COLUMN_POLICY", "cover"),
            ("TAMBOLA_MAX_CALLS", "20"),
        ]));
        assert_eq!(config.ticket_count, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.draw_delay, Duration::ZERO);
        assert_eq!(config.generate_delay, Duration::from_millis(25));
        assert_eq!(config.column_policy, ColumnPolicy::CoverEveryColumn);
        assert_eq!(config.max_calls, 20);
    }

    #[test]
    fn test_ticket_count_is_clamped() {
        let high = CallerConfig::from_lookup(lookup(&[("TAMBOLA_TICKETS", "50")]));
        let low = CallerConfig::from_lookup(lookup(&[("TAMBOLA_TICKETS", "-3")]));
        assert_eq!(high.ticket_count, 12);
        assert_eq!(low.ticket_count, 1);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = CallerConfig::from_lookup(lookup(&[
            ("TAMBOLA_SEED", "abc"),
            ("TAMBOLA_DRAW_DELAY_MS", "soon"),
            ("TAMBOLA_COLUMN_POLICY", "strict"),
            ("TAMBOLA_MAX_CALLS", " "),
        ]));
        assert_eq!(config, CallerConfig::default());
    }

    #[test]
    fn test_max_calls_capped_at_universe() {
        let config = CallerConfig::from_lookup(lookup(&[("TAMBOLA_MAX_CALLS", "500")]));
        assert_eq!(config.max_calls, 90);
    }
}
