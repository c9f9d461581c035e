//! Locale accessor metrics.
//!
//! Counts how calls through installed locale accessors were dispatched.
//! One `AccessorMetrics` is shared by every accessor installed into the same
//! table.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Dispatch counters for locale accessors.
#[derive(Debug, Default)]
pub struct AccessorMetrics {
    /// Calls forwarded to the base accessor
    default_dispatches: AtomicUsize,

    /// Calls delegated to a previous definition (`super: true`)
    super_dispatches: AtomicUsize,

    /// Default-path calls whose `locale` option was discarded
    locale_conflicts: AtomicUsize,
}

impl AccessorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call forwarded to the base accessor.
    pub fn record_default_dispatch(&self) {
        self.default_dispatches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call delegated to a previous definition.
    pub fn record_super_dispatch(&self) {
        self.super_dispatches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a discarded, conflicting `locale` option.
    pub fn record_locale_conflict(&self) {
        self.locale_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn default_dispatches(&self) -> usize {
        self.default_dispatches.load(Ordering::Relaxed)
    }

    pub fn super_dispatches(&self) -> usize {
        self.super_dispatches.load(Ordering::Relaxed)
    }

    pub fn locale_conflicts(&self) -> usize {
        self.locale_conflicts.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let defaults = self.default_dispatches();
        let conflicts = self.locale_conflicts();
        let conflict_rate = if defaults > 0 {
            (conflicts as f64 / defaults as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            default_dispatches: defaults,
            super_dispatches: self.super_dispatches(),
            locale_conflicts: conflicts,
            conflict_rate,
        }
    }
}

/// Snapshot of locale accessor dispatch statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of calls forwarded to the base accessor
    pub default_dispatches: usize,

    /// Number of calls delegated to a previous definition
    pub super_dispatches: usize,

    /// Number of discarded `locale` options
    pub locale_conflicts: usize,

    /// Share of default dispatches that carried a conflicting locale (0-100)
    pub conflict_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_default_dispatch() {
        let metrics = AccessorMetrics::new();

        assert_eq!(metrics.default_dispatches(), 0);
        metrics.record_default_dispatch();
        assert_eq!(metrics.default_dispatches(), 1);
        metrics.record_default_dispatch();
        assert_eq!(metrics.default_dispatches(), 2);
    }

    #[test]
    fn test_record_super_dispatch() {
        let metrics = AccessorMetrics::new();

        metrics.record_super_dispatch();
        assert_eq!(metrics.super_dispatches(), 1);
        assert_eq!(metrics.default_dispatches(), 0);
    }

    #[test]
    fn test_record_locale_conflict() {
        let metrics = AccessorMetrics::new();

        metrics.record_locale_conflict();
        assert_eq!(metrics.locale_conflicts(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = AccessorMetrics::new().report();

        assert_eq!(report.default_dispatches, 0);
        assert_eq!(report.super_dispatches, 0);
        assert_eq!(report.locale_conflicts, 0);
        assert_eq!(report.conflict_rate, 0.0);
    }

    #[test]
    fn test_report_conflict_rate() {
        let metrics = AccessorMetrics::new();

        // 4 default dispatches, 1 conflict = 25%
        for _ in 0..4 {
            metrics.record_default_dispatch();
        }
        metrics.record_locale_conflict();

        let report = metrics.report();
        assert_eq!(report.default_dispatches, 4);
        assert_eq!(report.locale_conflicts, 1);
        assert_eq!(report.conflict_rate, 25.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = AccessorMetrics::new();
        metrics.record_super_dispatch();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["super_dispatches"], 1);
        assert_eq!(json["conflict_rate"], 0.0);
    }
}
