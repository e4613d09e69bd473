use std::fmt;

use prometheus::{IntCounter, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for the record stores
// ============================================================================
//
// Provides metrics for:
// - Store writes per entity and outcome (inserted, replaced, rejected)
// - Removals per entity
// - Current record count per entity
// - View navigation
//
// Nothing is served over HTTP; the shell prints the text exposition on demand.
// ============================================================================

/// Central metrics registry for the whole workspace
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    pub records_written: IntCounterVec,
    pub records_removed: IntCounterVec,
    pub records: IntGaugeVec,
    pub navigations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let records_written = IntCounterVec::new(
            Opts::new("records_written_total", "Store writes by entity and outcome"),
            &["entity", "outcome"],
        )?;
        registry.register(Box::new(records_written.clone()))?;

        let records_removed = IntCounterVec::new(
            Opts::new("records_removed_total", "Records deleted by entity"),
            &["entity"],
        )?;
        registry.register(Box::new(records_removed.clone()))?;

        let records = IntGaugeVec::new(
            Opts::new("records", "Records currently held by entity"),
            &["entity"],
        )?;
        registry.register(Box::new(records.clone()))?;

        let navigations = IntCounterVec::new(
            Opts::new("navigations_total", "View activations"),
            &["view"],
        )?;
        registry.register(Box::new(navigations.clone()))?;

        Ok(Self {
            registry,
            records_written,
            records_removed,
            records,
            navigations,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Pre-labelled handles for one entity's store
    pub fn entity(&self, entity: &str) -> EntityMetrics {
        EntityMetrics {
            inserted: self.records_written.with_label_values(&[entity, "inserted"]),
            replaced: self.records_written.with_label_values(&[entity, "replaced"]),
            rejected: self.records_written.with_label_values(&[entity, "rejected"]),
            removed: self.records_removed.with_label_values(&[entity]),
            records: self.records.with_label_values(&[entity]),
        }
    }

    pub fn record_navigation(&self, view: &str) {
        self.navigations.with_label_values(&[view]).inc();
    }

    /// Prometheus text exposition of everything registered
    pub fn render(&self) -> anyhow::Result<String> {
        let families = self.registry.gather();
        Ok(TextEncoder::new().encode_to_string(&families)?)
    }
}

/// Counters and gauge bound to a single entity label
#[derive(Clone)]
pub struct EntityMetrics {
    pub(crate) inserted: IntCounter,
    pub(crate) replaced: IntCounter,
    pub(crate) rejected: IntCounter,
    pub(crate) removed: IntCounter,
    pub(crate) records: IntGauge,
}

impl fmt::Debug for EntityMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityMetrics")
            .field("records", &self.records.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_navigation("tasks");
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_entity_handles_share_registry() {
        let metrics = Metrics::new().unwrap();
        let tasks = metrics.entity("task");
        tasks.inserted.inc();
        tasks.inserted.inc();
        tasks.records.set(2);

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"records_written_total{entity="task",outcome="inserted"} 2"#));
        assert!(text.contains(r#"records{entity="task"} 2"#));
    }

    #[test]
    fn test_record_navigation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_navigation("clients");
        metrics.record_navigation("clients");
        metrics.record_navigation("visits");

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"navigations_total{view="clients"} 2"#));
        assert!(text.contains(r#"navigations_total{view="visits"} 1"#));
    }
}
