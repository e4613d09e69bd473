use std::collections::HashMap;

use crate::config::Retention;
use crate::domain::client::{Client, ClientsView};
use crate::domain::product::{InventoryView, Product};
use crate::domain::task::{Task, TasksView};
use crate::domain::visit::{Visit, VisitsView};
use crate::domain::DomainError;
use crate::metrics::Metrics;
use crate::store::{Record, RecordStore};
use crate::view::{Intent, View, ViewKind};

// ============================================================================
// Workspace - navigation host for the four views
// ============================================================================
//
// Exactly one view is active. A view's binding (and with it, its store) is
// created the first time the view is opened. When the user navigates away the
// retention policy decides whether the binding is parked or dropped.
//
// ============================================================================

/// One entry of the navigation menu
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub kind: ViewKind,
    pub label: &'static str,
    pub active: bool,
}

pub struct Workspace {
    current: Box<dyn View>,
    parked: HashMap<ViewKind, Box<dyn View>>,
    retention: Retention,
    metrics: Metrics,
}

impl Workspace {
    pub fn new(start: ViewKind, retention: Retention, metrics: Metrics) -> Self {
        let current = mount(start, &metrics);
        metrics.record_navigation(start.path());
        tracing::info!(view = %start, %retention, "Workspace ready");

        Self {
            current,
            parked: HashMap::new(),
            retention,
            metrics,
        }
    }

    pub fn active(&self) -> ViewKind {
        self.current.kind()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn view(&self) -> &dyn View {
        self.current.as_ref()
    }

    /// Whether a view currently holds a live store
    pub fn is_mounted(&self, kind: ViewKind) -> bool {
        self.active() == kind || self.parked.contains_key(&kind)
    }

    pub fn navigate(&mut self, kind: ViewKind) {
        let from = self.active();
        if from == kind {
            return;
        }

        let next = self
            .parked
            .remove(&kind)
            .unwrap_or_else(|| mount(kind, &self.metrics));
        let previous = std::mem::replace(&mut self.current, next);

        match self.retention {
            Retention::Retain => {
                self.parked.insert(from, previous);
            }
            Retention::Discard => {
                tracing::info!(view = %from, "Discarding view records");
            }
        }

        self.metrics.record_navigation(kind.path());
        tracing::info!(%from, to = %kind, "Navigated");
    }

    /// Navigate by path (`tasks`, `/clients`, `/` ...)
    pub fn navigate_to(&mut self, path: &str) -> Result<ViewKind, DomainError> {
        let kind: ViewKind = path.parse()?;
        self.navigate(kind);
        Ok(kind)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<(), DomainError> {
        tracing::debug!(view = %self.active(), action = intent.action(), "Dispatching intent");
        self.current.dispatch(intent)
    }

    pub fn nav(&self) -> Vec<NavEntry> {
        let active = self.active();
        ViewKind::ALL
            .into_iter()
            .map(|kind| NavEntry {
                kind,
                label: kind.label(),
                active: kind == active,
            })
            .collect()
    }

    /// Menu on one line, the active view in brackets
    pub fn nav_line(&self) -> String {
        let entries: Vec<String> = self
            .nav()
            .iter()
            .map(|entry| {
                if entry.active {
                    format!("[{}]", entry.label)
                } else {
                    entry.label.to_string()
                }
            })
            .collect();
        entries.join("  ")
    }
}

fn mount(kind: ViewKind, metrics: &Metrics) -> Box<dyn View> {
    tracing::debug!(view = %kind, "Mounting view");
    match kind {
        ViewKind::Tasks => Box::new(TasksView::new(store::<Task>(metrics))),
        ViewKind::Clients => Box::new(ClientsView::new(store::<Client>(metrics))),
        ViewKind::Inventory => Box::new(InventoryView::new(store::<Product>(metrics))),
        ViewKind::Visits => Box::new(VisitsView::new(store::<Visit>(metrics))),
    }
}

fn store<R: Record>(metrics: &Metrics) -> RecordStore<R> {
    RecordStore::new().with_metrics(metrics.entity(R::ENTITY))
}

// ============================================================================
// Unit Tests
// ============================================================================
