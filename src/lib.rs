// ============================================================================
// gestionale - in-memory record keeping for a small business
// ============================================================================
//
// Four views (tasks, clients, inventory, client visits) share one generic
// record store. Nothing is persisted; every store lives as long as the
// workspace keeps its view mounted.
//
// ============================================================================

pub mod app;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod shell;
pub mod store;
pub mod view;
