//! Library exports for reuse in integration tests.
/// REST gateway to the risk-management backend.
pub mod api;
/// Application directory helpers.
pub mod app_dirs;
/// Persisted desk settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent configuration.
pub mod http_client;
/// Tracing setup.
pub mod logging;
