//! Shared egui UI modules.

/// Controller bridging backend state to the renderer.
pub mod controller;
/// Shared state types for the egui UI.
pub mod state;
/// egui renderer.
pub mod ui;
/// Pure display formatting helpers.
pub mod view_model;
