//! REST gateway to the risk-management backend.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::*;
