//! CrewRoster Scheduling Compliance Server
//!
//! A Rust implementation of the cabin-crew roster compliance service,
//! providing a REST JSON API over the duty-time rule engine (Flight Duty
//! Period metrics, Minimum Rest Time checks, weekly quotas and advisory
//! suggestions).

use std::sync::Arc;

pub mod api;
pub mod compliance;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
