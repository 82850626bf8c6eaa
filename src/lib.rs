//! # crm-store
//!
//! An in-memory customer record store with:
//! - Store-assigned ids (one past the highest id present)
//! - Presence-based partial updates
//! - Order-preserving deletes
//! - JSON wire format shared by the HTTP API, the CLI and bulk loads
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                  (axum, tokio runtime)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Handlers                                   │
//! │      (decode body → store op → encode / map error)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ CustomerStore │
//!               │   (RwLock)    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CrmError, Result};
pub use config::Config;
pub use store::{Customer, CustomerStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of crm-store
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
