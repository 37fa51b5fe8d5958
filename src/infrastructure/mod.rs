//! Infrastructure layer module
//!
//! This module contains process-level adapters and wiring:
//! - Storage implementations (filesystem, in-memory)
//! - Configuration management
//! - Logging infrastructure
//! - Repository setup from configuration
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod setup;
pub mod storage;
