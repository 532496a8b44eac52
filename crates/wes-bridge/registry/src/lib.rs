//! Workflow registry lookups for the WES bridge
//!
//! The state change translator needs two read-only queries against the
//! workflow manager:
//!
//! - **lookup_run_by_portal_id**: the workflow run a WES analysis belongs to
//! - **lookup_latest_payload**: the most recent payload recorded for that run
//!
//! ## Backends
//!
//! - [`InMemoryWorkflowRegistry`] for tests and offline replay of fixtures
//! - [`HttpWorkflowRegistry`] for the workflow manager REST API

#![deny(unsafe_code)]

pub mod error;
pub mod http;
pub mod memory;
pub mod registry;

// Re-exports
pub use error::{RegistryError, Result};
pub use http::{HttpRegistryConfig, HttpWorkflowRegistry};
pub use memory::{InMemoryWorkflowRegistry, RegistryFixture};
pub use registry::WorkflowRegistry;
