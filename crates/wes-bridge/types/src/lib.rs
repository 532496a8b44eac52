//! Event model for the dragen-wgts-rna WES bridge
//!
//! The bridge sits between the workflow manager and the ICAv2 WES service.
//! Two event shapes flow through it in opposite directions:
//!
//! - **Ready → WES request**: the `inputs` of a READY workflow run state
//!   change become the `inputs` of an ICAv2 WES request, with file-bearing
//!   URIs wrapped as [`FileReference`]s and every key in snake_case.
//! - **WES state change → workflow run update**: an
//!   [`ExecutionStateChangeEvent`] is merged with the [`WorkflowRunRecord`]
//!   and latest [`Payload`] held by the workflow registry into a
//!   [`WorkflowRunUpdateEvent`].
//!
//! Free-form sub-documents (inputs, engine parameters, tags, libraries) are
//! kept as `serde_json` values so that keys this crate does not know about
//! pass through verbatim.

#![deny(unsafe_code)]

mod error;
pub mod events;
mod execution;
mod file_reference;
mod payload;
mod update;
mod workflow_run;

pub use error::*;
pub use events::EventEnvelope;
pub use execution::*;
pub use file_reference::*;
pub use payload::*;
pub use update::*;
pub use workflow_run::*;
