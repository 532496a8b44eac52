//! WES bridge translations
//!
//! ```text
//!   READY workflow run state change          ICAv2 WES analysis state change
//!              │                                          │
//!              ▼                                          ▼
//!   ┌─────────────────────┐                 ┌───────────────────────────┐
//!   │  build_request      │                 │  StateChangeTranslator    │ ← WorkflowRegistry
//!   │  (pure)             │                 │  (two registry lookups)   │
//!   └──────────┬──────────┘                 └─────────────┬─────────────┘
//!              ▼                                          ▼
//!     Icav2WesRequest inputs                     WorkflowRunUpdate event
//! ```
//!
//! Both directions are stateless: every invocation builds its output from
//! the inbound event (and, for state changes, the registry) alone.

#![deny(unsafe_code)]

pub mod case;
pub mod clock;
pub mod handler;
pub mod outputs;
pub mod request;
pub mod translator;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use case::{snake_case_keys, to_snake_case};
pub use clock::{format_event_timestamp, Clock, FixedClock, SystemClock};
pub use handler::{handle_ready_event, handle_state_change_event};
pub use outputs::RnaVariantCallingOutputs;
pub use request::build_request;
pub use translator::{rename_workflow_keys, StateChangeTranslator};
