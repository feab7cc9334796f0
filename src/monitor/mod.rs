//! Monitor layer for detecting interface address changes.
//!
//! This module provides types and functions for:
//! - Deciding whether a snapshot should be reported ([`changed`])
//! - Describing what changed for the logs ([`diff`], [`IpChange`])
//! - Running the periodic capture/notify loop ([`PollLoop`])

mod change;
mod poller;

pub use change::{IpChange, IpChangeKind, changed, diff};
pub use poller::{CycleOutcome, PollLoop};
