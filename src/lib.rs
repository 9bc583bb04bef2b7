#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::return_self_not_must_use,
    clippy::uninlined_format_args
)]

//! Bounded, thread-safe tracker for recently seen gossip messages.
//!
//! The [`MessageTracker`] remembers the newest `capacity` messages of a stream
//! keyed by message id, evicting in strict insertion (FIFO) order.

use clap::Subcommand;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod replay;
pub mod tracker;

pub use config::Config;
pub use tracker::{AddOutcome, Message, MessageTracker, TrackerError, TrackerStats};

/// Config management subcommands
#[derive(Subcommand, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Dump the full configuration JSON Schema to stdout
    Schema,
}
