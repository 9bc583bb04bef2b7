//! Feed a JSON Lines stream of messages through a [`MessageTracker`].
//!
//! Each non-blank line is one message object; a literal `null` line stands for
//! an absent message and is rejected like an empty id. Summary counts come
//! from each line's own add outcome, so writers sharing the tracker through
//! other handles do not leak into them.

use crate::config::ReplayConfig;
use crate::tracker::{AddOutcome, Message, MessageTracker};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Outcome of a replay run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Non-blank lines read.
    pub lines: u64,
    /// Messages newly tracked.
    pub accepted: u64,
    /// Messages ignored because their id was already tracked.
    pub duplicates: u64,
    /// Lines that failed to parse or were invalid messages.
    pub rejected: u64,
    /// Tracked messages evicted to make room during the run.
    pub evicted: u64,
}

pub fn replay<R: BufRead>(
    reader: R,
    tracker: &MessageTracker,
    options: &ReplayConfig,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        summary.lines += 1;

        let outcome = serde_json::from_str::<Option<Message>>(trimmed)
            .map_err(anyhow::Error::from)
            .and_then(|message| tracker.add_optional(message).map_err(anyhow::Error::from));

        match outcome {
            Ok(AddOutcome::Inserted { evicted }) => {
                summary.accepted += 1;
                if evicted {
                    summary.evicted += 1;
                }
            }
            Ok(AddOutcome::Duplicate) => summary.duplicates += 1,
            Err(error) => {
                if options.stop_on_error {
                    return Err(error.context(format!("Rejected message on line {line_no}")));
                }
                tracing::warn!(line = line_no, "Skipping rejected message: {error}");
                summary.rejected += 1;
            }
        }
    }

    tracing::info!(
        lines = summary.lines,
        accepted = summary.accepted,
        duplicates = summary.duplicates,
        rejected = summary.rejected,
        evicted = summary.evicted,
        "Replay finished"
    );
    Ok(summary)
}
