mod list;
pub mod store;
pub mod types;

pub use store::MessageTracker;
pub use types::{AddOutcome, Message, TrackerError, TrackerStats};
