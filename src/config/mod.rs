pub mod schema;

pub use schema::{Config, ReplayConfig, TrackerConfig};
