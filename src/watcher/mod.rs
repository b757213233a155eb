mod diff;
mod message;
mod service;

pub use service::{RunOutcome, WatchService};
