pub mod analytics;
pub mod snapshot;
pub mod tracker;
pub mod whales;
