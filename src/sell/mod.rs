pub mod bot;
pub mod config;
pub mod engine;
pub mod inventory;
