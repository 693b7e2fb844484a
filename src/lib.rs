// Library exports for the Battlesnake bot
// This allows integration tests and other utilities to use the core decision logic

pub mod bot;
pub mod config;
pub mod grid;
pub mod search;
pub mod types;
