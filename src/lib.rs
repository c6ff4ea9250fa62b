//! Library entry for Ladle exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod events;
pub mod favorites;
pub mod logic;
pub mod net;
pub mod pages;
pub mod paths;
pub mod state;
pub mod ui;
pub mod util;
