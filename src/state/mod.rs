//! Application state module.
//!
//! Value types live in [`types`]; the central mutable container in
//! [`app_state`]. Public paths are re-exported here so the rest of the crate
//! can use `crate::state::*`.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    DEFAULT_THUMBNAIL, FavoriteRecord, FetchPhase, Focus, PageResults, QueryInput, Recipe, Route,
};
