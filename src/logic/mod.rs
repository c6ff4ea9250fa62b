//! Search orchestration: the pagination state machine and the scroll-poll
//! trigger.

pub mod poll;
pub mod search;

pub use poll::{maybe_poll, should_request_more};
pub use search::{
    handle_page_results, handle_search_error, request_more, submit_query, toggle_favorite,
};
