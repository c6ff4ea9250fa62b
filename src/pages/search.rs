//! The Search page: query input, accumulated results, and the scroll-poll
//! cycle state.

use std::time::{Duration, Instant};

use crate::pages::list::RecipeList;
use crate::state::{FetchPhase, Focus};

/// The scroll-triggered fetch cycle's on/off flag and in-flight guard.
///
/// Created when a search begins; torn down with the page or replaced by the
/// next search. The guard stays closed for a settle delay after each batch so
/// rendering can extend the list before the next trigger.
#[derive(Debug, Default)]
pub struct PollingState {
    /// Whether the proximity poll cycle is running at all.
    pub active: bool,
    /// The guard reopens at this instant; `None` means open.
    pub settle_until: Option<Instant>,
}

impl PollingState {
    /// A freshly started poll cycle with an open guard.
    #[must_use]
    pub fn started() -> Self {
        PollingState {
            active: true,
            settle_until: None,
        }
    }

    /// Stop the cycle; no further fetches will be triggered.
    pub fn stop(&mut self) {
        self.active = false;
        self.settle_until = None;
    }

    /// Close the guard for `delay` starting at `now`.
    pub fn settle(&mut self, now: Instant, delay: Duration) {
        self.settle_until = Some(now + delay);
    }

    /// Whether the guard is open at `now`.
    #[must_use]
    pub fn ready(&self, now: Instant) -> bool {
        self.settle_until.is_none_or(|t| now >= t)
    }
}

/// State owned by the Search page.
#[derive(Debug, Default)]
pub struct SearchPage {
    /// Live input text being edited.
    pub input: String,
    /// Sanitized query of the search currently on screen.
    pub querystring: String,
    /// 1-based cursor of the last successfully fetched page.
    pub cursor: u32,
    /// Pagination state machine.
    pub phase: FetchPhase,
    /// Accumulated results.
    pub list: RecipeList,
    /// Scroll-poll cycle state.
    pub poll: PollingState,
    /// Which control receives keys.
    pub focus: Focus,
    /// Set when the FIRST page of a search came back empty.
    pub no_results: bool,
}

impl SearchPage {
    /// A fresh Search page: empty input, no active poll cycle. Polling only
    /// starts with the first submission.
    #[must_use]
    pub fn new() -> Self {
        SearchPage {
            cursor: 1,
            ..SearchPage::default()
        }
    }

    /// What: Release everything the page owns.
    ///
    /// Output:
    /// - Results cleared, poll cycle stopped, phase reset. Safe to call more
    ///   than once.
    pub fn teardown(&mut self) {
        self.list.clear();
        self.poll.stop();
        self.phase = FetchPhase::Idle;
        self.no_results = false;
    }
}
