//! The proximity monitor: a fixed-interval tick that triggers the next page
//! fetch once the selection nears the bottom of the accumulated results.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::pages::{Page, SearchPage};
use crate::state::{AppState, FetchPhase, QueryInput};

/// What: Decide whether this tick should request the next page.
///
/// Inputs:
/// - `sp`: The Search page
/// - `proximity_rows`: Distance threshold from the bottom of the list
/// - `now`: Current instant (injected for testability)
///
/// Output:
/// - `true` only when the poll cycle is active, no fetch is in flight, the
///   settle guard has reopened, and the selection is within the threshold.
#[must_use]
pub fn should_request_more(sp: &SearchPage, proximity_rows: usize, now: Instant) -> bool {
    sp.poll.active
        && sp.phase == FetchPhase::Idle
        && sp.poll.ready(now)
        && sp.list.near_bottom(proximity_rows)
}

/// What: Run one proximity check (called from the runtime's tick).
///
/// Inputs:
/// - `app`: Application state
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - Calls `request_more` when the check passes; otherwise does nothing.
///   Pages other than Search never poll.
pub fn maybe_poll(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let threshold = app.settings.proximity_rows;
    let Some(Page::Search(sp)) = app.router.current() else {
        return;
    };
    if should_request_more(sp, threshold, Instant::now()) {
        super::search::request_more(app, query_tx);
    }
}
