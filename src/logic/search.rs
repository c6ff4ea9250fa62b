//! Pagination state machine for the Search page.
//!
//! Transitions: `Idle -> Fetching(1)` on submit, `Fetching(n) -> Idle` on a
//! non-empty page (cursor advances to `n`), `Fetching(n) -> Exhausted` on an
//! empty page, `Fetching(n) -> Idle` (cursor untouched) on failure so the
//! poll cycle naturally retries the same page. Responses are correlated by a
//! monotonically increasing request id; anything stale — an old search, a
//! torn-down page, a phase mismatch — is discarded without touching state.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::favorites::Favorites;
use crate::net::sanitize_query;
use crate::pages::{Page, PollingState};
use crate::state::{AppState, FetchPhase, PageResults, QueryInput, Recipe};

/// What: Start a new search from the Search page's input text.
///
/// Inputs:
/// - `app`: Application state; the live page must be the Search variant
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - Clears accumulated results, resets the cursor to 1, enters
///   `Fetching(1)`, starts the poll cycle, and sends the page-1 request with
///   a fresh id (which also invalidates any in-flight fetch of the previous
///   search).
pub fn submit_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let Some(Page::Search(sp)) = app.router.current_mut() else {
        return;
    };
    sp.querystring = sanitize_query(&sp.input);
    sp.list.clear();
    sp.no_results = false;
    sp.cursor = 1;
    sp.phase = FetchPhase::Fetching(1);
    sp.poll = PollingState::started();
    let text = sp.querystring.clone();

    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.status = None;
    tracing::info!(id, query = %text, "search submitted");
    let _ = query_tx.send(QueryInput { id, text, page: 1 });
}

/// What: Request the next page (invoked by the proximity poll).
///
/// Inputs:
/// - `app`: Application state
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - No-op unless the live page is Search, polling is active, and the phase
///   is `Idle`. Otherwise enters `Fetching(cursor + 1)` — or retries page 1
///   when nothing has been appended yet — and sends the request.
pub fn request_more(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let Some(Page::Search(sp)) = app.router.current_mut() else {
        return;
    };
    if !sp.poll.active || sp.phase != FetchPhase::Idle {
        return;
    }
    let next = if sp.list.is_empty() { 1 } else { sp.cursor + 1 };
    sp.phase = FetchPhase::Fetching(next);
    let text = sp.querystring.clone();

    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    tracing::debug!(id, page = next, "requesting next page");
    let _ = query_tx.send(QueryInput {
        id,
        text,
        page: next,
    });
}

/// What: Fold one page of results into the state machine.
///
/// Inputs:
/// - `app`: Application state
/// - `res`: Worker response (id, page, items)
///
/// Output:
/// - For the live request only: appends a non-empty page (cursor advances,
///   back to `Idle`) or marks `Exhausted` on an empty one, stopping the poll
///   cycle. An empty FIRST page additionally sets the "no results" display
///   state. Stale responses are dropped.
pub fn handle_page_results(app: &mut AppState, res: PageResults) {
    if res.id != app.latest_query_id {
        tracing::debug!(id = res.id, latest = app.latest_query_id, "dropping stale results");
        return;
    }
    let settle = Duration::from_millis(app.settings.settle_ms);
    let Some(Page::Search(sp)) = app.router.current_mut() else {
        return;
    };
    let FetchPhase::Fetching(expected) = sp.phase else {
        return;
    };
    if res.page != expected {
        return;
    }

    // Reopen the poll guard only after the settle delay so rendering can
    // extend the list before the next trigger.
    sp.poll.settle(Instant::now(), settle);

    if res.items.is_empty() {
        sp.phase = FetchPhase::Exhausted;
        sp.poll.stop();
        if sp.list.is_empty() {
            sp.no_results = true;
        }
        tracing::info!(page = res.page, "search exhausted");
    } else {
        tracing::info!(page = res.page, count = res.items.len(), "page appended");
        sp.list.append(res.items);
        sp.cursor = res.page;
        sp.phase = FetchPhase::Idle;
    }
}

/// What: Fold a fetch failure into the state machine.
///
/// Inputs:
/// - `app`: Application state
/// - `id`: Request id the failure belongs to
/// - `message`: Human-readable error
///
/// Output:
/// - For the live request only: back to `Idle` without advancing the cursor,
///   so the poll cycle retries the same page while the user stays near the
///   bottom. No automatic retry or backoff beyond the settle delay.
pub fn handle_search_error(app: &mut AppState, id: u64, message: &str) {
    if id != app.latest_query_id {
        return;
    }
    let settle = Duration::from_millis(app.settings.settle_ms);
    app.status = Some(format!("Search failed: {message}"));
    let Some(Page::Search(sp)) = app.router.current_mut() else {
        return;
    };
    if let FetchPhase::Fetching(page) = sp.phase {
        tracing::warn!(page, error = %message, "page fetch failed");
        sp.phase = FetchPhase::Idle;
        sp.poll.settle(Instant::now(), settle);
    }
}

/// What: Flip the favorited state of a recipe.
///
/// Inputs:
/// - `favorites`: The process-wide store
/// - `recipe`: The rendered recipe whose toggle was activated
///
/// Output:
/// - `true` when the recipe is favorited after the call, `false` when it was
///   removed. The store persists either way.
pub fn toggle_favorite(favorites: &mut Favorites, recipe: &Recipe) -> bool {
    if favorites.contains(&recipe.href) {
        favorites.remove(&recipe.href);
        false
    } else {
        favorites.add(recipe);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Route;

    fn search_app() -> AppState {
        let mut app = AppState::default();
        app.router.navigate(Route::Search, &app.favorites);
        app
    }

    fn page(n: usize, prefix: &str) -> Vec<Recipe> {
        (0..n)
            .map(|i| Recipe::from_api("R", &format!("{prefix}/{i}"), "a,b", ""))
            .collect()
    }

    fn sp(app: &mut AppState) -> &mut crate::pages::SearchPage {
        match app.router.current_mut() {
            Some(Page::Search(sp)) => sp,
            _ => panic!("expected search page"),
        }
    }

    #[test]
    /// What: Submit sanitizes the input, resets pagination, and fetches page 1
    ///
    /// - Input: Input text with junk characters
    /// - Output: Fetching(1), cursor 1, poll active, sanitized request on the channel
    fn submit_resets_and_fetches_page_one() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = search_app();
        sp(&mut app).input = "  +Eggs, -Onions!! ".to_string();
        submit_query(&mut app, &tx);

        let q = rx.try_recv().expect("query sent");
        assert_eq!(q.text, "+Eggs,-Onions");
        assert_eq!(q.page, 1);
        assert_eq!(q.id, app.latest_query_id);
        let sp = sp(&mut app);
        assert_eq!(sp.phase, FetchPhase::Fetching(1));
        assert_eq!(sp.cursor, 1);
        assert!(sp.poll.active);
    }

    #[test]
    /// What: request_more is a no-op unless Idle with an active poll
    ///
    /// - Input: States Fetching, Exhausted, and poll-inactive
    /// - Output: Nothing sent in any of them
    fn request_more_guards() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = search_app();

        sp(&mut app).phase = FetchPhase::Fetching(1);
        sp(&mut app).poll = PollingState::started();
        request_more(&mut app, &tx);
        assert!(rx.try_recv().is_err());

        sp(&mut app).phase = FetchPhase::Exhausted;
        request_more(&mut app, &tx);
        assert!(rx.try_recv().is_err());

        sp(&mut app).phase = FetchPhase::Idle;
        sp(&mut app).poll.stop();
        request_more(&mut app, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Pages append in cursor order and the cursor tracks the last success
    ///
    /// - Input: Submit, page 1 of 2 items, request_more, page 2 of 2 items
    /// - Output: 4 accumulated recipes in order, cursor 2, Idle
    fn pagination_appends_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = search_app();
        sp(&mut app).input = "eggs".to_string();
        submit_query(&mut app, &tx);
        let q1 = rx.try_recv().expect("page 1 request");
        handle_page_results(
            &mut app,
            PageResults {
                id: q1.id,
                page: 1,
                items: page(2, "/p1"),
            },
        );
        assert_eq!(sp(&mut app).cursor, 1);
        assert_eq!(sp(&mut app).phase, FetchPhase::Idle);

        // Guard is settling; force it open as the tick would after settle_ms.
        sp(&mut app).poll.settle_until = None;
        request_more(&mut app, &tx);
        let q2 = rx.try_recv().expect("page 2 request");
        assert_eq!(q2.page, 2);
        handle_page_results(
            &mut app,
            PageResults {
                id: q2.id,
                page: 2,
                items: page(2, "/p2"),
            },
        );

        let sp = sp(&mut app);
        assert_eq!(sp.cursor, 2);
        let hrefs: Vec<&str> = sp.list.recipes.iter().map(|r| r.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/p1/0", "/p1/1", "/p2/0", "/p2/1"]);
    }

    #[test]
    /// What: Stale responses (old id) are discarded
    ///
    /// - Input: Submit twice, then results echoing the first id
    /// - Output: No items appended; phase still Fetching for the new search
    fn stale_results_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = search_app();
        sp(&mut app).input = "eggs".to_string();
        submit_query(&mut app, &tx);
        let old = rx.try_recv().expect("first request");
        sp(&mut app).input = "butter".to_string();
        submit_query(&mut app, &tx);

        handle_page_results(
            &mut app,
            PageResults {
                id: old.id,
                page: 1,
                items: page(3, "/stale"),
            },
        );
        let sp = sp(&mut app);
        assert!(sp.list.is_empty());
        assert_eq!(sp.phase, FetchPhase::Fetching(1));
    }

    #[test]
    /// What: A fetch failure returns to Idle without advancing the cursor
    ///
    /// - Input: Failure while Fetching(2) after one appended page
    /// - Output: Idle, cursor still 1, next request_more retries page 2
    fn failure_retries_same_page() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = search_app();
        sp(&mut app).input = "eggs".to_string();
        submit_query(&mut app, &tx);
        let q1 = rx.try_recv().expect("page 1 request");
        handle_page_results(
            &mut app,
            PageResults {
                id: q1.id,
                page: 1,
                items: page(2, "/p1"),
            },
        );
        sp(&mut app).poll.settle_until = None;
        request_more(&mut app, &tx);
        let q2 = rx.try_recv().expect("page 2 request");
        handle_search_error(&mut app, q2.id, "connection reset");

        assert_eq!(sp(&mut app).phase, FetchPhase::Idle);
        assert_eq!(sp(&mut app).cursor, 1);
        assert!(app.status.as_deref().is_some_and(|s| s.contains("connection reset")));

        sp(&mut app).poll.settle_until = None;
        request_more(&mut app, &tx);
        let retry = rx.try_recv().expect("retry request");
        assert_eq!(retry.page, 2);
    }

    #[test]
    /// What: Toggle favorites flips membership both ways
    ///
    /// - Input: Toggle the same recipe twice
    /// - Output: Favorited then unfavorited; store consistent throughout
    fn toggle_favorite_flips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut favs = Favorites::new(dir.path().join("favorites.json"));
        let r = Recipe::from_api("R", "/r/123", "a,b", "");
        assert!(toggle_favorite(&mut favs, &r));
        assert!(favs.contains("/r/123"));
        assert!(!toggle_favorite(&mut favs, &r));
        assert!(!favs.contains("/r/123"));
        assert!(favs.is_consistent());
    }
}
