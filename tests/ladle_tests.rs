//! End-to-end scenarios driven through the public crate API: the pagination
//! state machine, the favorites store, and the page lifecycle, without any
//! network access.

use ladle as crate_root;

use crate_root::favorites::Favorites;
use crate_root::logic;
use crate_root::net::sanitize_query;
use crate_root::pages::Page;
use crate_root::state::{AppState, FetchPhase, PageResults, QueryInput, Recipe, Route};

use tokio::sync::mpsc;

fn recipe(href: &str) -> Recipe {
    Recipe::from_api("A recipe", href, "eggs,flour,butter", "")
}

fn page_of(n: usize, page: u32) -> Vec<Recipe> {
    (0..n).map(|i| recipe(&format!("/p{page}/{i}"))).collect()
}

fn app_with_temp_store() -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = AppState::default();
    app.favorites = Favorites::new(dir.path().join("favorites.json"));
    app.router.navigate(Route::Search, &app.favorites);
    (dir, app)
}

fn search_page(app: &mut AppState) -> &mut crate_root::pages::SearchPage {
    match app.router.current_mut() {
        Some(Page::Search(sp)) => sp,
        _ => panic!("expected search page"),
    }
}

fn submit(app: &mut AppState, tx: &mpsc::UnboundedSender<QueryInput>, text: &str) {
    search_page(app).input = text.to_string();
    logic::submit_query(app, tx);
}

/// Open the settle guard as the tick would once the delay elapses.
fn open_guard(app: &mut AppState) {
    search_page(app).poll.settle_until = None;
}

#[test]
fn sanitize_properties() {
    // Documented example
    assert_eq!(sanitize_query("  +Eggs, -Onions!! "), "+Eggs,-Onions");
    // Character-set and trim properties over assorted inputs
    for raw in [
        "",
        "   ",
        "eggs",
        "  spaced out  ",
        "digits123",
        "+a,-b,c",
        "!@#$%^&*()",
        "tabs\tand\nnewlines",
    ] {
        let out = sanitize_query(raw);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_alphabetic() || matches!(c, '+' | ',' | '-')),
            "invalid char survived in {out:?}"
        );
        assert_eq!(out, out.trim());
        // Idempotence
        assert_eq!(sanitize_query(&out), out);
    }
}

#[test]
fn pagination_monotonicity() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (_dir, mut app) = app_with_temp_store();

    submit(&mut app, &tx, "eggs");
    let q1 = rx.try_recv().expect("page 1 request");
    assert_eq!((q1.page, q1.text.as_str()), (1, "eggs"));
    logic::handle_page_results(
        &mut app,
        PageResults {
            id: q1.id,
            page: 1,
            items: page_of(3, 1),
        },
    );

    // Three more successful request_more cycles
    for expect_page in 2..=4u32 {
        open_guard(&mut app);
        logic::request_more(&mut app, &tx);
        let q = rx.try_recv().expect("next page request");
        assert_eq!(q.page, expect_page);
        logic::handle_page_results(
            &mut app,
            PageResults {
                id: q.id,
                page: q.page,
                items: page_of(3, q.page),
            },
        );
    }

    let sp = search_page(&mut app);
    assert_eq!(sp.cursor, 4);
    assert_eq!(sp.phase, FetchPhase::Idle);
    // Accumulated results equal the concatenation of pages 1..=4 in order
    let hrefs: Vec<&str> = sp.list.recipes.iter().map(|r| r.href.as_str()).collect();
    let expected: Vec<String> = (1..=4u32)
        .flat_map(|p| (0..3).map(move |i| format!("/p{p}/{i}")))
        .collect();
    assert_eq!(hrefs, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn favorites_set_list_consistency_over_random_ops() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut favs = Favorites::new(dir.path().join("favorites.json"));
    let hrefs = ["/r/1", "/r/2", "/r/3", "/r/4"];
    // A fixed mixed sequence of adds and removes, some redundant
    let ops: &[(&str, bool)] = &[
        ("/r/1", true),
        ("/r/2", true),
        ("/r/1", true),
        ("/r/2", false),
        ("/r/3", true),
        ("/r/2", false),
        ("/r/4", true),
        ("/r/1", false),
        ("/r/3", false),
    ];
    for (href, add) in ops {
        if *add {
            favs.add(&recipe(href));
        } else {
            favs.remove(href);
        }
        assert!(favs.is_consistent(), "desync after op on {href}");
    }
    assert!(favs.contains("/r/4"));
    for h in &hrefs[..3] {
        assert!(!favs.contains(h));
    }
}

#[test]
fn teardown_idempotent_for_all_variants() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut favs = Favorites::new(dir.path().join("favorites.json"));
    favs.add(&recipe("/r/1"));

    let mut app = AppState::default();
    app.favorites = favs;
    for route in [Route::Search, Route::Favorites, Route::About] {
        app.router.navigate(route, &app.favorites);
        let page = app.router.current_mut().expect("live page");
        page.teardown();
        page.teardown();
        match page {
            Page::Search(sp) => assert!(sp.list.is_empty() && !sp.poll.active),
            Page::Favorites(fp) => assert!(fp.list.is_empty()),
            Page::About(_) => {}
        }
    }
}

#[test]
fn scenario_a_exhaustion_after_full_first_page() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (_dir, mut app) = app_with_temp_store();

    submit(&mut app, &tx, "eggs");
    let q1 = rx.try_recv().expect("page 1 request");
    logic::handle_page_results(
        &mut app,
        PageResults {
            id: q1.id,
            page: 1,
            items: page_of(20, 1),
        },
    );
    {
        let sp = search_page(&mut app);
        assert_eq!(sp.list.len(), 20);
        assert_eq!(sp.cursor, 1);
        assert_eq!(sp.phase, FetchPhase::Idle);
        // Scroll near the bottom
        sp.list.state.select(Some(19));
        sp.poll.settle_until = None;
    }

    logic::request_more(&mut app, &tx);
    let q2 = rx.try_recv().expect("page 2 request");
    assert_eq!(q2.page, 2);
    logic::handle_page_results(
        &mut app,
        PageResults {
            id: q2.id,
            page: 2,
            items: Vec::new(),
        },
    );

    let sp = search_page(&mut app);
    assert_eq!(sp.list.len(), 20, "empty page must not disturb results");
    assert_eq!(sp.phase, FetchPhase::Exhausted);
    assert!(!sp.poll.active, "polling stops on exhaustion");
    assert!(!sp.no_results, "no-results is reserved for an initial empty fetch");

    // A further request_more is a no-op
    logic::request_more(&mut app, &tx);
    assert!(rx.try_recv().is_err());
}

#[test]
fn scenario_b_initial_empty_fetch_shows_no_results() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (_dir, mut app) = app_with_temp_store();

    submit(&mut app, &tx, "butter");
    let q1 = rx.try_recv().expect("page 1 request");
    logic::handle_page_results(
        &mut app,
        PageResults {
            id: q1.id,
            page: 1,
            items: Vec::new(),
        },
    );

    let sp = search_page(&mut app);
    assert!(sp.list.is_empty());
    assert!(sp.no_results);
    assert_eq!(sp.phase, FetchPhase::Exhausted);
    assert!(!sp.poll.active, "polling halted immediately");

    // No proximity fetch is ever issued
    logic::request_more(&mut app, &tx);
    assert!(rx.try_recv().is_err());
}

#[test]
fn scenario_c_favorite_navigate_unfavorite() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (_dir, mut app) = app_with_temp_store();

    // Favorite a search result
    submit(&mut app, &tx, "eggs");
    let q1 = rx.try_recv().expect("page 1 request");
    logic::handle_page_results(
        &mut app,
        PageResults {
            id: q1.id,
            page: 1,
            items: vec![recipe("/r/123")],
        },
    );
    let selected = search_page(&mut app).list.selected().cloned().expect("selected");
    assert!(logic::toggle_favorite(&mut app.favorites, &selected));
    assert!(app.favorites.contains("/r/123"));
    assert_eq!(app.favorites.len(), 1);

    // Navigate to Favorites: exactly that record, no network call
    app.router.navigate(Route::Favorites, &app.favorites);
    {
        let Some(Page::Favorites(fp)) = app.router.current() else {
            panic!("expected favorites page");
        };
        assert_eq!(fp.list.len(), 1);
        assert_eq!(fp.list.recipes[0].href, "/r/123");
    }
    assert!(rx.try_recv().is_err(), "favorites page must not fetch");

    // Unfavorite from the Favorites page
    let shown = match app.router.current() {
        Some(Page::Favorites(fp)) => fp.list.selected().cloned().expect("selected"),
        _ => panic!("expected favorites page"),
    };
    assert!(!logic::toggle_favorite(&mut app.favorites, &shown));
    if let Some(Page::Favorites(fp)) = app.router.current_mut() {
        let favs = &app.favorites;
        fp.refresh(favs);
    }

    assert!(!app.favorites.contains("/r/123"));
    assert!(app.favorites.is_empty());
    let Some(Page::Favorites(fp)) = app.router.current() else {
        panic!("expected favorites page");
    };
    assert!(fp.list.is_empty());
}

#[test]
fn favorites_survive_reload_like_a_new_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("favorites.json");
    {
        let mut favs = Favorites::new(path.clone());
        favs.add(&recipe("/r/keep"));
    }
    let favs = Favorites::load(path);
    assert!(favs.contains("/r/keep"));
    assert_eq!(favs.records()[0].href, "/r/keep");
}
