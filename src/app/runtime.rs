//! Runtime: channel plumbing, background workers, and the event loop.
//!
//! Everything that mutates [`AppState`] happens on the event-loop task; the
//! input pump and the search worker only talk to it over channels. The tick
//! branch doubles as the proximity monitor.

use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::config::Settings;
use crate::favorites::Favorites;
use crate::net::QueryClient;
use crate::pages::Page;
use crate::state::{AppState, PageResults, QueryInput, Route};
use crate::ui::ui;
use crate::{events, logic, paths};

use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Channel endpoints owned by the event loop.
struct Channels {
    event_rx: mpsc::UnboundedReceiver<CEvent>,
    query_tx: mpsc::UnboundedSender<QueryInput>,
    results_rx: mpsc::UnboundedReceiver<PageResults>,
    net_err_rx: mpsc::UnboundedReceiver<(u64, String)>,
}

/// What: Spawn the blocking task that pumps terminal events into a channel.
///
/// Inputs:
/// - `event_tx`: Destination channel
///
/// Details:
/// - Uses a short poll timeout so the task notices channel closure and exits
///   when the event loop is done.
fn spawn_input_pump(event_tx: mpsc::UnboundedSender<CEvent>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event_tx.is_closed() {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal event read failed");
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    break;
                }
            }
        }
    });
}

/// What: Spawn the background worker that serves page requests.
///
/// Inputs:
/// - `query_rx`: Incoming page requests
/// - `results_tx`: Successful pages, echoing id and page number
/// - `net_err_tx`: Failures as `(id, message)`
/// - `client`: The recipe directory client
///
/// Details:
/// - Requests are served one at a time, which is what guarantees pages are
///   appended in cursor order; the event loop's in-flight guard ensures it
///   never queues overlapping fetches for the same search.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    results_tx: mpsc::UnboundedSender<PageResults>,
    net_err_tx: mpsc::UnboundedSender<(u64, String)>,
    client: QueryClient,
) {
    tokio::spawn(async move {
        while let Some(q) = query_rx.recv().await {
            match client.search(&q.text, q.page).await {
                Ok(items) => {
                    let _ = results_tx.send(PageResults {
                        id: q.id,
                        page: q.page,
                        items,
                    });
                }
                Err(e) => {
                    tracing::warn!(id = q.id, page = q.page, error = %e, "search request failed");
                    let _ = net_err_tx.send((q.id, e.to_string()));
                }
            }
        }
    });
}

/// What: Run the application to completion.
///
/// Inputs:
/// - `args`: Parsed command line
///
/// Output:
/// - Returns after the user quits; the terminal is restored and dirty
///   favorites state is flushed on the way out.
pub async fn run(args: Args) -> Result<()> {
    let settings = Settings::load(&paths::settings_path());
    let favorites = Favorites::load(paths::favorites_path());
    tracing::info!(favorites = favorites.len(), api = %settings.api_url, "state loaded");

    let mut app = AppState::new(settings, favorites);
    app.router.navigate(Route::Search, &app.favorites);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (results_tx, results_rx) = mpsc::unbounded_channel();
    let (net_err_tx, net_err_rx) = mpsc::unbounded_channel();
    let mut channels = Channels {
        event_rx,
        query_tx,
        results_rx,
        net_err_rx,
    };

    spawn_input_pump(event_tx);
    spawn_search_worker(
        query_rx,
        results_tx,
        net_err_tx,
        QueryClient::new(app.settings.api_url.clone()),
    );

    // An initial query from the command line is submitted as if typed.
    if let Some(q) = args.query.clone() {
        if let Some(Page::Search(sp)) = app.router.current_mut() {
            sp.input = q;
        }
        logic::submit_query(&mut app, &channels.query_tx);
    }

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut tick =
        tokio::time::interval(Duration::from_millis(app.settings.poll_interval_ms.max(1)));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui(f, &mut app))?;
        if process_messages(&mut app, &mut channels, &mut tick).await {
            break;
        }
    }

    // Teardown cancels the poll cycle; a late worker response has nowhere to
    // land once the loop is gone.
    app.router.shutdown();
    app.favorites.flush_if_dirty();
    restore_terminal()?;
    Ok(())
}

/// What: Wait for and process a single message from any source.
///
/// Output: `true` when the event loop should exit.
async fn process_messages(
    app: &mut AppState,
    channels: &mut Channels,
    tick: &mut tokio::time::Interval,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            events::handle_event(ev, app, &channels.query_tx)
        }
        Some(res) = channels.results_rx.recv() => {
            logic::handle_page_results(app, res);
            false
        }
        Some((id, message)) = channels.net_err_rx.recv() => {
            logic::handle_search_error(app, id, &message);
            false
        }
        _ = tick.tick() => {
            logic::maybe_poll(app, &channels.query_tx);
            false
        }
    }
}
