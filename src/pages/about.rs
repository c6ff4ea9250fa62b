//! The About page: static informational content, no network, no persisted
//! state.

/// State owned by the About page (none beyond its existence).
#[derive(Debug, Default)]
pub struct AboutPage;

impl AboutPage {
    /// Construct the page.
    #[must_use]
    pub fn new() -> Self {
        AboutPage
    }

    /// Nothing to release, but the lifecycle contract holds for every
    /// variant. Safe to call more than once.
    pub fn teardown(&mut self) {}
}

/// Lines rendered by the About page.
pub const ABOUT_TEXT: &[&str] = &[
    "Ladle is a terminal recipe browser.",
    "",
    "Search the recipe directory by ingredient, e.g. +eggs,-onions,flour.",
    "Results load incrementally as you scroll toward the bottom.",
    "Press f on a result to favorite it; favorites persist across sessions.",
];
