//! Durable favorites store.
//!
//! Favorites are kept as an ordered list of [`FavoriteRecord`] (the persisted
//! truth and the render order of the Favorites page) plus a derived set of
//! hrefs for O(1) membership checks. Every mutation updates both and writes
//! through to disk. Storage failures never crash a page: a bad read yields an
//! empty collection, a bad write leaves the in-memory state authoritative for
//! the rest of the session.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::state::{FavoriteRecord, Recipe};

/// The favorites collection and its persistence location.
#[derive(Debug)]
pub struct Favorites {
    /// Ordered records, oldest first. Source of truth for persistence.
    records: Vec<FavoriteRecord>,
    /// Derived membership set; always exactly the hrefs in `records`.
    hrefs: HashSet<String>,
    /// Where the JSON list is written.
    path: PathBuf,
    /// Set when an earlier write failed; retried at shutdown.
    dirty: bool,
}

impl Favorites {
    /// Empty collection persisting to `path`. Does not touch the disk.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Favorites {
            records: Vec::new(),
            hrefs: HashSet::new(),
            path,
            dirty: false,
        }
    }

    /// What: Load the persisted favorites list.
    ///
    /// Inputs:
    /// - `path`: Location of `favorites.json`
    ///
    /// Output:
    /// - The deserialized collection; a missing, unreadable, or corrupt file
    ///   yields an empty collection (logged, never an error).
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let records: Vec<FavoriteRecord> = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "corrupt favorites file; starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read favorites; starting empty");
                Vec::new()
            }
        };
        let hrefs = records.iter().map(|r| r.href.clone()).collect();
        Favorites {
            records,
            hrefs,
            path,
            dirty: false,
        }
    }

    /// Whether `href` is currently favorited.
    #[must_use]
    pub fn contains(&self, href: &str) -> bool {
        self.hrefs.contains(href)
    }

    /// What: Favorite a recipe.
    ///
    /// Inputs:
    /// - `recipe`: The live recipe to snapshot
    ///
    /// Output:
    /// - Appends a [`FavoriteRecord`], updates the membership set, persists.
    ///
    /// Details:
    /// - Adding an already-favorited href is a no-op; the list never holds
    ///   duplicate hrefs.
    pub fn add(&mut self, recipe: &Recipe) {
        if !self.hrefs.insert(recipe.href.clone()) {
            return;
        }
        self.records.push(FavoriteRecord::from(recipe));
        self.dirty = true;
        self.persist();
    }

    /// What: Unfavorite by href.
    ///
    /// Inputs:
    /// - `href`: Identity key of the recipe
    ///
    /// Output:
    /// - Removes all records with that href, updates the set, persists.
    pub fn remove(&mut self, href: &str) {
        if !self.hrefs.remove(href) {
            return;
        }
        self.records.retain(|r| r.href != href);
        self.dirty = true;
        self.persist();
    }

    /// What: Write the record list to disk as JSON.
    ///
    /// Output:
    /// - Clears the dirty flag on success. A failed write is logged and the
    ///   flag stays set so the shutdown flush retries once.
    pub fn persist(&mut self) {
        let Ok(json) = serde_json::to_string(&self.records) else {
            return;
        };
        match std::fs::write(&self.path, &json) {
            Ok(()) => {
                self.dirty = false;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to persist favorites");
            }
        }
    }

    /// Flush to disk if a previous write failed.
    pub fn flush_if_dirty(&mut self) {
        if self.dirty {
            self.persist();
        }
    }

    /// The favorites as renderable recipes, in favoriting order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Recipe> {
        self.records.iter().map(Recipe::from).collect()
    }

    /// Ordered record list.
    #[must_use]
    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    /// Number of favorited recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no recipes are favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Membership-set consistency check: the set equals exactly the hrefs in
    /// the record list. Used by tests after every mutation.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let from_list: HashSet<&str> = self.records.iter().map(|r| r.href.as_str()).collect();
        from_list.len() == self.hrefs.len() && from_list.iter().all(|h| self.hrefs.contains(*h))
    }
}
