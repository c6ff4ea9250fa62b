//! Core value types used by Ladle state.

/// Placeholder thumbnail reference used when the API reports none.
pub const DEFAULT_THUMBNAIL: &str = "default://thumbnail";

/// A recipe search result.
///
/// The directory API assigns no stable identifier, so `href` doubles as the
/// identity key for favoriting.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Recipe {
    /// Recipe title (trimmed).
    pub title: String,
    /// Thumbnail URL, or [`DEFAULT_THUMBNAIL`] when the API sent none.
    pub thumbnail: String,
    /// Comma-joined ingredient list as reported by the API.
    pub ingredients: String,
    /// Link to the full recipe; unique within a result set.
    pub href: String,
}

impl Recipe {
    /// What: Build a normalized `Recipe` from raw API fields.
    ///
    /// Inputs:
    /// - `title`, `href`, `ingredients`, `thumbnail`: Raw strings from the API
    ///
    /// Output:
    /// - `Recipe` with the title trimmed and an empty thumbnail replaced by
    ///   the default sentinel.
    #[must_use]
    pub fn from_api(title: &str, href: &str, ingredients: &str, thumbnail: &str) -> Self {
        Recipe {
            title: title.trim().to_string(),
            thumbnail: if thumbnail.is_empty() {
                DEFAULT_THUMBNAIL.to_string()
            } else {
                thumbnail.to_string()
            },
            ingredients: ingredients.to_string(),
            href: href.to_string(),
        }
    }

    /// Number of ingredients, derived from the comma-joined field.
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.split(',').filter(|i| !i.trim().is_empty()).count()
    }
}

/// Persisted snapshot of a favorited recipe.
///
/// Decoupled from any live [`Recipe`] so favorites survive even if the
/// upstream data for that href later disappears.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FavoriteRecord {
    /// Identity key; matches the originating recipe's href.
    pub href: String,
    /// Thumbnail at the time of favoriting.
    pub thumbnail: String,
    /// Ingredients at the time of favoriting.
    pub ingredients: String,
    /// Title at the time of favoriting.
    pub title: String,
}

impl From<&Recipe> for FavoriteRecord {
    fn from(r: &Recipe) -> Self {
        FavoriteRecord {
            href: r.href.clone(),
            thumbnail: r.thumbnail.clone(),
            ingredients: r.ingredients.clone(),
            title: r.title.clone(),
        }
    }
}

impl From<&FavoriteRecord> for Recipe {
    fn from(rec: &FavoriteRecord) -> Self {
        Recipe {
            title: rec.title.clone(),
            thumbnail: rec.thumbnail.clone(),
            ingredients: rec.ingredients.clone(),
            href: rec.href.clone(),
        }
    }
}

/// Navigation destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Home: the ingredient search page.
    Search,
    /// Persisted favorites.
    Favorites,
    /// Static informational page.
    About,
}

impl Route {
    /// All destinations, in tab-bar order.
    pub const ALL: [Route; 3] = [Route::Search, Route::Favorites, Route::About];

    /// Tab label for this destination.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Route::Search => "Search",
            Route::Favorites => "Favorites",
            Route::About => "About",
        }
    }
}

/// Which control on the Search page receives key input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query input line.
    #[default]
    Input,
    /// The results list.
    Results,
}

/// Pagination state machine for an ongoing search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch in flight; the poll cycle may request the next page.
    #[default]
    Idle,
    /// A fetch for the given 1-based page is in flight.
    Fetching(u32),
    /// A page came back empty; there is nothing further to append.
    Exhausted,
}

/// One page request sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate (and discard stale) responses.
    pub id: u64,
    /// Sanitized query text.
    pub text: String,
    /// 1-based page cursor to fetch.
    pub page: u32,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct PageResults {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed page number.
    pub page: u32,
    /// Recipes in API order; empty means the search is exhausted.
    pub items: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: API normalization trims titles and substitutes the default thumbnail
    ///
    /// - Input: Raw fields with padded title and empty thumbnail
    /// - Output: Trimmed title; sentinel thumbnail
    fn recipe_from_api_normalizes() {
        let r = Recipe::from_api("  Omelette \n", "/r/1", "eggs,butter", "");
        assert_eq!(r.title, "Omelette");
        assert_eq!(r.thumbnail, DEFAULT_THUMBNAIL);
        let r2 = Recipe::from_api("Toast", "/r/2", "bread", "http://x/y.jpg");
        assert_eq!(r2.thumbnail, "http://x/y.jpg");
    }

    #[test]
    /// What: Ingredient count splits on commas and skips blanks
    ///
    /// - Input: Comma-joined ingredient strings
    /// - Output: Counts of non-empty entries
    fn recipe_ingredient_count() {
        let r = Recipe::from_api("T", "/r", "eggs, butter, flour", "");
        assert_eq!(r.ingredient_count(), 3);
        let empty = Recipe::from_api("T", "/r", "", "");
        assert_eq!(empty.ingredient_count(), 0);
    }

    #[test]
    /// What: FavoriteRecord round-trips the four snapshot fields
    ///
    /// - Input: A recipe converted to a record and back
    /// - Output: Identical recipe
    fn favorite_record_roundtrip() {
        let r = Recipe::from_api("Soup", "/r/soup", "water,salt", "http://t");
        let rec = FavoriteRecord::from(&r);
        assert_eq!(Recipe::from(&rec), r);
    }
}
