//! Route definitions for the pages this crate navigates to

use std::fmt;

/// Locations the page handlers navigate to or send requests against
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Landing page
    Home,

    /// A single venue, the target of `DELETE`
    Venue { id: String },

    /// Venue edit form
    EditVenue { id: String },

    /// Artist edit form
    EditArtist { id: String },
}

impl Route {
    /// Render the URL path for this route.
    ///
    /// Identifiers are inserted as a single percent-encoded segment and are
    /// not otherwise validated; the server decides whether they exist.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Venue { id } => format!("/venues/{}", segment(id)),
            Route::EditVenue { id } => format!("/venues/{}/edit", segment(id)),
            Route::EditArtist { id } => format!("/artists/{}/edit", segment(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
