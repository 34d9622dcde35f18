//! Page bindings for the venue and artist listings
//!
//! Maps clicks on the server-rendered controls to [`PageCommand`]s. Nothing
//! here performs IO; see [`crate::runtime`] for executing commands.

use tracing::warn;

use crate::dom::{BindingId, Delegator, Element, Selector, CLICK};
use crate::routes::Route;

/// Id of the venue edit control
pub const EDIT_VENUE_ID: &str = "edit-venue";

/// Id of the artist edit control
pub const EDIT_ARTIST_ID: &str = "edit-artist";

/// Class shared by every venue delete button
pub const DELETE_VENUE_CLASS: &str = "venue-btn-delete";

/// Venue referenced by a delete control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueTarget {
    pub id: String,
    pub name: String,
}

impl VenueTarget {
    /// Text shown in the confirmation dialog
    pub fn confirmation_message(&self) -> String {
        format!("Are you sure you want to delete the venue {}?", self.name)
    }

    pub fn route(&self) -> Route {
        Route::Venue {
            id: self.id.clone(),
        }
    }
}

/// What a click on one of the page controls asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageCommand {
    /// Replace the current location
    Navigate(Route),

    /// Confirm with the user, then delete the venue
    DeleteVenue(VenueTarget),
}

/// Decide the command for a click on the venue edit control
pub fn edit_venue<E: Element>(element: &E) -> Option<PageCommand> {
    Some(PageCommand::Navigate(Route::EditVenue {
        id: read_data(element, "id"),
    }))
}

/// Decide the command for a click on a venue delete button
pub fn delete_venue<E: Element>(element: &E) -> Option<PageCommand> {
    Some(PageCommand::DeleteVenue(VenueTarget {
        id: read_data(element, "id"),
        name: read_data(element, "name"),
    }))
}

/// Decide the command for a click on the artist edit control
pub fn edit_artist<E: Element>(element: &E) -> Option<PageCommand> {
    Some(PageCommand::Navigate(Route::EditArtist {
        id: read_data(element, "id"),
    }))
}

/// Register the three page bindings on `delegator`.
///
/// Returns the binding handles in registration order: edit venue, delete
/// venue, edit artist.
pub fn bind_page_handlers<E: Element + 'static>(
    delegator: &mut Delegator<E, PageCommand>,
) -> [BindingId; 3] {
    [
        delegator.on(CLICK, Selector::id(EDIT_VENUE_ID), edit_venue::<E>),
        delegator.on(CLICK, Selector::class(DELETE_VENUE_CLASS), delete_venue::<E>),
        delegator.on(CLICK, Selector::id(EDIT_ARTIST_ID), edit_artist::<E>),
    ]
}

// Identifiers are not validated here; the server answers not-found for bad ones.
fn read_data<E: Element>(element: &E, key: &str) -> String {
    element.data_attr(key).unwrap_or_else(|| {
        warn!(key, "control is missing its data attribute");
        String::new()
    })
}
