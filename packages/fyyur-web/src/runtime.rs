//! Executes page commands against the host window and the server.
//!
//! [`PageRuntime`] is the effect side of the page handlers: it owns the
//! host (location, dialogs) and the venue API, and turns each
//! [`PageCommand`] into navigation, a confirmation prompt, or a delete
//! request. Everything runs on the page's single UI thread.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::api::{DeleteOutcome, VenueApi};
use crate::page::{PageCommand, VenueTarget};
use crate::routes::Route;

/// The browser window, as far as the page handlers use it
pub trait PageHost {
    /// Replace the current location (no new history entry)
    fn replace_location(&self, path: &str);

    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;

    /// Blocking notice
    fn alert(&self, message: &str);
}

/// What executing a command did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Navigated(Route),
    /// The user declined the delete confirmation
    Declined,
    /// A delete for the same venue is still outstanding
    AlreadyPending,
    Deleted,
    DeleteFailed(DeleteOutcome),
}

/// Synchronous half of a command, see [`PageRuntime::start`]
#[derive(Debug)]
pub enum Step {
    Done(CommandOutcome),
    /// Confirmed delete; dropping it without finishing releases the venue
    AwaitDelete(PendingDelete),
}

type PendingSet = Rc<RefCell<HashSet<String>>>;

/// A confirmed delete that holds its venue's in-flight mark.
///
/// The mark is released when this is dropped, whether or not the request
/// was ever sent.
pub struct PendingDelete {
    pending: PendingSet,
    target: VenueTarget,
}

impl PendingDelete {
    fn mark(pending: &PendingSet, target: VenueTarget) -> Self {
        pending.borrow_mut().insert(target.id.clone());
        Self {
            pending: Rc::clone(pending),
            target,
        }
    }

    pub fn target(&self) -> &VenueTarget {
        &self.target
    }
}

impl Drop for PendingDelete {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.target.id);
    }
}

impl fmt::Debug for PendingDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PendingDelete").field(&self.target).finish()
    }
}

/// Runs page commands
pub struct PageRuntime<H, A> {
    host: H,
    api: A,
    pending_deletes: PendingSet,
}

impl<H: PageHost, A: VenueApi> PageRuntime<H, A> {
    pub fn new(host: H, api: A) -> Self {
        Self {
            host,
            api,
            pending_deletes: PendingSet::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether a delete for `venue_id` is in flight
    pub fn is_pending(&self, venue_id: &str) -> bool {
        self.pending_deletes.borrow().contains(venue_id)
    }

    /// Run a command to completion
    pub async fn execute(&self, command: PageCommand) -> CommandOutcome {
        match self.start(command) {
            Step::Done(outcome) => outcome,
            Step::AwaitDelete(pending) => self.finish_delete(pending).await,
        }
    }

    /// Run the synchronous half of a command.
    ///
    /// Navigation and the confirmation prompt happen here, inside the click
    /// handler. A confirmed delete is marked in flight and handed back as
    /// [`Step::AwaitDelete`]; the caller must pass it to
    /// [`finish_delete`](Self::finish_delete).
    pub fn start(&self, command: PageCommand) -> Step {
        match command {
            PageCommand::Navigate(route) => Step::Done(self.navigate(route)),
            PageCommand::DeleteVenue(target) => self.confirm_delete(target),
        }
    }

    /// Send a delete confirmed by [`start`](Self::start) and apply its outcome
    pub async fn finish_delete(&self, pending: PendingDelete) -> CommandOutcome {
        let target = pending.target().clone();
        let outcome = self.api.delete_venue(&target).await;
        drop(pending);

        match outcome {
            DeleteOutcome::Success => {
                info!(venue_id = %target.id, "venue deleted");
                self.host.replace_location(&Route::Home.path());
                CommandOutcome::Deleted
            }
            failure => {
                warn!(venue_id = %target.id, outcome = ?failure, "venue delete failed");
                if let Some(notice) = delete_notice(&target, &failure) {
                    self.host.alert(&notice);
                }
                CommandOutcome::DeleteFailed(failure)
            }
        }
    }

    fn navigate(&self, route: Route) -> CommandOutcome {
        info!(path = %route, "navigating");
        self.host.replace_location(&route.path());
        CommandOutcome::Navigated(route)
    }

    fn confirm_delete(&self, target: VenueTarget) -> Step {
        if self.is_pending(&target.id) {
            debug!(venue_id = %target.id, "delete already in flight, ignoring click");
            return Step::Done(CommandOutcome::AlreadyPending);
        }

        if !self.host.confirm(&target.confirmation_message()) {
            debug!(venue_id = %target.id, "venue delete declined");
            return Step::Done(CommandOutcome::Declined);
        }

        Step::AwaitDelete(PendingDelete::mark(&self.pending_deletes, target))
    }
}

/// Notice shown to the user after a delete. `None` for success, which
/// navigates instead.
pub fn delete_notice(target: &VenueTarget, outcome: &DeleteOutcome) -> Option<String> {
    let message = match outcome {
        DeleteOutcome::Success => return None,
        DeleteOutcome::ClientError { status: 404 } => format!(
            "Venue {} could not be found. It may already have been deleted.",
            target.name
        ),
        DeleteOutcome::ClientError { status } => format!(
            "Venue {} could not be deleted (status {status}).",
            target.name
        ),
        DeleteOutcome::ServerError { .. } => format!(
            "An error occurred. Venue {} could not be deleted.",
            target.name
        ),
        DeleteOutcome::NetworkError { .. } => format!(
            "Could not reach the server. Venue {} was not deleted.",
            target.name
        ),
    };
    Some(message)
}
