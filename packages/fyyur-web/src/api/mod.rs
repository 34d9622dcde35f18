//! Client for the Fyyur server's venue endpoints

mod client;

pub use client::*;

use async_trait::async_trait;

use crate::page::VenueTarget;

/// Result of a venue delete request.
///
/// Every variant is a normal value; transport failures are reported as
/// [`DeleteOutcome::NetworkError`] rather than as an `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 2xx, and the body did not report `success: false`
    Success,

    /// Non-2xx status below 500
    ClientError { status: u16 },

    /// 5xx status, or a 2xx body reporting `success: false`
    ServerError { status: u16 },

    /// The request never produced a response (connection, timeout)
    NetworkError { message: String },
}

/// Venue operations the page needs from the server
#[async_trait(?Send)]
pub trait VenueApi {
    /// Send `DELETE /venues/{id}` for the venue
    async fn delete_venue(&self, venue: &VenueTarget) -> DeleteOutcome;
}
