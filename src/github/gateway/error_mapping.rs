//! Error mapping helpers for the Octocrab gateway.
//!
//! Only failures that leave the caller without a response are mapped here.
//! HTTP error statuses never reach this module because the raw request
//! helpers return them as ordinary responses.

use crate::github::error::ClientError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ClientError {
    if is_network_error(error) {
        return ClientError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ClientError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
