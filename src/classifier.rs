//! Response classification.
//!
//! A call succeeded iff the transport produced a response, reported no error,
//! and the status lies in `200..300`. Everything else is routed to the error
//! path; an absent response counts as status 500.

use crate::transport::{RawResponse, TransportOutcome};
use crate::transport_error;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Successful,
    Failed,
}

/// Classify a status line; `None` means no response was received
pub fn classify_status(status: Option<u16>) -> Classification {
    match status {
        Some(status) if (200..300).contains(&status) => Classification::Successful,
        _ => Classification::Failed,
    }
}

/// Turn a transport outcome into the response to map, or the error to report
pub fn classify(outcome: TransportOutcome) -> MphResult<RawResponse> {
    let status = outcome.response.as_ref().map(|r| r.status);

    match (classify_status(status), outcome.error, outcome.response) {
        (_, Some(error), _) => Err(error),
        (Classification::Successful, None, Some(response)) => Ok(response),
        (_, None, Some(response)) => Err(MphError::status(response.status)),
        (_, None, None) => Err(transport_error!(
            TransportErrorKind::Other,
            Some(ABSENT_RESPONSE_STATUS),
            "transport finished without a response"
        )),
    }
}
