// src/common/error.rs

use super::ids::{RequestId, RequestKind};

/// Errors raised by strict tag decoding and by the handoff helpers.
///
/// Driver-level failures are never reported through this type; they travel
/// inside a successfully constructed response as a [`ScanStatus`](super::ScanStatus)
/// or a success flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanResponseError {
    /// Raw value does not name any known response kind.
    #[error("Unknown response kind: {0}")]
    UnknownResponseKind(u32),

    /// Raw value does not name any known scan status.
    #[error("Unknown scan status: {0}")]
    UnknownScanStatus(u32),

    /// Raw value does not name any known driver event.
    #[error("Unknown driver event: {0}")]
    UnknownDriverEvent(u32),

    /// Raw value does not name any known scan type.
    #[error("Unknown scan type: {0}")]
    UnknownScanType(u32),

    /// Raw value does not name any known background scan progress event.
    #[error("Unknown progress event: {0}")]
    UnknownProgressEvent(u32),

    /// Raw value does not name any known ranging bandwidth.
    #[error("Unknown ranging bandwidth: {0}")]
    UnknownBandwidth(u8),

    /// A request with this id is already in flight.
    #[error("Request id {0} is already in flight")]
    DuplicateRequestId(RequestId),

    /// The in-flight request table has no free slot.
    #[error("Request tracker full: capacity {capacity}")]
    TrackerFull { capacity: usize },

    /// A status response echoed a request kind other than the one registered
    /// for its request id.
    #[error("Request {id} registered as {registered}, status echoed {echoed}")]
    RequestKindMismatch {
        id: RequestId,
        registered: RequestKind,
        echoed: RequestKind,
    },
}
