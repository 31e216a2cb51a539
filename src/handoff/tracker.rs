// src/handoff/tracker.rs

use crate::common::{RequestId, RequestKind, Response, ResponseInfo, ResponseKind, ScanResponseError};
use heapless::Vec;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct InFlight {
    id: RequestId,
    kind: RequestKind,
    answered_by: ResponseKind,
}

/// Client-side table of requests still waiting for their answer.
///
/// Holds at most `N` entries. Each entry records the response kind that
/// answers it and is removed only by a response of that kind carrying its
/// id. Anything else stamped with the same id (cached results pushed while
/// a background scan runs, events, subscription updates) leaves the entry
/// in flight.
#[derive(Debug, Clone)]
pub struct RequestTracker<const N: usize> {
    in_flight: Vec<InFlight, N>,
}

impl<const N: usize> RequestTracker<N> {
    pub const fn new() -> Self {
        RequestTracker { in_flight: Vec::new() }
    }

    /// Records that request `id` of kind `kind` was issued and will be
    /// answered by a response of kind `answered_by`.
    ///
    /// # Errors
    /// * `DuplicateRequestId` if `id` is already in flight.
    /// * `TrackerFull` if `N` requests are already in flight.
    pub fn register(
        &mut self,
        id: RequestId,
        kind: RequestKind,
        answered_by: ResponseKind,
    ) -> Result<(), ScanResponseError> {
        if self.position(id).is_some() {
            log::warn!("Rejecting request {}: id already in flight", id);
            return Err(ScanResponseError::DuplicateRequestId(id));
        }
        self.in_flight.push(InFlight { id, kind, answered_by }).map_err(|_| {
            log::warn!("Rejecting request {}: {} requests already in flight", id, N);
            ScanResponseError::TrackerFull { capacity: N }
        })
    }

    /// Matches `response` against the in-flight table.
    ///
    /// Returns the kind of the request it completed, or `None` when the
    /// response is unsolicited, unclassified, answers no tracked request or
    /// is not the kind its request waits for.
    ///
    /// # Errors
    /// `RequestKindMismatch` if a status response echoes a request kind
    /// different from the one registered. The entry stays in flight.
    pub fn complete<M>(&mut self, response: &Response<M>) -> Result<Option<RequestKind>, ScanResponseError> {
        if response.is_unsolicited() || matches!(response, Response::Unclassified(_)) {
            return Ok(None);
        }
        let id = response.request_id();
        let pos = match self.position(id) {
            Some(pos) => pos,
            None => {
                log::debug!("{} for untracked request {}", response.kind(), id);
                return Ok(None);
            }
        };
        let entry = self.in_flight[pos];
        if entry.answered_by != response.kind() {
            log::debug!("{} for request {} which waits for {}", response.kind(), id, entry.answered_by);
            return Ok(None);
        }
        if let Response::Status(status) = response {
            if status.request_kind() != entry.kind {
                log::warn!("Status for request {} echoed {}, expected {}", id, status.request_kind(), entry.kind);
                return Err(ScanResponseError::RequestKindMismatch {
                    id,
                    registered: entry.kind,
                    echoed: status.request_kind(),
                });
            }
        }
        Ok(Some(self.in_flight.swap_remove(pos).kind))
    }

    /// Response kind that will complete request `id`, if it is in flight.
    pub fn awaiting(&self, id: RequestId) -> Option<ResponseKind> {
        self.position(id).map(|pos| self.in_flight[pos].answered_by)
    }

    /// Forgets request `id` without a response, returning its kind.
    pub fn cancel(&mut self, id: RequestId) -> Option<RequestKind> {
        self.position(id).map(|pos| self.in_flight.swap_remove(pos).kind)
    }

    /// Kind registered for `id`, if it is in flight.
    pub fn kind_of(&self, id: RequestId) -> Option<RequestKind> {
        self.position(id).map(|pos| self.in_flight[pos].kind)
    }

    #[inline]
    pub fn contains(&self, id: RequestId) -> bool {
        self.position(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    fn position(&self, id: RequestId) -> Option<usize> {
        self.in_flight.iter().position(|entry| entry.id == id)
    }
}

impl<const N: usize> Default for RequestTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}
