// src/common/response/status.rs

use super::ResponseInfo;
use crate::common::ids::{RequestId, RequestKind};
use crate::common::kind::ResponseKind;
use crate::common::types::ScanStatus;

/// Status answer to a background scan control request (bgscan start/stop,
/// hotlist set, significant change list set, ...) that has no richer payload.
///
/// Correlate on [`RequestId`] first. The echoed request kind only lets a
/// caller cross-check which control request was answered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    request_id: RequestId,
    status: ScanStatus,
    request_kind: RequestKind,
}

impl StatusResponse {
    pub fn new(request_id: RequestId, request_kind: RequestKind, status: ScanStatus) -> Self {
        StatusResponse { request_id, status, request_kind }
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    /// Kind of the request this status answers.
    #[inline]
    pub fn request_kind(&self) -> RequestKind {
        self.request_kind
    }

    /// True if this status answers the request `(id, kind)`.
    pub fn answers(&self, id: RequestId, kind: RequestKind) -> bool {
        self.request_id == id && self.request_kind == kind
    }
}

impl ResponseInfo for StatusResponse {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::Status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BGSCAN_START: RequestKind = RequestKind::from_raw(9);
    const HOTLIST_SET: RequestKind = RequestKind::from_raw(12);

    #[test]
    fn test_status_echoes_request() {
        let resp = StatusResponse::new(RequestId::new(20), HOTLIST_SET, ScanStatus::NotSupported);
        assert_eq!(resp.kind(), ResponseKind::Status);
        assert_eq!(resp.request_id(), RequestId::new(20));
        assert_eq!(resp.request_kind(), HOTLIST_SET);
        assert_eq!(resp.status(), ScanStatus::NotSupported);
    }

    #[test]
    fn test_answers_checks_id_and_kind() {
        let resp = StatusResponse::new(RequestId::new(21), BGSCAN_START, ScanStatus::Success);
        assert!(resp.answers(RequestId::new(21), BGSCAN_START));
        assert!(!resp.answers(RequestId::new(21), HOTLIST_SET));
        assert!(!resp.answers(RequestId::new(22), BGSCAN_START));
    }
}
