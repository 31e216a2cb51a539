// src/common/response/capability.rs

use super::ResponseInfo;
use crate::common::capabilities::{Capabilities, DynamicCapabilities, GscanCapabilities};
use crate::common::ids::RequestId;
use crate::common::kind::ResponseKind;
use crate::common::types::ScanStatus;

/// Answer to a capability query.
///
/// Capability queries do not go through the scan pipeline, so the outcome
/// is a plain success flag rather than a [`ScanStatus`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapabilityResponse {
    request_id: RequestId,
    capabilities: Capabilities,
    success: bool,
}

impl CapabilityResponse {
    pub fn new(request_id: RequestId, capabilities: Capabilities, success: bool) -> Self {
        CapabilityResponse { request_id, capabilities, success }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[inline]
    pub fn success(&self) -> bool {
        self.success
    }
}

impl ResponseInfo for CapabilityResponse {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::Capability
    }
}

/// Dynamic capabilities pushed to a capability subscriber.
///
/// An acknowledgment or update, not a one-shot answer: a subscription can
/// receive any number of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapabilitySubscriptionResponse {
    request_id: RequestId,
    capabilities: DynamicCapabilities,
    success: bool,
}

impl CapabilitySubscriptionResponse {
    pub fn new(request_id: RequestId, capabilities: DynamicCapabilities, success: bool) -> Self {
        CapabilitySubscriptionResponse { request_id, capabilities, success }
    }

    pub fn capabilities(&self) -> &DynamicCapabilities {
        &self.capabilities
    }

    /// True if the dynamic capabilities could be obtained.
    #[inline]
    pub fn success(&self) -> bool {
        self.success
    }
}

impl ResponseInfo for CapabilitySubscriptionResponse {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::CapabilitySubscription
    }
}

/// Answer to a cache reset request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CacheResetResponse {
    request_id: RequestId,
    success: bool,
}

impl CacheResetResponse {
    pub fn new(request_id: RequestId, success: bool) -> Self {
        CacheResetResponse { request_id, success }
    }

    #[inline]
    pub fn success(&self) -> bool {
        self.success
    }
}

impl ResponseInfo for CacheResetResponse {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::ResetCache
    }
}

/// Background scan capabilities retrieved from firmware.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GscanCapabilitiesResponse {
    request_id: RequestId,
    status: ScanStatus,
    capabilities: GscanCapabilities,
}

impl GscanCapabilitiesResponse {
    pub fn new(request_id: RequestId, status: ScanStatus, capabilities: GscanCapabilities) -> Self {
        GscanCapabilitiesResponse { request_id, status, capabilities }
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    /// Firmware limits. Meaningful only when `status()` is `Success`.
    pub fn capabilities(&self) -> &GscanCapabilities {
        &self.capabilities
    }
}

impl ResponseInfo for GscanCapabilitiesResponse {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::BgscanCapabilities
    }
}
