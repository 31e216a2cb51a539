// src/common/response/mod.rs

// Define the main Response enum in the module's root
mod capability;
mod event;
mod scan;
mod status;

// Re-export items for external use
pub use capability::{
    CacheResetResponse, CapabilityResponse, CapabilitySubscriptionResponse, GscanCapabilitiesResponse,
};
pub use event::{
    GscanEvent, GscanEventsResponse, HotlistApEventResponse, HotlistEvent, SignificantChangeEvent,
    SignificantChangeResponse,
};
pub use scan::{
    AsyncDiscoveryScanResultResponse, BgscanCachedResultsResponse, CachedScanBatch, ChannelsSupportedResponse,
    DiscoveryScanResponse, GscanCachedResultsResponse, RangingScanResponse,
};
pub use status::StatusResponse;

use core::slice;

use crate::common::ids::RequestId;
use crate::common::kind::ResponseKind;
use crate::common::types::ScanStatus;

/// Identity shared by every response: the request it answers and its kind.
///
/// `kind()` is constant for the lifetime of a value.
pub trait ResponseInfo {
    /// The id supplied by the client with the request, unchanged.
    fn request_id(&self) -> RequestId;

    /// Discriminator of this response.
    fn kind(&self) -> ResponseKind;
}

/// Input the decoding layer could not classify.
///
/// The only response whose kind is [`ResponseKind::Unknown`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnclassifiedResponse {
    request_id: RequestId,
    raw_kind: u32,
}

impl UnclassifiedResponse {
    pub fn new(request_id: RequestId, raw_kind: u32) -> Self {
        UnclassifiedResponse { request_id, raw_kind }
    }

    /// Raw tag as received, for diagnostics.
    #[inline]
    pub fn raw_kind(&self) -> u32 {
        self.raw_kind
    }
}

impl ResponseInfo for UnclassifiedResponse {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::Unknown
    }
}

// --- Response Enum Definition ---

/// Any response delivered on the scan channel, generic over the
/// scan-measurement entity `M`.
///
/// Each response exclusively owns its measurements; dropping the response
/// drops them. The async discovery variant reuses the discovery payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<M> {
    /// Not classified by the decoding layer.
    Unclassified(UnclassifiedResponse),
    DiscoveryScan(DiscoveryScanResponse<M>),
    RangingScan(RangingScanResponse<M>),
    Capability(CapabilityResponse),
    ResetCache(CacheResetResponse),
    AsyncDiscoveryScanResults(AsyncDiscoveryScanResultResponse<M>),
    Status(StatusResponse),
    BgscanCapabilities(GscanCapabilitiesResponse),
    BgscanChannelsSupported(ChannelsSupportedResponse<M>),
    BgscanEvent(GscanEventsResponse<M>),
    BgscanCachedResults(GscanCachedResultsResponse<M>),
    HotlistApEvent(HotlistApEventResponse<M>),
    SignificantChangeEvent(SignificantChangeResponse<M>),
    CapabilitySubscription(CapabilitySubscriptionResponse),
    BgscanCachedResultsVector(BgscanCachedResultsResponse<M>),
}

impl<M> Response<M> {
    /// Response for input that could not be classified.
    pub fn unclassified(request_id: RequestId, raw_kind: u32) -> Self {
        Response::Unclassified(UnclassifiedResponse::new(request_id, raw_kind))
    }

    /// True for responses that may arrive any number of times and are not
    /// a one-off answer to a request: background scan events, async
    /// discovery results and capability subscription updates.
    pub fn is_unsolicited(&self) -> bool {
        matches!(
            self,
            Response::AsyncDiscoveryScanResults(_)
                | Response::BgscanEvent(_)
                | Response::HotlistApEvent(_)
                | Response::SignificantChangeEvent(_)
                | Response::CapabilitySubscription(_)
        )
    }

    /// Scan status of status-bearing responses, `None` for the others.
    pub fn scan_status(&self) -> Option<ScanStatus> {
        match self {
            Response::DiscoveryScan(r) => Some(r.status()),
            Response::AsyncDiscoveryScanResults(r) => Some(r.results().status()),
            Response::RangingScan(r) => Some(r.status()),
            Response::Status(r) => Some(r.status()),
            Response::BgscanCapabilities(r) => Some(r.status()),
            Response::BgscanChannelsSupported(r) => Some(r.status()),
            Response::BgscanCachedResults(r) => Some(r.status()),
            Response::BgscanCachedResultsVector(r) => Some(r.status()),
            Response::Unclassified(_)
            | Response::Capability(_)
            | Response::ResetCache(_)
            | Response::BgscanEvent(_)
            | Response::HotlistApEvent(_)
            | Response::SignificantChangeEvent(_)
            | Response::CapabilitySubscription(_) => None,
        }
    }

    /// Whether the request succeeded, from the scan status or the success
    /// flag. `None` for events and unclassified input, which carry neither.
    pub fn succeeded(&self) -> Option<bool> {
        match self {
            Response::Capability(r) => Some(r.success()),
            Response::CapabilitySubscription(r) => Some(r.success()),
            Response::ResetCache(r) => Some(r.success()),
            other => other.scan_status().map(ScanStatus::is_success),
        }
    }

    /// All measurements carried by this response, in order. Cached batches
    /// are walked batch by batch. Empty for payloads without measurements.
    pub fn measurements(&self) -> Measurements<'_, M> {
        let flat = Measurements::flat;
        match self {
            Response::DiscoveryScan(r) => flat(r.measurements()),
            Response::AsyncDiscoveryScanResults(r) => flat(r.results().measurements()),
            Response::RangingScan(r) => flat(r.measurements()),
            Response::BgscanChannelsSupported(r) => flat(r.channels()),
            Response::BgscanCachedResults(r) => flat(r.measurements()),
            Response::BgscanEvent(r) => flat(r.event().measurements()),
            Response::HotlistApEvent(r) => flat(r.event().measurements()),
            Response::SignificantChangeEvent(r) => flat(r.event().measurements()),
            Response::BgscanCachedResultsVector(r) => Measurements::batched(r.batches()),
            Response::Unclassified(_)
            | Response::Capability(_)
            | Response::ResetCache(_)
            | Response::Status(_)
            | Response::BgscanCapabilities(_)
            | Response::CapabilitySubscription(_) => flat(&[]),
        }
    }
}

impl<M> ResponseInfo for Response<M> {
    fn request_id(&self) -> RequestId {
        match self {
            Response::Unclassified(r) => r.request_id(),
            Response::DiscoveryScan(r) => r.request_id(),
            Response::RangingScan(r) => r.request_id(),
            Response::Capability(r) => r.request_id(),
            Response::ResetCache(r) => r.request_id(),
            Response::AsyncDiscoveryScanResults(r) => r.request_id(),
            Response::Status(r) => r.request_id(),
            Response::BgscanCapabilities(r) => r.request_id(),
            Response::BgscanChannelsSupported(r) => r.request_id(),
            Response::BgscanEvent(r) => r.request_id(),
            Response::BgscanCachedResults(r) => r.request_id(),
            Response::HotlistApEvent(r) => r.request_id(),
            Response::SignificantChangeEvent(r) => r.request_id(),
            Response::CapabilitySubscription(r) => r.request_id(),
            Response::BgscanCachedResultsVector(r) => r.request_id(),
        }
    }

    fn kind(&self) -> ResponseKind {
        match self {
            Response::Unclassified(r) => r.kind(),
            Response::DiscoveryScan(r) => r.kind(),
            Response::RangingScan(r) => r.kind(),
            Response::Capability(r) => r.kind(),
            Response::ResetCache(r) => r.kind(),
            Response::AsyncDiscoveryScanResults(r) => r.kind(),
            Response::Status(r) => r.kind(),
            Response::BgscanCapabilities(r) => r.kind(),
            Response::BgscanChannelsSupported(r) => r.kind(),
            Response::BgscanEvent(r) => r.kind(),
            Response::BgscanCachedResults(r) => r.kind(),
            Response::HotlistApEvent(r) => r.kind(),
            Response::SignificantChangeEvent(r) => r.kind(),
            Response::CapabilitySubscription(r) => r.kind(),
            Response::BgscanCachedResultsVector(r) => r.kind(),
        }
    }
}

// --- Conversions from concrete responses ---

impl<M> From<UnclassifiedResponse> for Response<M> {
    fn from(r: UnclassifiedResponse) -> Self {
        Response::Unclassified(r)
    }
}

impl<M> From<DiscoveryScanResponse<M>> for Response<M> {
    fn from(r: DiscoveryScanResponse<M>) -> Self {
        Response::DiscoveryScan(r)
    }
}

impl<M> From<RangingScanResponse<M>> for Response<M> {
    fn from(r: RangingScanResponse<M>) -> Self {
        Response::RangingScan(r)
    }
}

impl<M> From<CapabilityResponse> for Response<M> {
    fn from(r: CapabilityResponse) -> Self {
        Response::Capability(r)
    }
}

impl<M> From<CacheResetResponse> for Response<M> {
    fn from(r: CacheResetResponse) -> Self {
        Response::ResetCache(r)
    }
}

impl<M> From<AsyncDiscoveryScanResultResponse<M>> for Response<M> {
    fn from(r: AsyncDiscoveryScanResultResponse<M>) -> Self {
        Response::AsyncDiscoveryScanResults(r)
    }
}

impl<M> From<StatusResponse> for Response<M> {
    fn from(r: StatusResponse) -> Self {
        Response::Status(r)
    }
}

impl<M> From<GscanCapabilitiesResponse> for Response<M> {
    fn from(r: GscanCapabilitiesResponse) -> Self {
        Response::BgscanCapabilities(r)
    }
}

impl<M> From<ChannelsSupportedResponse<M>> for Response<M> {
    fn from(r: ChannelsSupportedResponse<M>) -> Self {
        Response::BgscanChannelsSupported(r)
    }
}

impl<M> From<GscanEventsResponse<M>> for Response<M> {
    fn from(r: GscanEventsResponse<M>) -> Self {
        Response::BgscanEvent(r)
    }
}

impl<M> From<GscanCachedResultsResponse<M>> for Response<M> {
    fn from(r: GscanCachedResultsResponse<M>) -> Self {
        Response::BgscanCachedResults(r)
    }
}

impl<M> From<HotlistApEventResponse<M>> for Response<M> {
    fn from(r: HotlistApEventResponse<M>) -> Self {
        Response::HotlistApEvent(r)
    }
}

impl<M> From<SignificantChangeResponse<M>> for Response<M> {
    fn from(r: SignificantChangeResponse<M>) -> Self {
        Response::SignificantChangeEvent(r)
    }
}

impl<M> From<CapabilitySubscriptionResponse> for Response<M> {
    fn from(r: CapabilitySubscriptionResponse) -> Self {
        Response::CapabilitySubscription(r)
    }
}

impl<M> From<BgscanCachedResultsResponse<M>> for Response<M> {
    fn from(r: BgscanCachedResultsResponse<M>) -> Self {
        Response::BgscanCachedResultsVector(r)
    }
}

// --- Measurement iterator ---

/// Iterator over the measurements of a [`Response`], see
/// [`Response::measurements`].
#[derive(Debug, Clone)]
pub struct Measurements<'a, M> {
    current: slice::Iter<'a, M>,
    batches: slice::Iter<'a, CachedScanBatch<M>>,
}

impl<'a, M> Measurements<'a, M> {
    fn flat(list: &'a [M]) -> Self {
        Measurements { current: list.iter(), batches: (&[]).iter() }
    }

    fn batched(batches: &'a [CachedScanBatch<M>]) -> Self {
        Measurements { current: (&[]).iter(), batches: batches.iter() }
    }
}

impl<'a, M> Iterator for Measurements<'a, M> {
    type Item = &'a M;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(measurement) = self.current.next() {
                return Some(measurement);
            }
            self.current = self.batches.next()?.measurements.iter();
        }
    }
}
