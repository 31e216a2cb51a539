// src/common/response/scan.rs

//! Responses carrying a scan status and an ordered list of measurements.

use alloc::vec::Vec;

use super::ResponseInfo;
use crate::common::ids::RequestId;
use crate::common::kind::ResponseKind;
use crate::common::measurement::{end_of_scan_timestamp, Measurement};
use crate::common::types::{ScanStatus, ScanType};

/// Results of a discovery scan.
///
/// `scan_type` is what the driver actually performed and may differ from
/// what was requested; callers must consult it rather than assume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryScanResponse<M> {
    request_id: RequestId,
    scan_type: ScanType,
    status: ScanStatus,
    timestamp_ms: u64,
    measurements: Vec<M>,
}

impl<M> DiscoveryScanResponse<M> {
    /// Builds a response with an explicit end-of-scan timestamp
    /// (milliseconds since the Unix epoch).
    ///
    /// The timestamp is stored as given. The caller vouches that it is the
    /// newest measurement's timestamp, or the receive time when
    /// `measurements` is empty. Use [`from_driver`](Self::from_driver) to
    /// have it derived.
    pub fn new(
        request_id: RequestId,
        scan_type: ScanType,
        status: ScanStatus,
        timestamp_ms: u64,
        measurements: Vec<M>,
    ) -> Self {
        DiscoveryScanResponse { request_id, scan_type, status, timestamp_ms, measurements }
    }

    /// Builds a response from what the driver returned. The end-of-scan
    /// timestamp is the newest measurement's, or `received_at_ms` when the
    /// driver returned no measurement.
    pub fn from_driver(
        request_id: RequestId,
        scan_type: ScanType,
        status: ScanStatus,
        measurements: Vec<M>,
        received_at_ms: u64,
    ) -> Self
    where
        M: Measurement,
    {
        let timestamp_ms = end_of_scan_timestamp(&measurements, received_at_ms);
        Self::new(request_id, scan_type, status, timestamp_ms, measurements)
    }

    #[inline]
    pub fn scan_type(&self) -> ScanType {
        self.scan_type
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    /// End of scan, in milliseconds since the Unix epoch.
    #[inline]
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn measurements(&self) -> &[M] {
        &self.measurements
    }

    pub fn into_measurements(self) -> Vec<M> {
        self.measurements
    }
}

impl<M> ResponseInfo for DiscoveryScanResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::DiscoveryScan
    }
}

/// Discovery results pushed to a subscriber of asynchronous discovery
/// results. Same payload as [`DiscoveryScanResponse`], distinct tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncDiscoveryScanResultResponse<M>(DiscoveryScanResponse<M>);

impl<M> AsyncDiscoveryScanResultResponse<M> {
    pub fn new(results: DiscoveryScanResponse<M>) -> Self {
        AsyncDiscoveryScanResultResponse(results)
    }

    /// The discovery payload.
    pub fn results(&self) -> &DiscoveryScanResponse<M> {
        &self.0
    }

    pub fn into_results(self) -> DiscoveryScanResponse<M> {
        self.0
    }
}

impl<M> From<DiscoveryScanResponse<M>> for AsyncDiscoveryScanResultResponse<M> {
    fn from(results: DiscoveryScanResponse<M>) -> Self {
        AsyncDiscoveryScanResultResponse(results)
    }
}

impl<M> ResponseInfo for AsyncDiscoveryScanResultResponse<M> {
    fn request_id(&self) -> RequestId {
        self.0.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::AsyncDiscoveryScanResults
    }
}

/// Results of a ranging (RTT) scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangingScanResponse<M> {
    request_id: RequestId,
    status: ScanStatus,
    measurements: Vec<M>,
}

impl<M> RangingScanResponse<M> {
    pub fn new(request_id: RequestId, status: ScanStatus, measurements: Vec<M>) -> Self {
        RangingScanResponse { request_id, status, measurements }
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn measurements(&self) -> &[M] {
        &self.measurements
    }

    pub fn into_measurements(self) -> Vec<M> {
        self.measurements
    }
}

impl<M> ResponseInfo for RangingScanResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::RangingScan
    }
}

/// Frequency channels supported by the WiFi driver, one entry per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelsSupportedResponse<M> {
    request_id: RequestId,
    status: ScanStatus,
    channels: Vec<M>,
}

impl<M> ChannelsSupportedResponse<M> {
    pub fn new(request_id: RequestId, status: ScanStatus, channels: Vec<M>) -> Self {
        ChannelsSupportedResponse { request_id, status, channels }
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn channels(&self) -> &[M] {
        &self.channels
    }

    pub fn into_channels(self) -> Vec<M> {
        self.channels
    }
}

impl<M> ResponseInfo for ChannelsSupportedResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::BgscanChannelsSupported
    }
}

/// Batched background scan results buffered in firmware, as a flat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GscanCachedResultsResponse<M> {
    request_id: RequestId,
    status: ScanStatus,
    measurements: Vec<M>,
}

impl<M> GscanCachedResultsResponse<M> {
    pub fn new(request_id: RequestId, status: ScanStatus, measurements: Vec<M>) -> Self {
        GscanCachedResultsResponse { request_id, status, measurements }
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn measurements(&self) -> &[M] {
        &self.measurements
    }

    pub fn into_measurements(self) -> Vec<M> {
        self.measurements
    }
}

impl<M> ResponseInfo for GscanCachedResultsResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::BgscanCachedResults
    }
}

/// Measurements cached for one background scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedScanBatch<M> {
    /// Firmware identifier of the scan.
    pub scan_id: u32,
    /// Firmware flags of the scan (e.g. interrupted).
    pub flags: u32,
    pub measurements: Vec<M>,
}

/// Cached background scan results grouped per scan, as buffered in firmware
/// or by the LP co-processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgscanCachedResultsResponse<M> {
    request_id: RequestId,
    status: ScanStatus,
    batches: Vec<CachedScanBatch<M>>,
}

impl<M> BgscanCachedResultsResponse<M> {
    pub fn new(request_id: RequestId, status: ScanStatus, batches: Vec<CachedScanBatch<M>>) -> Self {
        BgscanCachedResultsResponse { request_id, status, batches }
    }

    #[inline]
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn batches(&self) -> &[CachedScanBatch<M>] {
        &self.batches
    }

    /// Number of measurements across all batches.
    pub fn measurement_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.measurements.len()).sum()
    }

    pub fn into_batches(self) -> Vec<CachedScanBatch<M>> {
        self.batches
    }
}

impl<M> ResponseInfo for BgscanCachedResultsResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::BgscanCachedResultsVector
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::measurement::testing::FakeMeasurement;
    use alloc::vec;

    fn id(raw: u32) -> RequestId {
        RequestId::new(raw)
    }

    #[test]
    fn test_empty_success_is_distinct_from_empty_failure() {
        let ok: DiscoveryScanResponse<FakeMeasurement> =
            DiscoveryScanResponse::from_driver(id(1), ScanType::Passive, ScanStatus::Success, vec![], 5_000);
        let failed: DiscoveryScanResponse<FakeMeasurement> =
            DiscoveryScanResponse::from_driver(id(1), ScanType::Passive, ScanStatus::DriverError, vec![], 5_000);

        assert!(ok.measurements().is_empty());
        assert!(failed.measurements().is_empty());
        assert_eq!(ok.status(), ScanStatus::Success);
        assert_eq!(failed.status(), ScanStatus::DriverError);
        assert_ne!(ok, failed);
    }

    #[test]
    fn test_timestamp_from_newest_measurement_or_receive_time() {
        let with_results = DiscoveryScanResponse::from_driver(
            id(2),
            ScanType::Active,
            ScanStatus::Success,
            vec![FakeMeasurement::new(1, 100), FakeMeasurement::new(2, 250)],
            900,
        );
        assert_eq!(with_results.timestamp_ms(), 250);

        let empty: DiscoveryScanResponse<FakeMeasurement> =
            DiscoveryScanResponse::from_driver(id(2), ScanType::Active, ScanStatus::Success, vec![], 900);
        assert_eq!(empty.timestamp_ms(), 900);
    }

    #[test]
    fn test_new_stores_timestamp_as_given() {
        let measurements = vec![FakeMeasurement::new(1, 100), FakeMeasurement::new(2, 250)];
        let derived = end_of_scan_timestamp(&measurements, 900);
        let explicit =
            DiscoveryScanResponse::new(id(2), ScanType::Active, ScanStatus::Success, derived, measurements.clone());
        let from_driver =
            DiscoveryScanResponse::from_driver(id(2), ScanType::Active, ScanStatus::Success, measurements.clone(), 900);
        assert_eq!(explicit, from_driver);

        // No correction is applied to a caller-supplied value.
        let stale = DiscoveryScanResponse::new(id(2), ScanType::Active, ScanStatus::Success, 10, measurements);
        assert_eq!(stale.timestamp_ms(), 10);
    }

    #[test]
    fn test_performed_scan_type_is_reported() {
        // Active requested, passive results handed back.
        let resp: DiscoveryScanResponse<FakeMeasurement> =
            DiscoveryScanResponse::new(id(3), ScanType::Passive, ScanStatus::Success, 0, vec![]);
        assert_eq!(resp.scan_type(), ScanType::Passive);
    }

    #[test]
    fn test_async_discovery_wraps_discovery_payload() {
        let payload = DiscoveryScanResponse::new(
            id(4),
            ScanType::Passive,
            ScanStatus::Success,
            42,
            vec![FakeMeasurement::new(9, 42)],
        );
        let async_resp = AsyncDiscoveryScanResultResponse::from(payload.clone());

        assert_eq!(payload.kind(), ResponseKind::DiscoveryScan);
        assert_eq!(async_resp.kind(), ResponseKind::AsyncDiscoveryScanResults);
        assert_eq!(async_resp.request_id(), payload.request_id());
        assert_eq!(async_resp.results(), &payload);
        assert_eq!(async_resp.into_results(), payload);
    }

    #[test]
    fn test_list_variants_report_their_kind() {
        let ranging = RangingScanResponse::new(id(5), ScanStatus::Success, vec![FakeMeasurement::new(1, 1)]);
        let channels = ChannelsSupportedResponse::new(id(6), ScanStatus::Success, vec![FakeMeasurement::new(1, 1)]);
        let cached = GscanCachedResultsResponse::<FakeMeasurement>::new(id(7), ScanStatus::Busy, vec![]);

        assert_eq!(ranging.kind(), ResponseKind::RangingScan);
        assert_eq!(channels.kind(), ResponseKind::BgscanChannelsSupported);
        assert_eq!(cached.kind(), ResponseKind::BgscanCachedResults);
        assert_eq!(ranging.request_id(), id(5));
        assert_eq!(channels.channels().len(), 1);
        assert_eq!(cached.status(), ScanStatus::Busy);
        assert_eq!(ranging.into_measurements().len(), 1);
    }

    #[test]
    fn test_cached_batches() {
        let resp = BgscanCachedResultsResponse::new(
            id(8),
            ScanStatus::Success,
            vec![
                CachedScanBatch {
                    scan_id: 1,
                    flags: 0,
                    measurements: vec![FakeMeasurement::new(1, 10), FakeMeasurement::new(2, 11)],
                },
                CachedScanBatch { scan_id: 2, flags: 1, measurements: vec![] },
                CachedScanBatch { scan_id: 3, flags: 0, measurements: vec![FakeMeasurement::new(3, 30)] },
            ],
        );
        assert_eq!(resp.kind(), ResponseKind::BgscanCachedResultsVector);
        assert_eq!(resp.batches().len(), 3);
        assert_eq!(resp.measurement_count(), 3);
        assert_eq!(resp.into_batches()[1].scan_id, 2);
    }
}
