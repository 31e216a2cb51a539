// src/common/response/event.rs

//! Asynchronous background scan events.
//!
//! Each event kind carries only its own fields. Accessors for fields that do
//! not belong to the current event return zero, an empty slice or `None`.

use alloc::vec::Vec;

use super::ResponseInfo;
use crate::common::ids::RequestId;
use crate::common::kind::ResponseKind;
use crate::common::types::{DriverEvent, ProgressEvent};

// --- Gscan Events ---

/// Event reported by the driver while a background scan runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GscanEvent<M> {
    NoEvent,
    /// The scan cache reached its report threshold.
    ResultsAvailable { count: u32 },
    /// Full result of one probe response.
    FullScanResult(Vec<M>),
    /// Progress of the scanning state machine.
    Progress { event: ProgressEvent, status: u8 },
    /// Any driver event a background scan does not report.
    Unrecognized(DriverEvent),
}

impl<M> GscanEvent<M> {
    /// Builds the event from a flat driver record, keeping only the fields
    /// that belong to `event`.
    pub fn from_parts(
        event: DriverEvent,
        results_available: u32,
        measurements: Vec<M>,
        progress: ProgressEvent,
        progress_status: u8,
    ) -> Self {
        let (parsed, dropped_measurements, dropped_count) = match event {
            DriverEvent::NoEvent => (GscanEvent::NoEvent, measurements.len(), results_available),
            DriverEvent::ScanResultsAvailable => (
                GscanEvent::ResultsAvailable { count: results_available },
                measurements.len(),
                0,
            ),
            DriverEvent::FullScanResult => (GscanEvent::FullScanResult(measurements), 0, results_available),
            DriverEvent::ProgressScan => (
                GscanEvent::Progress { event: progress, status: progress_status },
                measurements.len(),
                results_available,
            ),
            other => (GscanEvent::Unrecognized(other), measurements.len(), results_available),
        };
        if dropped_measurements != 0 || dropped_count != 0 {
            log::debug!(
                "gscan {:?} event: dropped {} measurements, results count {}",
                event,
                dropped_measurements,
                dropped_count
            );
        }
        parsed
    }

    pub fn driver_event(&self) -> DriverEvent {
        match self {
            GscanEvent::NoEvent => DriverEvent::NoEvent,
            GscanEvent::ResultsAvailable { .. } => DriverEvent::ScanResultsAvailable,
            GscanEvent::FullScanResult(_) => DriverEvent::FullScanResult,
            GscanEvent::Progress { .. } => DriverEvent::ProgressScan,
            GscanEvent::Unrecognized(event) => *event,
        }
    }

    /// Number of results available in the cache, 0 unless `ResultsAvailable`.
    pub fn results_available(&self) -> u32 {
        match self {
            GscanEvent::ResultsAvailable { count } => *count,
            _ => 0,
        }
    }

    /// Measurements of a `FullScanResult`, empty otherwise.
    pub fn measurements(&self) -> &[M] {
        match self {
            GscanEvent::FullScanResult(measurements) => measurements,
            _ => &[],
        }
    }

    /// Progress sub-event and its status, `None` unless `Progress`.
    pub fn progress(&self) -> Option<(ProgressEvent, u8)> {
        match self {
            GscanEvent::Progress { event, status } => Some((*event, *status)),
            _ => None,
        }
    }

    pub fn into_measurements(self) -> Vec<M> {
        match self {
            GscanEvent::FullScanResult(measurements) => measurements,
            _ => Vec::new(),
        }
    }
}

/// Asynchronous result of a background scan start request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GscanEventsResponse<M> {
    request_id: RequestId,
    event: GscanEvent<M>,
}

impl<M> GscanEventsResponse<M> {
    pub fn new(request_id: RequestId, event: GscanEvent<M>) -> Self {
        GscanEventsResponse { request_id, event }
    }

    pub fn event(&self) -> &GscanEvent<M> {
        &self.event
    }

    pub fn into_event(self) -> GscanEvent<M> {
        self.event
    }
}

impl<M> ResponseInfo for GscanEventsResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::BgscanEvent
    }
}

// --- Hotlist Events ---

/// A hotlist AP appeared or disappeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotlistEvent<M> {
    ApFound(Vec<M>),
    ApLost(Vec<M>),
    /// Any driver event a hotlist does not report. Carries no measurements.
    Unrecognized(DriverEvent),
}

impl<M> HotlistEvent<M> {
    pub fn from_parts(event: DriverEvent, measurements: Vec<M>) -> Self {
        match event {
            DriverEvent::ApFound => HotlistEvent::ApFound(measurements),
            DriverEvent::ApLost => HotlistEvent::ApLost(measurements),
            other => {
                if !measurements.is_empty() {
                    log::debug!("hotlist {:?} event: dropped {} measurements", other, measurements.len());
                }
                HotlistEvent::Unrecognized(other)
            }
        }
    }

    pub fn driver_event(&self) -> DriverEvent {
        match self {
            HotlistEvent::ApFound(_) => DriverEvent::ApFound,
            HotlistEvent::ApLost(_) => DriverEvent::ApLost,
            HotlistEvent::Unrecognized(event) => *event,
        }
    }

    pub fn measurements(&self) -> &[M] {
        match self {
            HotlistEvent::ApFound(measurements) | HotlistEvent::ApLost(measurements) => measurements,
            HotlistEvent::Unrecognized(_) => &[],
        }
    }

    pub fn into_measurements(self) -> Vec<M> {
        match self {
            HotlistEvent::ApFound(measurements) | HotlistEvent::ApLost(measurements) => measurements,
            HotlistEvent::Unrecognized(_) => Vec::new(),
        }
    }
}

/// Detection of an AP from the hotlist passed in a hotlist set request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlistApEventResponse<M> {
    request_id: RequestId,
    event: HotlistEvent<M>,
}

impl<M> HotlistApEventResponse<M> {
    pub fn new(request_id: RequestId, event: HotlistEvent<M>) -> Self {
        HotlistApEventResponse { request_id, event }
    }

    pub fn event(&self) -> &HotlistEvent<M> {
        &self.event
    }

    pub fn into_event(self) -> HotlistEvent<M> {
        self.event
    }
}

impl<M> ResponseInfo for HotlistApEventResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::HotlistApEvent
    }
}

// --- Significant Change Events ---

/// An AP on the significant change list changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignificantChangeEvent<M> {
    Changed(Vec<M>),
    Unrecognized(DriverEvent),
}

impl<M> SignificantChangeEvent<M> {
    pub fn from_parts(event: DriverEvent, measurements: Vec<M>) -> Self {
        match event {
            DriverEvent::SignificantChange => SignificantChangeEvent::Changed(measurements),
            other => {
                if !measurements.is_empty() {
                    log::debug!(
                        "significant change {:?} event: dropped {} measurements",
                        other,
                        measurements.len()
                    );
                }
                SignificantChangeEvent::Unrecognized(other)
            }
        }
    }

    pub fn driver_event(&self) -> DriverEvent {
        match self {
            SignificantChangeEvent::Changed(_) => DriverEvent::SignificantChange,
            SignificantChangeEvent::Unrecognized(event) => *event,
        }
    }

    pub fn measurements(&self) -> &[M] {
        match self {
            SignificantChangeEvent::Changed(measurements) => measurements,
            SignificantChangeEvent::Unrecognized(_) => &[],
        }
    }

    pub fn into_measurements(self) -> Vec<M> {
        match self {
            SignificantChangeEvent::Changed(measurements) => measurements,
            SignificantChangeEvent::Unrecognized(_) => Vec::new(),
        }
    }
}

/// Detection of a change on an AP from the significant change list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignificantChangeResponse<M> {
    request_id: RequestId,
    event: SignificantChangeEvent<M>,
}

impl<M> SignificantChangeResponse<M> {
    pub fn new(request_id: RequestId, event: SignificantChangeEvent<M>) -> Self {
        SignificantChangeResponse { request_id, event }
    }

    pub fn event(&self) -> &SignificantChangeEvent<M> {
        &self.event
    }

    pub fn into_event(self) -> SignificantChangeEvent<M> {
        self.event
    }
}

impl<M> ResponseInfo for SignificantChangeResponse<M> {
    fn request_id(&self) -> RequestId {
        self.request_id
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::SignificantChangeEvent
    }
}
