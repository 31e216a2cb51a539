// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod capabilities;
pub mod error;
pub mod ids;
pub mod kind;
pub mod measurement;
pub mod response;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From capabilities.rs
pub use capabilities::{
    effective_report_threshold, Capabilities, CapabilityMask, DynamicCapabilities, GscanCapabilities,
    RangingBandwidth,
};

// From error.rs
pub use error::ScanResponseError;

// From ids.rs
pub use ids::{RequestId, RequestKind};

// From kind.rs
pub use kind::{ResponseKind, StableTag, TagTableSnapshot};

// From measurement.rs
pub use measurement::{end_of_scan_timestamp, Measurement};

// From response/mod.rs (and its sub-modules via its own `pub use`)
pub use response::{
    AsyncDiscoveryScanResultResponse, BgscanCachedResultsResponse, CacheResetResponse, CachedScanBatch,
    CapabilityResponse, CapabilitySubscriptionResponse, ChannelsSupportedResponse, DiscoveryScanResponse,
    GscanCachedResultsResponse, GscanCapabilitiesResponse, GscanEvent, GscanEventsResponse,
    HotlistApEventResponse, HotlistEvent, Measurements, RangingScanResponse, Response, ResponseInfo,
    SignificantChangeEvent, SignificantChangeResponse, StatusResponse, UnclassifiedResponse,
};

// From types.rs
pub use types::{DriverEvent, ProgressEvent, ScanStatus, ScanType};
