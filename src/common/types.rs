// src/common/types.rs

use core::convert::TryFrom;
use core::fmt;

use super::error::ScanResponseError;
use super::kind::StableTag;

// --- Scan Status ---

/// Outcome reported by the driver for a scan or background scan request.
///
/// Raw values are a stable contract and must not be renumbered.
/// `Success` says nothing about the number of measurements: an empty list
/// with `Success` means no access point was in range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u32)]
pub enum ScanStatus {
    #[default]
    Unknown = 0,
    /// Measurements were obtained from the WLAN driver.
    Success = 1,
    /// The number of pending clients reached the maximum.
    Busy = 2,
    /// Request could not be passed to the driver.
    DriverError = 3,
    /// No answer from the driver in time.
    DriverTimeout = 4,
    /// Internal condition prevented any measurement.
    InternalError = 5,
    InvalidRequest = 6,
    NotSupported = 7,
    /// WiFi is not enabled.
    NoWifi = 8,
    /// Too many instances of this request type.
    TooManyRequests = 9,
    OutOfMemory = 10,
}

impl ScanStatus {
    /// Every status in raw-value order.
    pub const ALL: [ScanStatus; 11] = [
        ScanStatus::Unknown,
        ScanStatus::Success,
        ScanStatus::Busy,
        ScanStatus::DriverError,
        ScanStatus::DriverTimeout,
        ScanStatus::InternalError,
        ScanStatus::InvalidRequest,
        ScanStatus::NotSupported,
        ScanStatus::NoWifi,
        ScanStatus::TooManyRequests,
        ScanStatus::OutOfMemory,
    ];

    /// Lenient conversion: unrecognised raw values become `Unknown`.
    pub fn from_raw(raw: u32) -> Self {
        Self::try_from(raw).unwrap_or_else(|_| {
            log::debug!("unrecognised scan status {}, treating as UNKNOWN", raw);
            ScanStatus::Unknown
        })
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, ScanStatus::Success)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ScanStatus::Unknown => "UNKNOWN",
            ScanStatus::Success => "SUCCESS",
            ScanStatus::Busy => "BUSY",
            ScanStatus::DriverError => "DRIVER_ERROR",
            ScanStatus::DriverTimeout => "DRIVER_TIMEOUT",
            ScanStatus::InternalError => "INTERNAL_ERROR",
            ScanStatus::InvalidRequest => "INVALID_REQUEST",
            ScanStatus::NotSupported => "NOT_SUPPORTED",
            ScanStatus::NoWifi => "NO_WIFI",
            ScanStatus::TooManyRequests => "TOO_MANY_REQUESTS",
            ScanStatus::OutOfMemory => "OUT_OF_MEMORY",
        }
    }
}

impl TryFrom<u32> for ScanStatus {
    type Error = ScanResponseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(ScanResponseError::UnknownScanStatus(value))
    }
}

impl StableTag for ScanStatus {
    fn raw(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Scan Type ---

/// Kind of discovery scan the driver actually performed.
///
/// This may differ from the requested type: an active scan request can be
/// answered with the results of a passive scan that was already running.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u32)]
pub enum ScanType {
    #[default]
    Unknown = 0,
    Passive = 1,
    Active = 2,
}

impl ScanType {
    pub fn from_raw(raw: u32) -> Self {
        Self::try_from(raw).unwrap_or_else(|_| {
            log::debug!("unrecognised scan type {}, treating as UNKNOWN", raw);
            ScanType::Unknown
        })
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ScanType {
    type Error = ScanResponseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ScanType::Unknown),
            1 => Ok(ScanType::Passive),
            2 => Ok(ScanType::Active),
            _ => Err(ScanResponseError::UnknownScanType(value)),
        }
    }
}

// --- Driver Events ---

/// Why the driver produced an asynchronous background scan response.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u32)]
pub enum DriverEvent {
    #[default]
    NoEvent = 0,
    /// The scan cache reached its report threshold.
    ScanResultsAvailable = 1,
    /// A probe response was received while report events are enabled.
    FullScanResult = 2,
    /// Optional progress report of the scanning state machine.
    ProgressScan = 3,
    /// An AP from the hotlist has been found.
    ApFound = 4,
    /// An AP from the hotlist has been lost.
    ApLost = 5,
    /// An AP on the significant change list changed.
    SignificantChange = 6,
    Unknown = 7,
}

impl DriverEvent {
    pub fn from_raw(raw: u32) -> Self {
        Self::try_from(raw).unwrap_or_else(|_| {
            log::debug!("unrecognised driver event {}, treating as UNKNOWN", raw);
            DriverEvent::Unknown
        })
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for DriverEvent {
    type Error = ScanResponseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DriverEvent::NoEvent),
            1 => Ok(DriverEvent::ScanResultsAvailable),
            2 => Ok(DriverEvent::FullScanResult),
            3 => Ok(DriverEvent::ProgressScan),
            4 => Ok(DriverEvent::ApFound),
            5 => Ok(DriverEvent::ApLost),
            6 => Ok(DriverEvent::SignificantChange),
            7 => Ok(DriverEvent::Unknown),
            _ => Err(ScanResponseError::UnknownDriverEvent(value)),
        }
    }
}

/// Progress sub-event carried by a `ProgressScan` driver event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u32)]
pub enum ProgressEvent {
    BufferFull = 0,
    Complete = 1,
    #[default]
    None = 2,
}

impl ProgressEvent {
    pub fn from_raw(raw: u32) -> Self {
        Self::try_from(raw).unwrap_or_else(|_| {
            log::debug!("unrecognised progress event {}, treating as NONE", raw);
            ProgressEvent::None
        })
    }
}

impl TryFrom<u32> for ProgressEvent {
    type Error = ScanResponseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProgressEvent::BufferFull),
            1 => Ok(ProgressEvent::Complete),
            2 => Ok(ProgressEvent::None),
            _ => Err(ScanResponseError::UnknownProgressEvent(value)),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Process-wide logger recording every message, for fallback checks.
    mod capture {
        extern crate std;

        use std::string::{String, ToString};
        use std::sync::Mutex;
        use std::vec::Vec;

        static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
        static LOGGER: Capture = Capture;

        struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                if let Ok(mut lines) = LINES.lock() {
                    lines.push(record.args().to_string());
                }
            }

            fn flush(&self) {}
        }

        pub fn install() {
            // Another test may have installed it already.
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Debug);
        }

        pub fn logged(line: &str) -> bool {
            LINES.lock().map(|lines| lines.iter().any(|l| l == line)).unwrap_or(false)
        }
    }

    #[test]
    fn test_scan_status_raw_values_are_stable() {
        assert_eq!(ScanStatus::Unknown.raw(), 0);
        assert_eq!(ScanStatus::Success.raw(), 1);
        assert_eq!(ScanStatus::Busy.raw(), 2);
        assert_eq!(ScanStatus::DriverError.raw(), 3);
        assert_eq!(ScanStatus::DriverTimeout.raw(), 4);
        assert_eq!(ScanStatus::InternalError.raw(), 5);
        assert_eq!(ScanStatus::InvalidRequest.raw(), 6);
        assert_eq!(ScanStatus::NotSupported.raw(), 7);
        assert_eq!(ScanStatus::NoWifi.raw(), 8);
        assert_eq!(ScanStatus::TooManyRequests.raw(), 9);
        assert_eq!(ScanStatus::OutOfMemory.raw(), 10);
        for (i, status) in ScanStatus::ALL.iter().enumerate() {
            assert_eq!(status.raw() as usize, i);
        }
    }

    #[test]
    fn test_values_past_u16_are_rejected() {
        assert_eq!(ScanStatus::try_from(65_537u32), Err(ScanResponseError::UnknownScanStatus(65_537)));
        assert_eq!(ScanStatus::from_raw(0x1_0001), ScanStatus::Unknown);
        assert_eq!(ScanStatus::from_raw(u32::MAX), ScanStatus::Unknown);
    }

    #[test]
    fn test_every_lenient_fallback_is_logged() {
        capture::install();
        assert_eq!(ScanStatus::from_raw(4101), ScanStatus::Unknown);
        assert_eq!(ScanType::from_raw(4102), ScanType::Unknown);
        assert_eq!(DriverEvent::from_raw(4103), DriverEvent::Unknown);
        assert_eq!(ProgressEvent::from_raw(4104), ProgressEvent::None);
        assert!(capture::logged("unrecognised scan status 4101, treating as UNKNOWN"));
        assert!(capture::logged("unrecognised scan type 4102, treating as UNKNOWN"));
        assert!(capture::logged("unrecognised driver event 4103, treating as UNKNOWN"));
        assert!(capture::logged("unrecognised progress event 4104, treating as NONE"));
        // Known values take the silent path.
        assert_eq!(ScanType::from_raw(1), ScanType::Passive);
        assert!(!capture::logged("unrecognised scan type 1, treating as UNKNOWN"));
    }

    #[test]
    fn test_scan_status_strict_and_lenient() {
        assert_eq!(ScanStatus::try_from(1u32), Ok(ScanStatus::Success));
        assert_eq!(ScanStatus::try_from(11u32), Err(ScanResponseError::UnknownScanStatus(11)));
        assert_eq!(ScanStatus::from_raw(11), ScanStatus::Unknown);
        assert_eq!(ScanStatus::from_raw(u32::MAX), ScanStatus::Unknown);
        assert_eq!(ScanStatus::from_raw(8), ScanStatus::NoWifi);
        assert!(ScanStatus::Success.is_success());
        assert!(!ScanStatus::Busy.is_success());
    }

    #[test]
    fn test_scan_type_from_raw() {
        assert_eq!(ScanType::from_raw(0), ScanType::Unknown);
        assert_eq!(ScanType::from_raw(1), ScanType::Passive);
        assert_eq!(ScanType::from_raw(2), ScanType::Active);
        assert_eq!(ScanType::from_raw(3), ScanType::Unknown);
        assert_eq!(ScanType::try_from(3u32), Err(ScanResponseError::UnknownScanType(3)));
    }

    #[test]
    fn test_driver_event_from_raw() {
        assert_eq!(DriverEvent::from_raw(0), DriverEvent::NoEvent);
        assert_eq!(DriverEvent::from_raw(1), DriverEvent::ScanResultsAvailable);
        assert_eq!(DriverEvent::from_raw(6), DriverEvent::SignificantChange);
        assert_eq!(DriverEvent::from_raw(7), DriverEvent::Unknown);
        assert_eq!(DriverEvent::from_raw(99), DriverEvent::Unknown);
        assert_eq!(DriverEvent::try_from(8u32), Err(ScanResponseError::UnknownDriverEvent(8)));
        assert_eq!(DriverEvent::ApLost.raw(), 5);
    }

    #[test]
    fn test_progress_event_from_raw() {
        assert_eq!(ProgressEvent::from_raw(0), ProgressEvent::BufferFull);
        assert_eq!(ProgressEvent::from_raw(1), ProgressEvent::Complete);
        assert_eq!(ProgressEvent::from_raw(2), ProgressEvent::None);
        assert_eq!(ProgressEvent::from_raw(3), ProgressEvent::None);
        assert_eq!(ProgressEvent::try_from(3u32), Err(ScanResponseError::UnknownProgressEvent(3)));
    }
}
