// src/common/kind.rs

//! Response discriminator and the append-only tag table.
//!
//! Raw tag values are persisted and compared by callers, so new kinds are
//! only ever appended after the last one. The table is fingerprinted with
//! CRC-16/ARC so two builds can check that one table is an unchanged prefix
//! of the other.

use core::convert::TryFrom;
use core::fmt;

use crc::{Crc, CRC_16_ARC};

use super::error::ScanResponseError;

// Create a Crc instance for the fingerprint algorithm for reuse.
const CRC_COMPUTER: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);

/// Discriminator of every response carried on the scan channel.
///
/// ADD NEW KINDS ONLY AT THE END. Existing raw values never change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(u32)]
pub enum ResponseKind {
    /// Reserved for input that could not be classified.
    #[default]
    Unknown = 0,
    /// Results of a discovery scan request.
    DiscoveryScan = 1,
    /// Results of a ranging scan request.
    RangingScan = 2,
    /// Static capabilities of the scan service.
    Capability = 3,
    /// Answer to a cache reset request.
    ResetCache = 4,
    /// Discovery results delivered asynchronously to a subscriber.
    AsyncDiscoveryScanResults = 5,
    /// Status echo for background scan control requests.
    Status = 6,
    /// Firmware background scan capabilities.
    BgscanCapabilities = 7,
    /// Frequency channels supported by the driver.
    BgscanChannelsSupported = 8,
    /// Asynchronous background scan event.
    BgscanEvent = 9,
    /// Cached results produced by a background scan.
    BgscanCachedResults = 10,
    /// Hotlist AP found/lost event.
    HotlistApEvent = 11,
    /// Significant change list event.
    SignificantChangeEvent = 12,
    /// Dynamic capabilities delivered to a subscriber.
    CapabilitySubscription = 13,
    /// Cached background scan results grouped per scan.
    BgscanCachedResultsVector = 14,
}

impl ResponseKind {
    /// Every kind in raw-value order. Index equals raw value.
    pub const ALL: [ResponseKind; 15] = [
        ResponseKind::Unknown,
        ResponseKind::DiscoveryScan,
        ResponseKind::RangingScan,
        ResponseKind::Capability,
        ResponseKind::ResetCache,
        ResponseKind::AsyncDiscoveryScanResults,
        ResponseKind::Status,
        ResponseKind::BgscanCapabilities,
        ResponseKind::BgscanChannelsSupported,
        ResponseKind::BgscanEvent,
        ResponseKind::BgscanCachedResults,
        ResponseKind::HotlistApEvent,
        ResponseKind::SignificantChangeEvent,
        ResponseKind::CapabilitySubscription,
        ResponseKind::BgscanCachedResultsVector,
    ];

    /// Lenient conversion: unrecognised raw values become `Unknown`.
    pub fn from_raw(raw: u32) -> Self {
        Self::try_from(raw).unwrap_or_else(|_| {
            log::debug!("unrecognised response kind {}, treating as UNKNOWN", raw);
            ResponseKind::Unknown
        })
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Stable tag name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResponseKind::Unknown => "UNKNOWN",
            ResponseKind::DiscoveryScan => "DISCOVERY_SCAN",
            ResponseKind::RangingScan => "RANGING_SCAN",
            ResponseKind::Capability => "CAPABILITY",
            ResponseKind::ResetCache => "RESET_CACHE",
            ResponseKind::AsyncDiscoveryScanResults => "ASYNC_DISCOVERY_SCAN_RESULTS",
            ResponseKind::Status => "STATUS",
            ResponseKind::BgscanCapabilities => "BGSCAN_CAPABILITIES",
            ResponseKind::BgscanChannelsSupported => "BGSCAN_CHANNELS_SUPPORTED",
            ResponseKind::BgscanEvent => "BGSCAN_EVENT",
            ResponseKind::BgscanCachedResults => "BGSCAN_CACHED_RESULTS",
            ResponseKind::HotlistApEvent => "HOTLIST_AP_EVENT",
            ResponseKind::SignificantChangeEvent => "SIGNIFICANT_CHANGE_EVENT",
            ResponseKind::CapabilitySubscription => "CAPABILITY_SUBSCRIPTION",
            ResponseKind::BgscanCachedResultsVector => "BGSCAN_CACHED_RESULTS_VECTOR",
        }
    }

    /// Fingerprint of the tag table compiled into this build.
    pub fn snapshot() -> TagTableSnapshot {
        TagTableSnapshot::of(&Self::ALL)
    }

    /// Returns true if `older` describes an unchanged prefix of this build's
    /// table, i.e. raw values persisted by that build still mean the same.
    pub fn is_compatible_with(older: &TagTableSnapshot) -> bool {
        older.is_prefix_of(&Self::ALL)
    }
}

impl TryFrom<u32> for ResponseKind {
    type Error = ScanResponseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(ScanResponseError::UnknownResponseKind(value))
    }
}

impl From<ResponseKind> for u32 {
    fn from(value: ResponseKind) -> Self {
        value as u32
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Tag Table Fingerprint ---

/// An enumeration whose raw values and names form a stable contract.
pub trait StableTag: Copy {
    fn raw(self) -> u32;
    fn name(self) -> &'static str;
}

impl StableTag for ResponseKind {
    fn raw(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        self.as_str()
    }
}

/// Length and CRC-16/ARC checksum of the first `len` entries of a tag table.
///
/// Each entry contributes its raw value (little endian `u32`), its name and
/// a NUL separator. The checksum of an empty prefix is zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TagTableSnapshot {
    pub len: u16,
    pub checksum: u16,
}

impl TagTableSnapshot {
    /// Snapshot of a whole table.
    pub fn of<T: StableTag>(table: &[T]) -> Self {
        let mut digest = CRC_COMPUTER.digest();
        for tag in table {
            digest.update(&tag.raw().to_le_bytes());
            digest.update(tag.name().as_bytes());
            digest.update(&[0]);
        }
        TagTableSnapshot {
            len: table.len() as u16,
            checksum: digest.finalize(),
        }
    }

    /// Snapshot of the first `len` entries, or `None` if the table is shorter.
    pub fn of_prefix<T: StableTag>(table: &[T], len: usize) -> Option<Self> {
        table.get(..len).map(Self::of)
    }

    /// True if this snapshot matches the same-length prefix of `table`.
    pub fn is_prefix_of<T: StableTag>(&self, table: &[T]) -> bool {
        Self::of_prefix(table, self.len as usize).map_or(false, |current| current == *self)
    }
}
