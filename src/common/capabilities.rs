// src/common/capabilities.rs

use arrayvec::ArrayVec;
use bitflags::bitflags;
use core::convert::TryFrom;

use super::error::ScanResponseError;

bitflags! {
    /// Scan capabilities of the loaded driver, as reported in its static
    /// capability word. An empty mask means no scan is supported.
    #[derive(Default)]
    pub struct CapabilityMask: u32 {
        const LP = 0x01;
        const DISCOVERY = 0x02;
        const RANGING = 0x04;
        const BG = 0x08;
    }
}

impl CapabilityMask {
    /// Value of the capability word when no scan is supported.
    pub const NONE: CapabilityMask = CapabilityMask::empty();

    /// Individual flags set in this mask, lowest bit first.
    pub fn supported_scans(&self) -> ArrayVec<CapabilityMask, 4> {
        [
            CapabilityMask::LP,
            CapabilityMask::DISCOVERY,
            CapabilityMask::RANGING,
            CapabilityMask::BG,
        ]
        .into_iter()
        .filter(|flag| self.contains(*flag))
        .collect()
    }
}

/// Highest channel bandwidth usable for RTT ranging.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum RangingBandwidth {
    Bw20Mhz = 0,
    Bw40Mhz = 1,
    Bw80Mhz = 2,
    Bw160Mhz = 3,
}

impl RangingBandwidth {
    pub const fn mhz(self) -> u16 {
        match self {
            RangingBandwidth::Bw20Mhz => 20,
            RangingBandwidth::Bw40Mhz => 40,
            RangingBandwidth::Bw80Mhz => 80,
            RangingBandwidth::Bw160Mhz => 160,
        }
    }
}

impl TryFrom<u8> for RangingBandwidth {
    type Error = ScanResponseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RangingBandwidth::Bw20Mhz),
            1 => Ok(RangingBandwidth::Bw40Mhz),
            2 => Ok(RangingBandwidth::Bw80Mhz),
            3 => Ok(RangingBandwidth::Bw160Mhz),
            _ => Err(ScanResponseError::UnknownBandwidth(value)),
        }
    }
}

/// Static capabilities of the WiFi driver, queried once.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub discovery_scan_supported: bool,
    pub ranging_scan_supported: bool,
    pub active_scan_supported: bool,
    /// Single-sided RTT ranging.
    pub one_sided_ranging_supported: bool,
    /// Dual-sided ranging per 802.11v.
    pub dual_sided_ranging_supported_11v: bool,
    /// Dual-sided ranging per 802.11mc.
    pub dual_sided_ranging_supported_11mc: bool,
    /// Background-scan offload to firmware.
    pub bgscan_supported: bool,
    /// Highest bandwidth level for RTT requests, see [`RangingBandwidth`].
    pub bandwidth_support: u8,
    /// Bit mask of preambles supported for RTT requests.
    pub preamble_support: u8,
    pub supported: CapabilityMask,
}

impl Capabilities {
    /// Decoded bandwidth level, or `None` if the driver reported a level this
    /// build does not know.
    pub fn highest_bandwidth(&self) -> Option<RangingBandwidth> {
        RangingBandwidth::try_from(self.bandwidth_support).ok()
    }

    /// True if every bit of `preamble_mask` is reported as supported.
    #[inline]
    pub fn supports_preambles(&self, preamble_mask: u8) -> bool {
        self.preamble_support & preamble_mask == preamble_mask
    }
}

/// Capabilities discovered at runtime from the low-power (LP) co-processor.
///
/// Kept apart from [`Capabilities`] because obtaining them needs a live
/// exchange with the co-processor rather than a static driver query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DynamicCapabilities {
    pub lp_batching_supported: bool,
    /// Max APs that can be batched through the LP co-processor.
    pub lp_max_num_ap_batched: u32,
    pub lp_bgscan_batching_supported: bool,
    /// Total memory allocated for bgscan batching, in bytes.
    pub lp_bgscan_max_scan_cache_size: u32,
    /// Max APs cached per bgscan.
    pub lp_bgscan_max_ap_cache_per_scan: u32,
    /// Max report threshold percentage accepted in bgscan start parameters.
    /// The LP co-processor supports at most 90.
    pub lp_bgscan_max_scan_report_thresh: u32,
}

/// Background scan resource limits reported by firmware.
///
/// Firmware reports these as signed 32-bit values; they are kept as such.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GscanCapabilities {
    /// Total space allocated for scan results, in bytes.
    pub max_scan_cache_size: i32,
    pub max_scan_buckets: i32,
    pub max_ap_cache_per_scan: i32,
    /// Number of RSSI samples used for averaging.
    pub max_rssi_sample_size: i32,
    /// Max report threshold for results-available notification.
    pub max_scan_reporting_threshold: i32,
    pub max_hotlist_aps: i32,
    pub max_hotlist_ssids: i32,
    pub max_significant_change_aps: i32,
    /// Number of BSSID/RSSI entries the device can hold.
    pub max_bssid_history_entries: i32,
    pub max_epno_networks: i32,
    /// ePNO entries requiring an exact SSID match (including hidden SSIDs).
    pub max_epno_networks_by_ssid: i32,
    pub max_whitelisted_ssids: i32,
}

/// The tighter of the LP and firmware report-threshold ceilings.
///
/// Only a helper: responses carry both values as reported and nothing in
/// this crate clamps requests against them. A negative firmware ceiling is
/// treated as zero.
pub fn effective_report_threshold(dynamic: &DynamicCapabilities, gscan: &GscanCapabilities) -> u32 {
    let firmware = u32::try_from(gscan.max_scan_reporting_threshold).unwrap_or(0);
    dynamic.lp_bgscan_max_scan_report_thresh.min(firmware)
}
