// src/common/measurement.rs

//! Seam to the scan-measurement model.
//!
//! Responses are generic over the measurement entity `M` and never look
//! inside it. The only thing this crate needs from a measurement is its
//! timestamp, to derive the end-of-scan time of a discovery response.

/// A scan measurement that knows when it was taken.
pub trait Measurement {
    /// Time of the measurement, in milliseconds since the Unix epoch.
    fn timestamp_ms(&self) -> u64;
}

impl<T: Measurement + ?Sized> Measurement for &T {
    fn timestamp_ms(&self) -> u64 {
        (**self).timestamp_ms()
    }
}

/// End-of-scan time for a list of measurements: the newest measurement's
/// timestamp, or `received_at_ms` if the list is empty.
pub fn end_of_scan_timestamp<M: Measurement>(measurements: &[M], received_at_ms: u64) -> u64 {
    measurements
        .iter()
        .map(Measurement::timestamp_ms)
        .max()
        .unwrap_or(received_at_ms)
}
