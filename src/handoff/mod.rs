// src/handoff/mod.rs

//! Moving responses from the driver side (single producer) to a client
//! (single consumer).
//!
//! A response is immutable once handed off and is moved, never shared, so
//! the measurements it owns are released exactly once by whichever side
//! ends up dropping it.

pub mod queue;
pub mod tracker;

pub use queue::{ResponseConsumer, ResponseProducer, ResponseQueue};
pub use tracker::RequestTracker;

use crate::common::Response;
use core::fmt::Debug;

/// Consumer side of a response channel.
pub trait ResponseSource<M> {
    /// Associated error type for channel failures.
    type Error: Debug;

    /// Attempts to take the next pending response.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` when nothing is pending yet.
    /// Channel failures are returned as `Err(nb::Error::Other(Self::Error))`.
    fn poll_response(&mut self) -> nb::Result<Response<M>, Self::Error>;
}

/// Producer side of a response channel.
pub trait ResponseSink<M> {
    /// Hands `response` over to the consumer.
    ///
    /// When the consumer side is saturated the response is given back
    /// untouched in `Err`, so the caller can retry or drop it.
    fn deliver(&mut self, response: Response<M>) -> Result<(), Response<M>>;
}

/// Takes every response currently pending on `source` and passes it to
/// `handler`, stopping at the first `WouldBlock`.
///
/// Returns how many responses were handled.
pub fn drain<M, S, F>(source: &mut S, mut handler: F) -> Result<usize, S::Error>
where
    S: ResponseSource<M>,
    F: FnMut(Response<M>),
{
    let mut handled = 0;
    loop {
        match source.poll_response() {
            Ok(response) => {
                handler(response);
                handled += 1;
            }
            Err(nb::Error::WouldBlock) => return Ok(handled),
            Err(nb::Error::Other(e)) => return Err(e),
        }
    }
}
