// src/handoff/queue.rs

use super::{ResponseSink, ResponseSource};
use crate::common::{Response, ResponseInfo};
use core::convert::Infallible;
use heapless::spsc::{Consumer, Producer, Queue};

/// Bounded single-producer/single-consumer response queue.
///
/// Holds at most `N - 1` responses. Split it once into a
/// [`ResponseProducer`] and a [`ResponseConsumer`]; the halves may live on
/// different threads as long as `M: Send`.
pub struct ResponseQueue<M, const N: usize> {
    inner: Queue<Response<M>, N>,
}

impl<M, const N: usize> ResponseQueue<M, N> {
    pub const fn new() -> Self {
        ResponseQueue { inner: Queue::new() }
    }

    /// Maximum number of responses the queue holds at once.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Splits the queue into its producer and consumer halves.
    pub fn split(&mut self) -> (ResponseProducer<'_, M, N>, ResponseConsumer<'_, M, N>) {
        let (producer, consumer) = self.inner.split();
        (ResponseProducer { inner: producer }, ResponseConsumer { inner: consumer })
    }
}

impl<M, const N: usize> Default for ResponseQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver-side half of a [`ResponseQueue`].
pub struct ResponseProducer<'a, M, const N: usize> {
    inner: Producer<'a, Response<M>, N>,
}

impl<'a, M, const N: usize> ResponseProducer<'a, M, N> {
    /// True if a response can be delivered without being returned.
    #[inline]
    pub fn ready(&self) -> bool {
        self.inner.ready()
    }
}

impl<'a, M, const N: usize> ResponseSink<M> for ResponseProducer<'a, M, N> {
    fn deliver(&mut self, response: Response<M>) -> Result<(), Response<M>> {
        self.inner.enqueue(response).map_err(|rejected| {
            log::warn!(
                "Response queue saturated, returning {} for request {}",
                rejected.kind(),
                rejected.request_id()
            );
            rejected
        })
    }
}

/// Client-side half of a [`ResponseQueue`].
pub struct ResponseConsumer<'a, M, const N: usize> {
    inner: Consumer<'a, Response<M>, N>,
}

impl<'a, M, const N: usize> ResponseConsumer<'a, M, N> {
    /// Number of responses waiting.
    #[inline]
    pub fn pending(&self) -> usize {
        self.inner.len()
    }

    /// Next response without taking it.
    pub fn peek(&self) -> Option<&Response<M>> {
        self.inner.peek()
    }
}

impl<'a, M, const N: usize> ResponseSource<M> for ResponseConsumer<'a, M, N> {
    type Error = Infallible;

    fn poll_response(&mut self) -> nb::Result<Response<M>, Self::Error> {
        self.inner.dequeue().ok_or(nb::Error::WouldBlock)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::measurement::testing::FakeMeasurement;
    use crate::common::{
        DiscoveryScanResponse, RequestId, RequestKind, ResponseKind, ScanStatus, ScanType, StatusResponse,
    };
    use alloc::vec;

    fn discovery(id: u32) -> Response<FakeMeasurement> {
        DiscoveryScanResponse::new(
            RequestId::new(id),
            ScanType::Active,
            ScanStatus::Success,
            100,
            vec![FakeMeasurement::new(1, 90), FakeMeasurement::new(2, 100)],
        )
        .into()
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue: ResponseQueue<FakeMeasurement, 4> = ResponseQueue::new();
        assert_eq!(queue.capacity(), 3);
        {
            let (mut producer, mut consumer) = queue.split();
            assert!(matches!(consumer.poll_response(), Err(nb::Error::WouldBlock)));

            producer.deliver(discovery(1)).unwrap();
            producer
                .deliver(StatusResponse::new(RequestId::new(2), RequestKind::from_raw(9), ScanStatus::Busy).into())
                .unwrap();
            assert_eq!(consumer.pending(), 2);
            assert_eq!(consumer.peek().map(ResponseInfo::kind), Some(ResponseKind::DiscoveryScan));

            let first = consumer.poll_response().unwrap();
            assert_eq!(first.request_id(), RequestId::new(1));
            assert_eq!(first.measurements().count(), 2);

            let second = consumer.poll_response().unwrap();
            assert_eq!(second.kind(), ResponseKind::Status);
            assert_eq!(second.scan_status(), Some(ScanStatus::Busy));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_saturated_queue_returns_response() {
        let mut queue: ResponseQueue<FakeMeasurement, 3> = ResponseQueue::default();
        let (mut producer, mut consumer) = queue.split();
        producer.deliver(discovery(1)).unwrap();
        producer.deliver(discovery(2)).unwrap();
        assert!(!producer.ready());

        let rejected = producer.deliver(discovery(3)).unwrap_err();
        assert_eq!(rejected, discovery(3));

        consumer.poll_response().unwrap();
        assert!(producer.ready());
        producer.deliver(rejected).unwrap();

        let ids: vec::Vec<u32> = core::iter::from_fn(|| consumer.poll_response().ok())
            .map(|r| r.request_id().get())
            .collect();
        assert_eq!(ids, [2, 3]);
    }
}
