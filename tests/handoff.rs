// tests/handoff.rs

use std::thread;

use wlan_scan_response::common::{
    BgscanCachedResultsResponse, CachedScanBatch, DiscoveryScanResponse, HotlistApEventResponse, HotlistEvent,
    Measurement, ScanType, StatusResponse,
};
use wlan_scan_response::handoff::{drain, RequestTracker, ResponseQueue, ResponseSink, ResponseSource};
use wlan_scan_response::{RequestId, RequestKind, Response, ResponseInfo, ResponseKind, ScanStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ApSighting {
    channel: u16,
    seen_at_ms: u64,
}

impl Measurement for ApSighting {
    fn timestamp_ms(&self) -> u64 {
        self.seen_at_ms
    }
}

const DISCOVERY: RequestKind = RequestKind::from_raw(1);
const HOTLIST_SET: RequestKind = RequestKind::from_raw(12);
const CACHED_RESULTS: RequestKind = RequestKind::from_raw(14);

fn driver_output() -> Vec<Response<ApSighting>> {
    let sighting = |channel, seen_at_ms| ApSighting { channel, seen_at_ms };
    vec![
        DiscoveryScanResponse::from_driver(
            RequestId::new(1),
            ScanType::Active,
            ScanStatus::Success,
            vec![sighting(1, 40), sighting(6, 55), sighting(11, 48)],
            1_000,
        )
        .into(),
        StatusResponse::new(RequestId::new(2), HOTLIST_SET, ScanStatus::Success).into(),
        HotlistApEventResponse::new(RequestId::new(2), HotlistEvent::ApFound(vec![sighting(36, 70)])).into(),
        HotlistApEventResponse::new(RequestId::new(2), HotlistEvent::ApLost(vec![sighting(36, 90)])).into(),
        BgscanCachedResultsResponse::new(
            RequestId::new(3),
            ScanStatus::Success,
            vec![
                CachedScanBatch { scan_id: 1, flags: 0, measurements: vec![sighting(1, 10)] },
                CachedScanBatch { scan_id: 2, flags: 1, measurements: vec![sighting(6, 20), sighting(11, 30)] },
            ],
        )
        .into(),
    ]
}

#[test]
fn responses_cross_threads_in_order() {
    let mut queue: ResponseQueue<ApSighting, 3> = ResponseQueue::new();
    let (mut producer, mut consumer) = queue.split();

    let mut tracker: RequestTracker<4> = RequestTracker::new();
    tracker.register(RequestId::new(1), DISCOVERY, ResponseKind::DiscoveryScan).unwrap();
    tracker.register(RequestId::new(2), HOTLIST_SET, ResponseKind::Status).unwrap();
    tracker.register(RequestId::new(3), CACHED_RESULTS, ResponseKind::BgscanCachedResultsVector).unwrap();

    let expected = driver_output();
    let total = expected.len();

    let received = thread::scope(|scope| {
        scope.spawn(move || {
            for mut response in driver_output() {
                // Spin until the consumer makes room.
                while let Err(returned) = producer.deliver(response) {
                    response = returned;
                    thread::yield_now();
                }
            }
        });

        let mut received = Vec::new();
        while received.len() < total {
            drain(&mut consumer, |r: Response<ApSighting>| received.push(r)).unwrap();
            thread::yield_now();
        }
        received
    });

    assert_eq!(received, expected);
    assert!(matches!(consumer.poll_response(), Err(nb::Error::WouldBlock)));

    let completed: Vec<Option<RequestKind>> = received.iter().map(|r| tracker.complete(r).unwrap()).collect();
    assert_eq!(completed, [Some(DISCOVERY), Some(HOTLIST_SET), None, None, Some(CACHED_RESULTS)]);
    assert!(tracker.is_empty());
}

#[test]
fn received_responses_keep_their_payloads() {
    let responses = driver_output();

    let discovery = &responses[0];
    assert_eq!(discovery.kind(), ResponseKind::DiscoveryScan);
    match discovery {
        Response::DiscoveryScan(scan) => assert_eq!(scan.timestamp_ms(), 55),
        other => panic!("unexpected {:?}", other),
    }

    let kinds: Vec<ResponseKind> = responses.iter().map(ResponseInfo::kind).collect();
    assert_eq!(
        kinds,
        [
            ResponseKind::DiscoveryScan,
            ResponseKind::Status,
            ResponseKind::HotlistApEvent,
            ResponseKind::HotlistApEvent,
            ResponseKind::BgscanCachedResultsVector,
        ]
    );

    let channels: Vec<u16> = responses[4].measurements().map(|m| m.channel).collect();
    assert_eq!(channels, [1, 6, 11]);
}
