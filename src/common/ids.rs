// src/common/ids.rs

use core::fmt;

/// Caller-chosen identifier stamped on a request and echoed, unchanged, in
/// every response to it. Used for correlation only and never interpreted.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct RequestId(u32);

impl RequestId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        RequestId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RequestId {
    fn from(value: u32) -> Self {
        RequestId(value)
    }
}

impl From<RequestId> for u32 {
    fn from(value: RequestId) -> Self {
        value.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw tag of the request taxonomy (start/stop bgscan, hotlist set, ...).
///
/// The request taxonomy lives outside this crate; the tag is carried by
/// identity only so a status response can say which kind of request it
/// answers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct RequestKind(u32);

impl RequestKind {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        RequestKind(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RequestKind {
    fn from(value: u32) -> Self {
        RequestKind(value)
    }
}

impl From<RequestKind> for u32 {
    fn from(value: RequestKind) -> Self {
        value.0
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request-kind({})", self.0)
    }
}
