// src/lib.rs

#![no_std] // Specify no_std at the crate root

extern crate alloc;

pub mod common;
pub mod handoff;

// Re-export key types for convenience
pub use common::{RequestId, RequestKind, Response, ResponseInfo, ResponseKind, ScanStatus};
pub use common::ScanResponseError;
