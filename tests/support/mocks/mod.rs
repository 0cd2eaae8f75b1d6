// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod time;

pub use catalog::{Call, RecordingCatalog};
pub use time::{FixedClock, fixed_now};
