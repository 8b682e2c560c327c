#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
pub mod callback;
#[cfg(feature = "dummy")]
pub mod dummy;
pub mod error;
pub mod relay;
