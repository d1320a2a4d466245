//! Test doubles for the transport seam

pub mod mocks;

pub use mocks::ScriptedTransport;
