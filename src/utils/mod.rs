//! Utility modules for the smc-reader crate.
//!
//! - `ffi`: FFI bindings and wire structs for the AppleSMC user client

pub mod ffi;
