//! Foundation types for iosim.
//!
//! This crate holds the data side of the simulator: the error enum, CLI
//! modes, interface naming, the device's running configuration, argument
//! validators, and the startup configuration file format.

pub mod config;
pub mod device;
pub mod error;
pub mod interface;
pub mod mode;
pub mod validate;
