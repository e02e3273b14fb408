// src/lib.rs

//! Payload codec for the NanoThings Nanotag LoRaWAN temperature logger.
//!
//! Two independent, pure transforms:
//!
//! - [`DeviceConfig::encode`] turns a record/report interval configuration
//!   into the 4-byte configuration downlink (plus its target port), in
//!   either of the two dialects deployed devices understand.
//! - [`decode_uplink`] turns a port number and payload bytes into a typed
//!   [`Uplink`], dispatching on the port.
//!
//! Neither holds state nor performs I/O; delivery through a LoRaWAN network
//! server is the caller's concern.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod downlink;
pub mod error;
pub mod fport;
pub mod types;
pub mod uplink;

// Re-export key types for convenience
pub use downlink::{DeviceConfig, DownlinkPayload, EncodingMode};
pub use error::{EncodeError, PeriodField};
pub use fport::FPort;
pub use types::{BatteryStatus, SensorFault, TemperatureReading, TimeUnit};
pub use uplink::{decode_uplink, Battery, ConfigAck, StatusReport, TemperatureFrame, Uplink};
