// src/uplink/mod.rs

mod data;
pub mod parse;

pub use data::{Battery, ConfigAck, StatusReport, TemperatureFrame, MAX_FRAME_READINGS};
pub use parse::decode_uplink;

use crate::fport::FPort;

/// A decoded Nanotag uplink, one variant per application port.
///
/// Decoding is total: short payloads surface as absent fields and
/// unrecognised ports as [`Uplink::Unknown`], never as an error. A message
/// pipeline can therefore feed raw network-server events straight through
/// [`decode_uplink`] without a failure path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Uplink {
    /// Port 1: one-shot message after power-up.
    Boot(StatusReport),
    /// Port 13: periodic health message, same layout as boot.
    Health(StatusReport),
    /// Port 21: response to a device status request.
    DeviceStatus { battery: Option<Battery> },
    /// Port 25: the device confirms the configuration it now runs.
    ConfigurationAck(ConfigAck),
    /// Port 26: scheduled frame of accumulated temperature samples.
    ReportFrame(TemperatureFrame),
    /// Port 27: re-sent frame answering a recovery request.
    RecoverResponse(TemperatureFrame),
    /// Port 28: the device asks for its configuration. No payload.
    ConfigurationRequest,
    /// Port 31: battery dropped below the operating threshold.
    LowVoltageWarning { battery: Option<Battery> },
    /// Port 32: the device confirms it is shutting down.
    ShutdownAck { battery: Option<Battery> },
    /// Any port the protocol does not assign.
    Unknown { port: FPort },
}
