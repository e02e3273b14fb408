// src/uplink/data.rs

use arrayvec::ArrayVec;

use crate::types::{BatteryStatus, SensorFault, TemperatureReading, TimeUnit};

/// Decoded temperature samples per frame. A maximum-length LoRaWAN
/// application payload (222 bytes) holds the 2-byte frame id plus 110
/// 2-byte samples.
pub const MAX_FRAME_READINGS: usize = 110;

/// A battery voltage reading with its derived status tier.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battery {
    pub voltage_mv: u32,
    pub status: BatteryStatus,
}

impl Battery {
    pub const fn from_millivolts(voltage_mv: u32) -> Self {
        Battery {
            voltage_mv,
            status: BatteryStatus::from_millivolts(voltage_mv),
        }
    }
}

/// Contents of a boot or health message (ports 1 and 13).
///
/// The fault sentinel lives in byte 0 and the voltage in bytes 2-3; the two
/// are independent readings of the same message, so a faulted device still
/// reports its battery and vice versa.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusReport {
    pub battery: Option<Battery>,
    pub fault: Option<SensorFault>,
}

/// Configuration echoed back by the device on port 25.
///
/// Each field is `None` when the payload was too short to carry it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigAck {
    pub record_period: Option<u16>,
    pub report_period: Option<u16>,
    pub time_unit: Option<TimeUnit>,
}

/// A frame of temperature samples (ports 26 and 27).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureFrame {
    /// Rolling frame counter, `None` when the payload was under 2 bytes.
    pub frame_id: Option<u16>,
    pub temperatures: ArrayVec<TemperatureReading, MAX_FRAME_READINGS>,
}

impl TemperatureFrame {
    /// True when at least one sample is the out-of-range sentinel.
    pub fn has_fault(&self) -> bool {
        self.temperatures.iter().any(|t| t.fault().is_some())
    }
}
