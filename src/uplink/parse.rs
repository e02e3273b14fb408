// src/uplink/parse.rs
//
// Per-port uplink decoding. Every function here is pure and total: a
// payload shorter than the port's layout yields absent fields, never a
// panic or an error, because uplink decoding must not take down a
// message-processing pipeline.

use arrayvec::ArrayVec;
use log::{debug, trace};

use super::data::{Battery, ConfigAck, StatusReport, TemperatureFrame};
use super::Uplink;
use crate::fport::FPort;
use crate::types::{SensorFault, TemperatureReading, TimeUnit};

// --- Internal byte helpers ---

/// Big-endian u16 at a fixed offset, `None` when the payload is short.
#[inline]
fn read_u16_be(bytes: &[u8], offset: usize) -> Option<u16> {
    let pair = bytes.get(offset..offset + 2)?;
    Some(u16::from_be_bytes([pair[0], pair[1]]))
}

/// Whole payload as an unpadded-width big-endian integer.
/// `None` when empty or wider than 32 bits.
#[inline]
fn read_uint_be(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 4 {
        return None;
    }
    Some(bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b)))
}

// --- Public decode entry point ---

/// Decodes an uplink payload according to its port.
///
/// Dispatches to one of the per-port functions below; each is independently
/// callable when only one layout is of interest.
pub fn decode_uplink(port: FPort, bytes: &[u8]) -> Uplink {
    match port {
        FPort::BOOT => Uplink::Boot(decode_status_report(bytes)),
        FPort::HEALTH => Uplink::Health(decode_status_report(bytes)),
        FPort::DEVICE_STATUS => Uplink::DeviceStatus { battery: decode_device_status(bytes) },
        FPort::CONFIG_ACK => Uplink::ConfigurationAck(decode_config_ack(bytes)),
        FPort::REPORT_FRAME => Uplink::ReportFrame(decode_temperature_frame(bytes)),
        FPort::RECOVER_RESPONSE => Uplink::RecoverResponse(decode_temperature_frame(bytes)),
        FPort::CONFIG_REQUEST => Uplink::ConfigurationRequest,
        FPort::LOW_VOLTAGE_WARNING => Uplink::LowVoltageWarning { battery: decode_voltage(bytes) },
        FPort::SHUTDOWN_ACK => Uplink::ShutdownAck { battery: decode_voltage(bytes) },
        _ => {
            debug!("unassigned uplink port {port}, {} byte(s) ignored", bytes.len());
            Uplink::Unknown { port }
        }
    }
}

// --- Per-port decoders ---

/// Ports 1 and 13: fault sentinel in byte 0, voltage in bytes 2-3.
///
/// The sentinel and the voltage are decoded unconditionally of each other;
/// neither short-circuits the other.
pub fn decode_status_report(bytes: &[u8]) -> StatusReport {
    let battery = read_u16_be(bytes, 2).map(|mv| Battery::from_millivolts(u32::from(mv)));
    let fault = bytes.first().and_then(|b| SensorFault::from_status_byte(*b));
    StatusReport { battery, fault }
}

/// Port 21: voltage in bytes 0-1.
pub fn decode_device_status(bytes: &[u8]) -> Option<Battery> {
    read_u16_be(bytes, 0).map(|mv| Battery::from_millivolts(u32::from(mv)))
}

/// Port 25: record period at offset 1, report period at offset 3,
/// unit byte at offset 5.
pub fn decode_config_ack(bytes: &[u8]) -> ConfigAck {
    ConfigAck {
        record_period: read_u16_be(bytes, 1),
        report_period: read_u16_be(bytes, 3),
        time_unit: bytes.get(5).map(|b| TimeUnit::from_byte(*b)),
    }
}

/// Ports 26 and 27: 2-byte frame id, then 2-byte big-endian samples.
pub fn decode_temperature_frame(bytes: &[u8]) -> TemperatureFrame {
    let frame_id = read_u16_be(bytes, 0);
    let samples = bytes.get(2..).unwrap_or(&[]);
    if samples.len() % 2 != 0 {
        trace!("temperature frame has an odd trailing byte, ignoring it");
    }
    let mut temperatures = ArrayVec::new();
    for pair in samples.chunks_exact(2) {
        let reading = TemperatureReading::from_raw(u16::from_be_bytes([pair[0], pair[1]]));
        if temperatures.try_push(reading).is_err() {
            // Longer than any LoRaWAN payload can be; keep what fits.
            debug!("temperature frame overflows {} samples, truncating", temperatures.capacity());
            break;
        }
    }
    TemperatureFrame { frame_id, temperatures }
}

/// Ports 31 and 32: the whole payload is one unpadded-width voltage value.
pub fn decode_voltage(bytes: &[u8]) -> Option<Battery> {
    read_uint_be(bytes).map(Battery::from_millivolts)
}
