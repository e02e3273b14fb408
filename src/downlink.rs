// src/downlink.rs
//
// Downlink side of the codec: a validated device configuration and its
// 4-byte payload. Two encoding dialects exist in the field and neither has
// been retired by the vendor, so the caller picks one explicitly.

use core::fmt;
use core::fmt::Write as _;

use arrayvec::ArrayString;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{EncodeError, PeriodField};
use crate::fport::FPort;
use crate::types::TimeUnit;

/// Which downlink dialect to produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingMode {
    /// Periods go on the wire unchanged; the port selects the unit
    /// (28 = minutes, 29 = seconds). Requires the report period to be a
    /// whole multiple of the record period.
    RawValue,
    /// Both periods are converted to seconds and sent on port 25.
    SecondsNormalized,
}

/// A validated Nanotag interval configuration.
///
/// Both periods are guaranteed to lie in `1..=65535`; use
/// [`DeviceConfig::new`] to construct one. Mode-specific rules (multiple-of
/// constraint, seconds overflow) are checked at encode time because they
/// depend on the chosen [`EncodingMode`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    record_period: u16,
    report_period: u16,
    time_unit: TimeUnit,
}

impl DeviceConfig {
    /// Validates and builds a configuration.
    ///
    /// Accepts `u32` so that out-of-range user input (0, 65536, ...) is
    /// rejected with [`EncodeError::OutOfRange`] instead of being coerced.
    pub fn new(
        record_period: u32,
        report_period: u32,
        time_unit: TimeUnit,
    ) -> Result<Self, EncodeError> {
        let record_period = check_period(record_period, PeriodField::Record)?;
        let report_period = check_period(report_period, PeriodField::Report)?;
        Ok(DeviceConfig { record_period, report_period, time_unit })
    }

    /// Looks up one of the vendor's preset configurations by name.
    ///
    /// Known presets: `30sec`, `1min`, `5min`, `30min`, `1hour`. Each records
    /// and reports at the same interval, expressed in seconds.
    pub fn preset(name: &str) -> Option<Self> {
        let (record, report) = match name {
            "30sec" => (30, 30),
            "1min" => (60, 60),
            "5min" => (300, 300),
            "30min" => (1800, 1800),
            "1hour" => (3600, 3600),
            _ => return None,
        };
        // Preset values are always within range.
        DeviceConfig::new(record, report, TimeUnit::Seconds).ok()
    }

    /// Names accepted by [`DeviceConfig::preset`].
    pub const PRESET_NAMES: [&'static str; 5] = ["30sec", "1min", "5min", "30min", "1hour"];

    #[inline]
    pub const fn record_period(&self) -> u16 {
        self.record_period
    }

    #[inline]
    pub const fn report_period(&self) -> u16 {
        self.report_period
    }

    #[inline]
    pub const fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// The record period expressed in seconds.
    #[inline]
    pub const fn record_seconds(&self) -> u32 {
        self.record_period as u32 * self.time_unit.seconds_multiplier()
    }

    /// The report period expressed in seconds.
    #[inline]
    pub const fn report_seconds(&self) -> u32 {
        self.report_period as u32 * self.time_unit.seconds_multiplier()
    }

    /// Encodes this configuration into a downlink payload.
    pub fn encode(&self, mode: EncodingMode) -> Result<DownlinkPayload, EncodeError> {
        match mode {
            EncodingMode::RawValue => {
                if self.report_period < self.record_period {
                    return Err(EncodeError::InvalidRatio {
                        record: self.record_period,
                        report: self.report_period,
                    });
                }
                if self.report_period % self.record_period != 0 {
                    return Err(EncodeError::NotMultiple {
                        record: self.record_period,
                        report: self.report_period,
                    });
                }
                let f_port = match self.time_unit {
                    TimeUnit::Minutes => FPort::CONFIG_DOWNLINK_MINUTES,
                    TimeUnit::Seconds => FPort::CONFIG_DOWNLINK_SECONDS,
                };
                Ok(DownlinkPayload::from_fields(
                    self.record_period,
                    self.report_period,
                    f_port,
                ))
            }
            EncodingMode::SecondsNormalized => {
                let record = checked_seconds(self.record_seconds(), PeriodField::Record)?;
                let report = checked_seconds(self.report_seconds(), PeriodField::Report)?;
                Ok(DownlinkPayload::from_fields(record, report, FPort::CONFIG_DOWNLINK))
            }
        }
    }
}

fn check_period(value: u32, field: PeriodField) -> Result<u16, EncodeError> {
    if value < 1 || value > 65535 {
        return Err(EncodeError::OutOfRange { field, value });
    }
    Ok(value as u16)
}

/// A minutes-unit period of 65535 normalizes to 3_932_100 seconds, far past
/// the 16-bit field. Overflow is an error, never a truncation.
fn checked_seconds(seconds: u32, field: PeriodField) -> Result<u16, EncodeError> {
    u16::try_from(seconds).map_err(|_| EncodeError::OutOfRange { field, value: seconds })
}

/// The 4-byte configuration payload and the port it must be queued on.
///
/// Layout: 2-byte record value, then 2-byte report value, both big-endian.
/// The `Display` impl renders the uppercase hex form most network consoles
/// expect; [`DownlinkPayload::base64`] covers transports that want text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DownlinkPayload {
    bytes: [u8; 4],
    f_port: FPort,
}

impl DownlinkPayload {
    fn from_fields(record: u16, report: u16, f_port: FPort) -> Self {
        let record = record.to_be_bytes();
        let report = report.to_be_bytes();
        DownlinkPayload {
            bytes: [record[0], record[1], report[0], report[1]],
            f_port,
        }
    }

    #[inline]
    pub const fn bytes(&self) -> [u8; 4] {
        self.bytes
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub const fn f_port(&self) -> FPort {
        self.f_port
    }

    /// Uppercase hex rendering, zero-padded to 8 characters.
    pub fn hex(&self) -> ArrayString<8> {
        let mut out = ArrayString::new();
        for byte in self.bytes {
            // 4 bytes always fit the 8-character buffer
            let _ = write!(out, "{:02X}", byte);
        }
        out
    }

    /// Base64 rendering of the payload bytes.
    pub fn base64(&self) -> ArrayString<8> {
        let mut buf = [0u8; 8];
        // A 4-byte input always encodes to exactly 8 base64 characters.
        let len = BASE64.encode_slice(self.bytes, &mut buf).unwrap_or(0);
        let mut out = ArrayString::new();
        if let Ok(encoded) = core::str::from_utf8(&buf[..len]) {
            let _ = out.try_push_str(encoded);
        }
        out
    }

    /// Owned hex string. Requires the `alloc` feature.
    #[cfg(feature = "alloc")]
    pub fn hex_string(&self) -> alloc::string::String {
        alloc::string::String::from(self.hex().as_str())
    }

    /// Owned base64 string. Requires the `alloc` feature.
    #[cfg(feature = "alloc")]
    pub fn base64_string(&self) -> alloc::string::String {
        BASE64.encode(self.bytes)
    }
}

impl fmt::Display for DownlinkPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
