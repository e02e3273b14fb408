// src/types.rs

use core::fmt;

// --- Time unit for configuration periods ---

/// Unit of the record/report periods, as carried on the wire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TimeUnit {
    Minutes = 0,
    Seconds = 1,
}

impl TimeUnit {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes the unit byte of a configuration acknowledgement.
    ///
    /// Device convention: 0 is minutes, any non-zero value is seconds.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            TimeUnit::Minutes
        } else {
            TimeUnit::Seconds
        }
    }

    /// Seconds per one period tick in this unit.
    #[inline]
    pub const fn seconds_multiplier(self) -> u32 {
        match self {
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Minutes => write!(f, "minutes"),
            TimeUnit::Seconds => write!(f, "seconds"),
        }
    }
}

// --- Battery status tiers ---

/// Coarse battery tier derived from a voltage reading.
///
/// Thresholds are exclusive lower bounds; a reading exactly on a boundary
/// falls into the next lower tier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatteryStatus {
    Critical,
    Low,
    Good,
    Excellent,
}

impl BatteryStatus {
    pub const fn from_millivolts(voltage_mv: u32) -> Self {
        if voltage_mv > 2850 {
            BatteryStatus::Excellent
        } else if voltage_mv > 2750 {
            BatteryStatus::Good
        } else if voltage_mv > 2650 {
            BatteryStatus::Low
        } else {
            BatteryStatus::Critical
        }
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryStatus::Excellent => write!(f, "Excellent"),
            BatteryStatus::Good => write!(f, "Good"),
            BatteryStatus::Low => write!(f, "Low"),
            BatteryStatus::Critical => write!(f, "Critical"),
        }
    }
}

// --- Sentinel fault codes ---

/// Device-health sentinel values the Nanotag embeds in place of real data.
///
/// These replace the firmware's error catalog: each variant knows its wire
/// code and the catalog's operator-facing message.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorFault {
    /// Byte 0 of a boot/health message is `0xFC`.
    Communication,
    /// Byte 0 of a boot/health message is `0xFF`.
    OutOfRangeHealthSample,
    /// A temperature slot in a report frame is `0xFFFF`.
    OutOfRangeTemperature,
}

impl SensorFault {
    /// Sentinel in the status byte of boot/health messages (ports 1 and 13).
    pub const STATUS_COMMUNICATION: u8 = 0xFC;
    /// Sentinel in the status byte of boot/health messages (ports 1 and 13).
    pub const STATUS_OUT_OF_RANGE: u8 = 0xFF;
    /// Sentinel replacing a temperature sample in report frames.
    pub const TEMPERATURE_OUT_OF_RANGE: u16 = 0xFFFF;

    /// Interprets the status byte of a boot/health message.
    /// Any value other than the two sentinels means no fault.
    pub const fn from_status_byte(byte: u8) -> Option<Self> {
        match byte {
            Self::STATUS_COMMUNICATION => Some(SensorFault::Communication),
            Self::STATUS_OUT_OF_RANGE => Some(SensorFault::OutOfRangeHealthSample),
            _ => None,
        }
    }

    /// The wire code of this fault.
    pub const fn code(self) -> u16 {
        match self {
            SensorFault::Communication => Self::STATUS_COMMUNICATION as u16,
            SensorFault::OutOfRangeHealthSample => Self::STATUS_OUT_OF_RANGE as u16,
            SensorFault::OutOfRangeTemperature => Self::TEMPERATURE_OUT_OF_RANGE,
        }
    }

    /// Operator-facing description from the device error catalog.
    pub const fn message(self) -> &'static str {
        match self {
            SensorFault::Communication => {
                "Unable to communicate with temperature sensor. NanoTag should be considered unreliable"
            }
            SensorFault::OutOfRangeHealthSample => {
                "Collected temperature sample is out of operating range"
            }
            SensorFault::OutOfRangeTemperature => {
                "One or more collected temperature samples are out of operating range"
            }
        }
    }
}

impl fmt::Display for SensorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

// --- Temperature readings ---

/// One decoded 2-byte temperature sample from a report frame.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureReading {
    Measured { celsius: f64, fahrenheit: f64 },
    /// The device stored `0xFFFF`: the sample was outside the sensor's
    /// operating range and carries no numeric value.
    OutOfRange,
}

impl TemperatureReading {
    /// Decodes a raw big-endian sample value.
    ///
    /// Non-sentinel values map to `celsius = (raw - 5000) / 100`; fahrenheit
    /// is derived from that and rounded to two decimal places.
    pub fn from_raw(raw: u16) -> Self {
        if raw == SensorFault::TEMPERATURE_OUT_OF_RANGE {
            return TemperatureReading::OutOfRange;
        }
        let celsius = (raw as f64 - 5000.0) / 100.0;
        let fahrenheit = round_to_hundredths(celsius * 9.0 / 5.0 + 32.0);
        TemperatureReading::Measured { celsius, fahrenheit }
    }

    pub const fn celsius(&self) -> Option<f64> {
        match self {
            TemperatureReading::Measured { celsius, .. } => Some(*celsius),
            TemperatureReading::OutOfRange => None,
        }
    }

    pub const fn fahrenheit(&self) -> Option<f64> {
        match self {
            TemperatureReading::Measured { fahrenheit, .. } => Some(*fahrenheit),
            TemperatureReading::OutOfRange => None,
        }
    }

    /// The fault carried by a sentinel sample, if any.
    pub const fn fault(&self) -> Option<SensorFault> {
        match self {
            TemperatureReading::Measured { .. } => None,
            TemperatureReading::OutOfRange => Some(SensorFault::OutOfRangeTemperature),
        }
    }
}

/// Round half away from zero to two decimal places.
/// `f64::round` lives in std, so scale and truncate through an integer.
fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    };
    rounded as f64 / 100.0
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_unit_wire_values() {
        assert_eq!(TimeUnit::Minutes.as_u8(), 0);
        assert_eq!(TimeUnit::Seconds.as_u8(), 1);
        assert_eq!(TimeUnit::from_byte(0), TimeUnit::Minutes);
        assert_eq!(TimeUnit::from_byte(1), TimeUnit::Seconds);
        // Device treats any non-zero unit byte as seconds.
        assert_eq!(TimeUnit::from_byte(7), TimeUnit::Seconds);
        assert_eq!(TimeUnit::Minutes.seconds_multiplier(), 60);
        assert_eq!(TimeUnit::Seconds.seconds_multiplier(), 1);
    }

    #[test]
    fn test_battery_status_tiers() {
        assert_eq!(BatteryStatus::from_millivolts(2900), BatteryStatus::Excellent);
        assert_eq!(BatteryStatus::from_millivolts(2800), BatteryStatus::Good);
        assert_eq!(BatteryStatus::from_millivolts(2700), BatteryStatus::Low);
        assert_eq!(BatteryStatus::from_millivolts(2600), BatteryStatus::Critical);
        assert_eq!(BatteryStatus::from_millivolts(0), BatteryStatus::Critical);
    }

    #[test]
    fn test_battery_status_boundaries_fall_to_lower_tier() {
        assert_eq!(BatteryStatus::from_millivolts(2851), BatteryStatus::Excellent);
        assert_eq!(BatteryStatus::from_millivolts(2850), BatteryStatus::Good);
        assert_eq!(BatteryStatus::from_millivolts(2751), BatteryStatus::Good);
        assert_eq!(BatteryStatus::from_millivolts(2750), BatteryStatus::Low);
        assert_eq!(BatteryStatus::from_millivolts(2651), BatteryStatus::Low);
        assert_eq!(BatteryStatus::from_millivolts(2650), BatteryStatus::Critical);
    }

    #[test]
    fn test_sensor_fault_status_byte() {
        assert_eq!(SensorFault::from_status_byte(0xFC), Some(SensorFault::Communication));
        assert_eq!(SensorFault::from_status_byte(0xFF), Some(SensorFault::OutOfRangeHealthSample));
        assert_eq!(SensorFault::from_status_byte(0x00), None);
        assert_eq!(SensorFault::from_status_byte(0xFE), None);
    }

    #[test]
    fn test_sensor_fault_codes() {
        assert_eq!(SensorFault::Communication.code(), 0xFC);
        assert_eq!(SensorFault::OutOfRangeHealthSample.code(), 0xFF);
        assert_eq!(SensorFault::OutOfRangeTemperature.code(), 0xFFFF);
    }

    #[test]
    fn test_temperature_from_raw() {
        // 0x1388 = 5000 -> exactly 0 degrees C / 32 F
        let zero = TemperatureReading::from_raw(0x1388);
        assert_eq!(zero.celsius(), Some(0.0));
        assert_eq!(zero.fahrenheit(), Some(32.0));
        assert_eq!(zero.fault(), None);

        // 0x1389 -> 0.01 C; fahrenheit 32.018 rounds up to 32.02
        let warm = TemperatureReading::from_raw(0x1389);
        assert!((warm.celsius().unwrap() - 0.01).abs() < 1e-9);
        assert!((warm.fahrenheit().unwrap() - 32.02).abs() < 1e-9);

        // Raw 0 is the sensor floor, -50 C
        let floor = TemperatureReading::from_raw(0x0000);
        assert!((floor.celsius().unwrap() - -50.0).abs() < 1e-9);
        assert!((floor.fahrenheit().unwrap() - -58.0).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_sentinel() {
        let reading = TemperatureReading::from_raw(0xFFFF);
        assert_eq!(reading, TemperatureReading::OutOfRange);
        assert_eq!(reading.celsius(), None);
        assert_eq!(reading.fahrenheit(), None);
        assert_eq!(reading.fault(), Some(SensorFault::OutOfRangeTemperature));
    }

    #[test]
    fn test_round_to_hundredths() {
        assert!((round_to_hundredths(32.018) - 32.02).abs() < 1e-9);
        assert!((round_to_hundredths(32.014) - 32.01).abs() < 1e-9);
        assert!((round_to_hundredths(-58.018) - -58.02).abs() < 1e-9);
        assert!((round_to_hundredths(0.0) - 0.0).abs() < 1e-9);
    }
}
