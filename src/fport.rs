// src/fport.rs

use core::fmt;

/// A LoRaWAN application port number.
///
/// The network server routes every payload together with an fPort; the
/// Nanotag protocol keys its entire message dispatch on it. Any `u8` is a
/// valid port on the wire, so construction is infallible -- ports the codec
/// does not recognise decode to [`crate::uplink::Uplink::Unknown`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FPort(u8);

impl FPort {
    // --- Uplink ports (device -> network) ---

    /// Boot message, sent once after power-up.
    pub const BOOT: FPort = FPort(1);
    /// Periodic health message.
    pub const HEALTH: FPort = FPort(13);
    /// Response to a device status request.
    pub const DEVICE_STATUS: FPort = FPort(21);
    /// Acknowledgement of a received configuration.
    pub const CONFIG_ACK: FPort = FPort(25);
    /// Scheduled temperature report frame.
    pub const REPORT_FRAME: FPort = FPort(26);
    /// Re-sent temperature frame after a recovery request.
    pub const RECOVER_RESPONSE: FPort = FPort(27);
    /// Device asks the network for its configuration.
    pub const CONFIG_REQUEST: FPort = FPort(28);
    /// Battery voltage dropped below the operating threshold.
    pub const LOW_VOLTAGE_WARNING: FPort = FPort(31);
    /// Device acknowledges it is shutting down.
    pub const SHUTDOWN_ACK: FPort = FPort(32);

    // --- Downlink ports (network -> device) ---

    /// Seconds-normalized configuration downlink.
    pub const CONFIG_DOWNLINK: FPort = FPort(25);
    /// Raw-value configuration downlink, periods in minutes.
    pub const CONFIG_DOWNLINK_MINUTES: FPort = FPort(28);
    /// Raw-value configuration downlink, periods in seconds.
    pub const CONFIG_DOWNLINK_SECONDS: FPort = FPort(29);

    pub const fn new(port: u8) -> Self {
        FPort(port)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for FPort {
    fn from(port: u8) -> Self {
        FPort(port)
    }
}

impl From<FPort> for u8 {
    fn from(port: FPort) -> Self {
        port.0
    }
}

impl fmt::Display for FPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_assignments() {
        assert_eq!(FPort::BOOT.value(), 1);
        assert_eq!(FPort::HEALTH.value(), 13);
        assert_eq!(FPort::DEVICE_STATUS.value(), 21);
        assert_eq!(FPort::CONFIG_ACK.value(), 25);
        assert_eq!(FPort::REPORT_FRAME.value(), 26);
        assert_eq!(FPort::RECOVER_RESPONSE.value(), 27);
        assert_eq!(FPort::CONFIG_REQUEST.value(), 28);
        assert_eq!(FPort::LOW_VOLTAGE_WARNING.value(), 31);
        assert_eq!(FPort::SHUTDOWN_ACK.value(), 32);
    }

    #[test]
    fn test_downlink_ports_share_numbers_with_uplinks() {
        // Port 25 carries the config downlink and its acknowledgement;
        // port 28 carries both the minutes-mode downlink and the device's
        // configuration request.
        assert_eq!(FPort::CONFIG_DOWNLINK, FPort::CONFIG_ACK);
        assert_eq!(FPort::CONFIG_DOWNLINK_MINUTES, FPort::CONFIG_REQUEST);
        assert_eq!(FPort::CONFIG_DOWNLINK_SECONDS.value(), 29);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(FPort::from(26u8), FPort::REPORT_FRAME);
        assert_eq!(u8::from(FPort::new(99)), 99);
    }
}
