//! The remote-controller contract the bridge consumes

use juke_api::{ApiError, DeviceAttributes, JukeClient, Zone, ZoneConfig, ZoneId};

/// Remote operations the bridge needs from a Juke controller
///
/// [`JukeClient`] is the production implementation; tests substitute
/// scripted fakes at this seam.
pub trait JukeZoneApi {
    /// All zones currently known to the controller
    fn zones(&self) -> Result<Vec<Zone>, ApiError>;

    /// Authoritative configuration for one zone
    fn zone_config(&self, id: &ZoneId) -> Result<ZoneConfig, ApiError>;

    /// Set a zone's volume (0-100)
    ///
    /// Success means the controller accepted the write, not that the new
    /// value has been observed.
    fn set_zone_volume(&self, id: &ZoneId, volume: u8) -> Result<(), ApiError>;

    /// Identity attributes for a device
    fn device_attributes(&self, device_id: &str) -> Result<DeviceAttributes, ApiError>;
}

impl JukeZoneApi for JukeClient {
    fn zones(&self) -> Result<Vec<Zone>, ApiError> {
        JukeClient::zones(self)
    }

    fn zone_config(&self, id: &ZoneId) -> Result<ZoneConfig, ApiError> {
        JukeClient::zone_config(self, id)
    }

    fn set_zone_volume(&self, id: &ZoneId, volume: u8) -> Result<(), ApiError> {
        JukeClient::set_zone_volume(self, id, volume)
    }

    fn device_attributes(&self, device_id: &str) -> Result<DeviceAttributes, ApiError> {
        JukeClient::device_attributes(self, device_id)
    }
}
