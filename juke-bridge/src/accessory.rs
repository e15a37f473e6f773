//! Speaker accessory bound to one zone

use tracing::{info, warn};

use juke_api::{Zone, ZoneId};

use crate::api::JukeZoneApi;
use crate::controller::ZoneVolumeController;
use crate::error::Result;

/// Manufacturer reported for every zone accessory
pub const MANUFACTURER: &str = "Juke Audio";

/// Model reported for every zone accessory
pub const MODEL: &str = "Juke-Zone";

/// Firmware version shown when the device doesn't answer
const FALLBACK_FIRMWARE_VERSION: &str = "1.0";

/// Media state reported to the framework
///
/// Zones have no transport to control, so the accessory always reports
/// playing and set requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaState {
    Playing,
}

/// Static display information for one accessory
#[derive(Debug, Clone)]
pub struct AccessoryInfo {
    pub name: String,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub serial_number: String,
    pub firmware_version: String,
}

/// A speaker-like accessory bound to one remote zone
///
/// Forwards the four characteristic entry points (volume/mute, get and set)
/// straight to the zone's controller; no semantics are added at this layer.
/// Identity is the zone's composite id and stays stable across zone-list
/// refreshes, so the controller's cached state survives re-polling.
#[derive(Debug)]
pub struct ZoneAccessory<A> {
    info: AccessoryInfo,
    controller: ZoneVolumeController<A>,
}

impl<A: JukeZoneApi> ZoneAccessory<A> {
    /// Bind a freshly discovered zone
    pub fn new(api: A, zone: &Zone) -> Self {
        let firmware_version = match api.device_attributes(&zone.device_id) {
            Ok(attributes) => attributes.firmware_version,
            Err(e) => {
                warn!(zone = %zone.id, error = %e, "could not read device attributes");
                FALLBACK_FIRMWARE_VERSION.to_string()
            }
        };

        info!(zone = %zone.id, name = %zone.name, "registering zone");
        Self {
            info: AccessoryInfo {
                name: zone.name.clone(),
                manufacturer: MANUFACTURER,
                model: MODEL,
                serial_number: zone.id.as_str().to_string(),
                firmware_version,
            },
            controller: ZoneVolumeController::new(api, zone),
        }
    }

    /// Accessory display information
    pub fn info(&self) -> &AccessoryInfo {
        &self.info
    }

    /// The zone this accessory is bound to
    pub fn zone_id(&self) -> &ZoneId {
        self.controller.zone_id()
    }

    /// GET handler for the volume characteristic
    pub fn volume(&mut self) -> Result<u8> {
        self.controller.volume()
    }

    /// SET handler for the volume characteristic
    pub fn set_volume(&mut self, value: u8) -> Result<()> {
        self.controller.set_volume(value)
    }

    /// GET handler for the mute characteristic
    pub fn muted(&mut self) -> Result<bool> {
        self.controller.muted()
    }

    /// SET handler for the mute characteristic
    pub fn set_muted(&mut self, value: bool) -> Result<()> {
        self.controller.set_muted(value)
    }

    /// GET handler for the current and target media state characteristics
    pub fn media_state(&self) -> MediaState {
        MediaState::Playing
    }

    /// Fold a refreshed zone listing into the binding
    ///
    /// Returns the new display name when the zone was renamed.
    pub(crate) fn refresh(&mut self, zone: &Zone) -> Option<String> {
        self.controller.refresh_from_listing(zone);
        if zone.name != self.info.name {
            self.info.name = zone.name.clone();
            return Some(zone.name.clone());
        }
        None
    }
}
