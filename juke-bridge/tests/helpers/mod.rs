//! Shared test fixtures: a scripted fake of the remote controller
//!
//! The fake applies volume writes to its own remote state, so mute/unmute
//! sequences observe the same feedback loop a real controller produces.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use juke_api::{ApiError, DeviceAttributes, Zone, ZoneConfig, ZoneId};
use juke_bridge::JukeZoneApi;

/// Build a zone the way the client would after id synthesis
pub fn zone(device_id: &str, index: u32, name: &str, percent_volume: u8) -> Zone {
    Zone {
        id: ZoneId::new(device_id, index),
        index,
        name: name.to_string(),
        source: 1,
        percent_volume,
        master_enabled: true,
        sources: vec![1],
        device_id: device_id.to_string(),
    }
}

#[derive(Debug, Default)]
struct Remote {
    zones: Vec<Zone>,
    volumes: HashMap<ZoneId, u8>,
    firmware_version: Option<String>,
    config_reads: Vec<ZoneId>,
    volume_writes: Vec<(ZoneId, u8)>,
    fail_zone_list: bool,
}

/// Scripted stand-in for `JukeClient`
///
/// Clones share the same remote state, so a test can keep a handle for
/// assertions after moving a clone into the code under test.
#[derive(Debug, Clone, Default)]
pub struct FakeJuke {
    remote: Rc<RefCell<Remote>>,
}

impl FakeJuke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zone to the listing and seed its remote volume from
    /// `percent_volume`
    pub fn add_zone(&self, device_id: &str, index: u32, name: &str, percent_volume: u8) -> Zone {
        let zone = zone(device_id, index, name, percent_volume);
        let mut remote = self.remote.borrow_mut();
        remote.volumes.insert(zone.id.clone(), percent_volume);
        remote.zones.push(zone.clone());
        zone
    }

    /// Change the volume a config read will report, without touching the
    /// listing
    pub fn set_remote_volume(&self, id: &ZoneId, volume: u8) {
        self.remote.borrow_mut().volumes.insert(id.clone(), volume);
    }

    /// Change the `percent_volume` the next listing will report
    pub fn set_listing_volume(&self, id: &ZoneId, percent_volume: u8) {
        let mut remote = self.remote.borrow_mut();
        if let Some(zone) = remote.zones.iter_mut().find(|z| &z.id == id) {
            zone.percent_volume = percent_volume;
        }
    }

    /// Change a zone's display name in the listing
    pub fn rename_zone(&self, id: &ZoneId, name: &str) {
        let mut remote = self.remote.borrow_mut();
        if let Some(zone) = remote.zones.iter_mut().find(|z| &z.id == id) {
            zone.name = name.to_string();
        }
    }

    /// Make device-attribute reads succeed with this firmware version
    pub fn set_firmware_version(&self, version: &str) {
        self.remote.borrow_mut().firmware_version = Some(version.to_string());
    }

    /// Make the next zone-list fetches fail
    pub fn fail_zone_list(&self, fail: bool) {
        self.remote.borrow_mut().fail_zone_list = fail;
    }

    /// Total config reads across all zones
    pub fn config_reads(&self) -> usize {
        self.remote.borrow().config_reads.len()
    }

    /// All volume writes, in order
    pub fn volume_writes(&self) -> Vec<(ZoneId, u8)> {
        self.remote.borrow().volume_writes.clone()
    }

    /// The most recent volume write
    pub fn last_write(&self) -> Option<(ZoneId, u8)> {
        self.remote.borrow().volume_writes.last().cloned()
    }
}

impl JukeZoneApi for FakeJuke {
    fn zones(&self) -> Result<Vec<Zone>, ApiError> {
        let remote = self.remote.borrow();
        if remote.fail_zone_list {
            return Err(ApiError::Network("zone list unavailable".to_string()));
        }
        Ok(remote.zones.clone())
    }

    fn zone_config(&self, id: &ZoneId) -> Result<ZoneConfig, ApiError> {
        let mut remote = self.remote.borrow_mut();
        remote.config_reads.push(id.clone());
        let volume = *remote
            .volumes
            .get(id)
            .ok_or_else(|| ApiError::NotFound(id.as_str().to_string()))?;
        let name = remote
            .zones
            .iter()
            .find(|z| &z.id == id)
            .map(|z| z.name.clone())
            .unwrap_or_default();
        Ok(ZoneConfig {
            zone_id: id.as_str().to_string(),
            name,
            volume,
            input: Vec::new(),
        })
    }

    fn set_zone_volume(&self, id: &ZoneId, volume: u8) -> Result<(), ApiError> {
        let mut remote = self.remote.borrow_mut();
        remote.volume_writes.push((id.clone(), volume));
        remote.volumes.insert(id.clone(), volume);
        Ok(())
    }

    fn device_attributes(&self, device_id: &str) -> Result<DeviceAttributes, ApiError> {
        let remote = self.remote.borrow();
        match &remote.firmware_version {
            Some(version) => Ok(DeviceAttributes {
                device_id: device_id.to_string(),
                firmware_version: version.clone(),
                serial_number: "JK-TEST".to_string(),
                eth_mac: String::new(),
                wlan_mac: String::new(),
                adapter1_mac: String::new(),
                adapter2_mac: String::new(),
            }),
            None => Err(ApiError::NotFound(device_id.to_string())),
        }
    }
}
