//! Zone models for the list and per-zone config endpoints

use serde::Deserialize;

use super::ZoneId;

/// Wire form of one `get_zones.php` entry
///
/// The listing carries no zone id; [`ZoneRecord::into_zone`] attaches the
/// synthesized composite id.
#[derive(Debug, Deserialize)]
pub(crate) struct ZoneRecord {
    pub index: u32,
    pub name: String,
    #[serde(default)]
    pub source: u32,
    pub percent_volume: u8,
    #[serde(default)]
    pub master_enabled: u8,
    #[serde(default)]
    pub sources: Vec<u32>,
    pub device_id: String,
}

impl ZoneRecord {
    pub(crate) fn into_zone(self) -> Zone {
        Zone {
            id: ZoneId::new(&self.device_id, self.index),
            index: self.index,
            name: self.name,
            source: self.source,
            percent_volume: self.percent_volume,
            master_enabled: self.master_enabled != 0,
            sources: self.sources,
            device_id: self.device_id,
        }
    }
}

/// One zone as reported by the zone-list endpoint, with its id attached
///
/// `percent_volume` is the volume at the moment the listing was taken and
/// may be stale by the time it is read.
#[derive(Debug, Clone)]
pub struct Zone {
    pub id: ZoneId,
    pub index: u32,
    pub name: String,
    pub source: u32,
    pub percent_volume: u8,
    pub master_enabled: bool,
    pub sources: Vec<u32>,
    pub device_id: String,
}

/// Authoritative configuration for one zone from `api/v2/zones/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    pub zone_id: String,
    pub name: String,
    pub volume: u8,
    #[serde(default)]
    pub input: Vec<String>,
}
