//! Device metadata models

use serde::Deserialize;

/// Identity and network attributes reported by a Juke device
///
/// Display metadata only; none of this feeds the volume reconciliation.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceAttributes {
    pub device_id: String,
    pub firmware_version: String,
    pub serial_number: String,
    #[serde(default)]
    pub eth_mac: String,
    #[serde(default)]
    pub wlan_mac: String,
    #[serde(default)]
    pub adapter1_mac: String,
    #[serde(default)]
    pub adapter2_mac: String,
}

/// Device ids known to the server
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceIds {
    pub device_ids: Vec<String>,
}
