//! Typed client for the Juke controller HTTP API

use rest_client::{Credentials, RestClient};
use tracing::debug;

use crate::error::{with_id_context, ApiError, Result};
use crate::model::{
    DeviceAttributes, DeviceIds, Input, InputConfig, InputIds, Zone, ZoneConfig, ZoneId,
    ZoneRecord,
};

/// How volume writes address a zone
///
/// The v2.0 firmware's volume-set endpoint has an off-by-one bug: it applies
/// the write to the zone one position below the one named in the URL. Newer
/// firmware addresses zones correctly, so the workaround is opt-in per
/// deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneIdCorrection {
    /// Send the listed zone id unchanged (current firmware)
    #[default]
    Disabled,
    /// Shift the zone index down by one so the write lands on the intended
    /// zone (v2.0 firmware)
    OffByOne,
}

/// A client for the HTTP API of a single Juke controller
///
/// Pure request/response facade: it holds no zone state, only the transport
/// and the configured id-correction mode.
#[derive(Debug, Clone)]
pub struct JukeClient {
    rest: RestClient,
    correction: ZoneIdCorrection,
}

impl JukeClient {
    /// Create a client for the controller at `host` (e.g. `juke.local`)
    pub fn new(host: &str, credentials: &Credentials) -> Self {
        Self::with_correction(host, credentials, ZoneIdCorrection::default())
    }

    /// Create a client with an explicit zone-id correction mode
    pub fn with_correction(
        host: &str,
        credentials: &Credentials,
        correction: ZoneIdCorrection,
    ) -> Self {
        Self {
            rest: RestClient::new(host, credentials),
            correction,
        }
    }

    /// The correction mode applied to volume writes
    pub fn correction(&self) -> ZoneIdCorrection {
        self.correction
    }

    /// Fetch all zones known to the controller
    ///
    /// The listing omits zone ids; each entry gets its composite id attached
    /// here before it is returned.
    pub fn zones(&self) -> Result<Vec<Zone>> {
        debug!("[GET] => get_zones.php");
        let records: Vec<ZoneRecord> = self.rest.get_json("get_zones.php")?;
        let zones: Vec<Zone> = records.into_iter().map(ZoneRecord::into_zone).collect();
        debug!("retrieved {} zones from controller", zones.len());
        Ok(zones)
    }

    /// Fetch the authoritative configuration for one zone
    pub fn zone_config(&self, id: &ZoneId) -> Result<ZoneConfig> {
        let path = format!("api/v2/zones/{}", id);
        debug!("[GET] => {}", path);
        self.rest
            .get_json(&path)
            .map_err(|e| with_id_context(e, id.as_str()))
    }

    /// Set the volume (0-100) for one zone
    ///
    /// The configured id correction is applied before the write. The HTTP
    /// success envelope is the only success signal; there is no readback of
    /// the new value.
    pub fn set_zone_volume(&self, id: &ZoneId, volume: u8) -> Result<()> {
        if volume > 100 {
            return Err(ApiError::InvalidVolume(volume));
        }

        let target = self.volume_write_target(id);
        let path = format!("api/v2/zones/{}/volume", target);
        debug!("[PUT] => {} volume={}", path, volume);
        self.rest
            .put_form(&path, "volume", &volume.to_string())
            .map_err(|e| with_id_context(e, target.as_str()))
    }

    /// Fetch identity attributes for a device
    pub fn device_attributes(&self, device_id: &str) -> Result<DeviceAttributes> {
        let path = format!("api/v2/devices/{}/attributes", device_id);
        debug!("[GET] => {}", path);
        self.rest
            .get_json(&path)
            .map_err(|e| with_id_context(e, device_id))
    }

    /// The device id of the server itself, when it reports one
    pub fn server_device_id(&self) -> Result<Option<String>> {
        debug!("[GET] => api/v2/devices/server");
        let ids: DeviceIds = self.rest.get_json("api/v2/devices/server")?;
        Ok(ids.device_ids.into_iter().next())
    }

    /// Fetch all inputs and their properties
    pub fn inputs(&self) -> Result<Vec<Input>> {
        debug!("[GET] => get_inputs.php");
        Ok(self.rest.get_json("get_inputs.php")?)
    }

    /// Fetch the ids of all available inputs
    pub fn input_ids(&self) -> Result<InputIds> {
        debug!("[GET] => api/v2/inputs/");
        Ok(self.rest.get_json("api/v2/inputs/")?)
    }

    /// Fetch the configuration for one input
    pub fn input_config(&self, input_id: &str) -> Result<InputConfig> {
        let path = format!("api/v2/inputs/{}", input_id);
        debug!("[GET] => {}", path);
        self.rest
            .get_json(&path)
            .map_err(|e| with_id_context(e, input_id))
    }

    /// The zone id a volume write is actually sent to
    ///
    /// Falls back to the listed id when shifting is impossible (index 0 or a
    /// malformed id).
    fn volume_write_target(&self, id: &ZoneId) -> ZoneId {
        match self.correction {
            ZoneIdCorrection::Disabled => id.clone(),
            ZoneIdCorrection::OffByOne => id.shifted_down().unwrap_or_else(|| id.clone()),
        }
    }
}
