//! Zone identity type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a zone on a Juke device
///
/// The zone-list endpoint does not return an id, so the client synthesizes
/// one by joining the owning device id and the zone's index, e.g.
/// `8D4F75-607-Z3`. Accessory identity is keyed on this value, so the same
/// device and index must always produce the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(String);

impl ZoneId {
    /// Build the composite id for zone `index` on `device_id`
    pub fn new(device_id: &str, index: u32) -> Self {
        Self(format!("{}-Z{}", device_id, index))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id of the zone one position below this one, if there is one
    ///
    /// Some firmware's volume-write endpoint addresses zones shifted by one
    /// relative to the listing. Returns `None` for index 0 and for ids that
    /// don't follow the `{device}-Z{index}` shape.
    pub fn shifted_down(&self) -> Option<ZoneId> {
        let (device_id, index) = self.0.rsplit_once("-Z")?;
        let index: u32 = index.parse().ok()?;
        if index == 0 {
            return None;
        }
        Some(ZoneId::new(device_id, index - 1))
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ZoneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
