//! Wire data model for the Juke controller API

mod device;
mod input;
mod zone;
mod zone_id;

pub use device::{DeviceAttributes, DeviceIds};
pub use input::{Input, InputConfig, InputIds};
pub use zone::{Zone, ZoneConfig};
pub use zone_id::ZoneId;

pub(crate) use zone::ZoneRecord;
