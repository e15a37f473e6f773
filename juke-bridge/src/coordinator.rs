//! Zone discovery and accessory reconciliation

use std::collections::HashMap;

use tracing::{error, info};

use juke_api::ZoneId;

use crate::accessory::ZoneAccessory;
use crate::api::JukeZoneApi;
use crate::error::Result;

/// What a discovery pass did for one zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessoryEvent {
    /// A zone with an unseen id was registered as a new accessory
    Registered(ZoneId),
    /// An already-registered zone was refreshed in place
    Restored(ZoneId),
    /// A refreshed zone carried a new display name
    Renamed(ZoneId, String),
}

/// Polls the controller's zone list and keeps the accessory registry in sync
///
/// Accessory identity is the zone's composite id: the same device and index
/// always resolve to the same accessory, and therefore the same controller
/// instance, so cached volume state survives re-polling the zone list.
pub struct DiscoveryCoordinator<A> {
    api: A,
    accessories: HashMap<ZoneId, ZoneAccessory<A>>,
}

impl<A: JukeZoneApi + Clone> DiscoveryCoordinator<A> {
    /// Create a coordinator over the given client
    pub fn new(api: A) -> Self {
        Self {
            api,
            accessories: HashMap::new(),
        }
    }

    /// Run one discovery pass: fetch the zone list and reconcile
    ///
    /// A fetch failure leaves every registered accessory untouched.
    pub fn discover(&mut self) -> Result<Vec<AccessoryEvent>> {
        info!("discovering zones...");
        let zones = match self.api.zones() {
            Ok(zones) => zones,
            Err(e) => {
                error!(error = %e, "failed to get zones from controller");
                return Err(e.into());
            }
        };

        let mut events = Vec::with_capacity(zones.len());
        for zone in &zones {
            match self.accessories.get_mut(&zone.id) {
                Some(accessory) => {
                    events.push(AccessoryEvent::Restored(zone.id.clone()));
                    if let Some(name) = accessory.refresh(zone) {
                        info!(zone = %zone.id, name = %name, "zone renamed");
                        events.push(AccessoryEvent::Renamed(zone.id.clone(), name));
                    }
                }
                None => {
                    let accessory = ZoneAccessory::new(self.api.clone(), zone);
                    self.accessories.insert(zone.id.clone(), accessory);
                    info!(zone = %zone.id, name = %zone.name, "zone registered");
                    events.push(AccessoryEvent::Registered(zone.id.clone()));
                }
            }
        }

        info!("discovery pass complete: {} accessories", self.accessories.len());
        Ok(events)
    }

    /// Number of registered accessories
    pub fn len(&self) -> usize {
        self.accessories.len()
    }

    /// Whether any accessories are registered
    pub fn is_empty(&self) -> bool {
        self.accessories.is_empty()
    }

    /// The accessory bound to `id`, if registered
    pub fn accessory_mut(&mut self, id: &ZoneId) -> Option<&mut ZoneAccessory<A>> {
        self.accessories.get_mut(id)
    }

    /// Iterate over registered accessories
    pub fn accessories(&self) -> impl Iterator<Item = &ZoneAccessory<A>> {
        self.accessories.values()
    }
}
