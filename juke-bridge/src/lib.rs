//! Bridges Juke Audio zones to speaker-like accessories
//!
//! This crate holds the bridge between an accessory framework and a Juke
//! Audio controller: the per-zone [`ZoneVolumeController`] that reconciles
//! accessory volume/mute requests with the remote API, the [`ZoneAccessory`]
//! binding that maps the four characteristic entry points onto it, and the
//! [`DiscoveryCoordinator`] that keeps the accessory registry in sync with
//! the controller's zone list.
//!
//! The remote side is abstracted behind the [`JukeZoneApi`] trait;
//! `juke_api::JukeClient` is the production implementation.

pub mod accessory;
pub mod api;
pub mod controller;
pub mod coordinator;
pub mod error;
pub mod logging;

pub use accessory::{AccessoryInfo, MediaState, ZoneAccessory, MANUFACTURER, MODEL};
pub use api::JukeZoneApi;
pub use controller::{ZoneVolumeController, VOLUME_RECHECK_INTERVAL};
pub use coordinator::{AccessoryEvent, DiscoveryCoordinator};
pub use error::{BridgeError, Result};
