//! High-level Juke Audio API for zone control
//!
//! This crate provides a typed client for the HTTP API exposed by a Juke
//! Audio multi-zone controller. It uses the private `rest-client` crate for
//! the authenticated transport.
//!
//! The zone-list endpoint does not return zone identifiers, so the client
//! synthesizes a composite [`ZoneId`] for every listed zone; the rest of the
//! system keys accessories on that id.
//!
//! ```rust,no_run
//! use juke_api::JukeClient;
//! use rest_client::Credentials;
//!
//! let client = JukeClient::new("juke.local", &Credentials::new(""));
//! for zone in client.zones()? {
//!     println!("{}: {}%", zone.name, zone.percent_volume);
//! }
//! # Ok::<(), juke_api::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod model;

pub use client::{JukeClient, ZoneIdCorrection};
pub use error::{ApiError, Result};
pub use model::{
    DeviceAttributes, DeviceIds, Input, InputConfig, InputIds, Zone, ZoneConfig, ZoneId,
};
