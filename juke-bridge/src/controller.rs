//! Per-zone volume and mute reconciliation
//!
//! The controller translates accessory-level requests into remote API calls.
//! Three quirks of the remote side drive the design:
//!
//! - Physical remotes only ever report the extreme volumes, so 100 and 0 are
//!   step requests relative to the current volume, not absolute targets.
//! - Config reads are slow, so a recent successful read is reused as the
//!   baseline for step math instead of re-fetching.
//! - The device gives no readback on writes; the local cache records intent
//!   and is updated before the write is issued, so a caller that comes back
//!   immediately sees the value it just set.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use juke_api::{Zone, ZoneId};

use crate::api::JukeZoneApi;
use crate::error::Result;

/// How long a successful volume read stays fresh enough to reuse
pub const VOLUME_RECHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Size of one relative volume step
const VOLUME_STEP: u8 = 10;

/// Requested volume meaning "one step up"
const STEP_UP_SENTINEL: u8 = 100;

/// Requested volume meaning "one step down"
const STEP_DOWN_SENTINEL: u8 = 0;

/// Unmute target when the remembered volume is 0 (can't unmute to silence)
const UNMUTE_FALLBACK_VOLUME: u8 = 10;

/// Reconciles one zone's accessory requests with the remote API
///
/// Owns the zone's cached state exclusively; the binding layer serializes
/// calls per accessory, so no locking is needed. `last_volume_level` only
/// ever holds a value observed on the device or one this controller just
/// sent to it.
#[derive(Debug)]
pub struct ZoneVolumeController<A> {
    api: A,
    zone_id: ZoneId,
    last_volume_level: u8,
    last_volume_check: Option<Instant>,
    recheck_interval: Duration,
}

impl<A: JukeZoneApi> ZoneVolumeController<A> {
    /// Create a controller for `zone`, seeding the remembered volume from
    /// the listing that discovered it
    pub fn new(api: A, zone: &Zone) -> Self {
        let mut controller = Self {
            api,
            zone_id: zone.id.clone(),
            last_volume_level: UNMUTE_FALLBACK_VOLUME,
            last_volume_check: None,
            recheck_interval: VOLUME_RECHECK_INTERVAL,
        };
        controller.refresh_from_listing(zone);
        controller
    }

    /// Override the freshness window (primarily for tests)
    pub fn with_recheck_interval(mut self, interval: Duration) -> Self {
        self.recheck_interval = interval;
        self
    }

    /// The zone this controller drives
    pub fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// Read the zone's current volume, live from the device
    ///
    /// A non-zero reading also refreshes the remembered unmute target.
    /// Errors surface unchanged; no default is substituted.
    pub fn volume(&mut self) -> Result<u8> {
        let config = self.api.zone_config(&self.zone_id)?;
        self.last_volume_check = Some(Instant::now());
        if config.volume > 0 {
            self.last_volume_level = config.volume;
        }
        debug!(zone = %self.zone_id, volume = config.volume, "read volume");
        Ok(config.volume)
    }

    /// Apply a volume request from the accessory
    ///
    /// 100 steps up and 0 steps down from the current volume; 1-99 are
    /// absolute targets. The computed target is clamped to 0-100, recorded
    /// locally, then written out. A failed write is reported but the local
    /// state is not rolled back.
    pub fn set_volume(&mut self, requested: u8) -> Result<()> {
        let baseline = self.step_baseline()?;
        let target = translate_request(requested, baseline);
        self.write_volume(target)
    }

    /// Whether the zone is muted, defined as a live-read volume of exactly 0
    ///
    /// Never answered from cache: a wrong mute answer is immediately
    /// user-visible, so only a fresh config read counts.
    pub fn muted(&mut self) -> Result<bool> {
        let config = self.api.zone_config(&self.zone_id)?;
        debug!(zone = %self.zone_id, volume = config.volume, "read mute state");
        Ok(config.volume == 0)
    }

    /// Mute or unmute the zone
    ///
    /// Muting remembers the current volume so unmuting can restore it. Both
    /// branches write directly, bypassing the cache bookkeeping of
    /// [`set_volume`](Self::set_volume) so the remembered restore target
    /// survives the mute.
    pub fn set_muted(&mut self, mute: bool) -> Result<()> {
        let target = if mute {
            let config = self.api.zone_config(&self.zone_id)?;
            self.last_volume_level = config.volume;
            0
        } else if self.last_volume_level == 0 {
            UNMUTE_FALLBACK_VOLUME
        } else {
            self.last_volume_level
        };

        info!(zone = %self.zone_id, mute, target, "set muted");
        self.api.set_zone_volume(&self.zone_id, target)?;
        Ok(())
    }

    /// Fold a fresh zone-list entry into the cached state
    ///
    /// A listing can race an in-flight mute and report a transient zero, so
    /// only positive volumes are trusted; mute status always comes from an
    /// explicit config read.
    pub fn refresh_from_listing(&mut self, zone: &Zone) {
        if zone.percent_volume > 0 {
            self.last_volume_level = zone.percent_volume;
        }
    }

    /// Baseline volume for step math, reusing the cached level while the
    /// last successful check is recent enough
    fn step_baseline(&self) -> Result<u8> {
        if let Some(checked) = self.last_volume_check {
            if checked.elapsed() < self.recheck_interval {
                return Ok(self.last_volume_level);
            }
        }
        let config = self.api.zone_config(&self.zone_id)?;
        Ok(config.volume)
    }

    /// Record the target locally, then issue the remote write
    ///
    /// Local state updates first so a caller that reads back before the
    /// write completes sees the intended value.
    fn write_volume(&mut self, target: u8) -> Result<()> {
        self.last_volume_level = target;
        self.last_volume_check = Some(Instant::now());
        info!(zone = %self.zone_id, volume = target, "set volume");
        self.api.set_zone_volume(&self.zone_id, target)?;
        Ok(())
    }

    #[cfg(test)]
    fn backdate_last_check(&mut self, age: Duration) {
        self.last_volume_check = Some(Instant::now() - age);
    }
}

/// Translate an accessory volume request into an absolute target
fn translate_request(requested: u8, baseline: u8) -> u8 {
    match requested {
        STEP_UP_SENTINEL => baseline.saturating_add(VOLUME_STEP).min(100),
        STEP_DOWN_SENTINEL => baseline.saturating_sub(VOLUME_STEP),
        absolute => absolute,
    }
}
