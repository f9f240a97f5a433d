/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::{sync::Arc, time::Duration};
use chrono::{DateTime, Utc};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use geowatch_common::{
    angle::normalize_180, datetime::{duration_since, utc_now}, geo_constants::METERS_PER_DEGREE, debug, info
};
use geowatch_anim::Animated;
use geowatch_feed::{CacheConfig, CacheResult, FeedSource, PositionCache, Provenance, spawn_refresh_loop};

use crate::aircraft::Aircraft;

/// flat earth extrapolation of all moving aircraft along their current heading. This is only
/// meant for the seconds to minutes between two feed updates, it is not a great circle computation.
/// A zero `elapsed` returns the base unchanged, as do aircraft that don't move
pub fn dead_reckon (base: &[Aircraft], elapsed: Duration)->Vec<Aircraft> {
    if elapsed.is_zero() {
        return base.to_vec()
    }
    let dt = elapsed.as_secs_f64();

    base.iter().map( |ac| {
        if !ac.is_moving() {
            return ac.clone()
        }
        let (sin_hdg, cos_hdg) = ac.heading.to_radians().sin_cos();
        let dist = ac.velocity_ms * dt;
        let cos_lat = ac.lat.to_radians().cos().max(1e-9); // don't blow up over the poles

        let d_lat = dist * cos_hdg / METERS_PER_DEGREE;
        let d_lon = dist * sin_hdg / (METERS_PER_DEGREE * cos_lat);

        Aircraft { lat: ac.lat + d_lat, lon: normalize_180( ac.lon + d_lon), ..ac.clone() }
    }).collect()
}

/// the last delivered aircraft set and the time its positions refer to
#[derive(Debug,Clone)]
pub struct AircraftBase {
    pub captured_at: DateTime<Utc>,
    pub aircraft: Arc<Vec<Aircraft>>,
}

impl AircraftBase {
    pub fn new (captured_at: DateTime<Utc>, aircraft: Vec<Aircraft>)->Self {
        AircraftBase { captured_at, aircraft: Arc::new(aircraft) }
    }

    /// fresh and cached snapshots keep their fetch time. Stale and fallback data is re-based at
    /// `now` so that we don't extrapolate over hours
    pub fn from_result (result: CacheResult<Aircraft>, now: DateTime<Utc>)->Self {
        let captured_at = match (result.provenance, result.fetched_at) {
            (Provenance::Fresh | Provenance::Cached, Some(t)) => t,
            _ => now
        };
        AircraftBase { captured_at, aircraft: result.items }
    }

    pub fn extrapolate_to (&self, now: DateTime<Utc>)->Vec<Aircraft> {
        dead_reckon( &self.aircraft, duration_since( &now, &self.captured_at))
    }
}

/// the fast dead reckoning cadence. It reads the base through a watch channel that is updated out
/// of band by the refresh loop, so a completed fetch never resets this schedule
pub struct DeadReckoning {
    base: watch::Receiver<AircraftBase>,
    aircraft: watch::Sender<Arc<Vec<Aircraft>>>,
}

impl DeadReckoning {
    pub fn new (base: watch::Receiver<AircraftBase>, aircraft: watch::Sender<Arc<Vec<Aircraft>>>)->Self {
        DeadReckoning { base, aircraft }
    }

    pub fn update_at (&self, now: DateTime<Utc>) {
        let base = self.base.borrow().clone();
        self.aircraft.send_replace( Arc::new( base.extrapolate_to(now)));
    }
}

impl Animated for DeadReckoning {
    fn advance (&mut self, _elapsed: Duration, _now: Duration) {
        self.update_at( utc_now());
    }
}

/// the action for aircraft cache updates: swap in the new base
pub fn aircraft_update_action (base_tx: watch::Sender<AircraftBase>)->impl FnMut(CacheResult<Aircraft>) + Send + 'static {
    move |result| {
        let base = AircraftBase::from_result( result, utc_now());
        debug!("new aircraft base with {} entries captured at {}", base.aircraft.len(), base.captured_at);
        base_tx.send_replace( base);
    }
}

/// the runtime parts of one aircraft layer
pub struct AircraftFeed {
    pub refresh_task: JoinHandle<()>,
    pub base: watch::Receiver<AircraftBase>,
    pub aircraft: watch::Receiver<Arc<Vec<Aircraft>>>,
    aircraft_tx: watch::Sender<Arc<Vec<Aircraft>>>,
}

impl AircraftFeed {
    /// the cadence to register with the animation scheduler
    pub fn dead_reckoning (&self)->DeadReckoning {
        DeadReckoning::new( self.base.clone(), self.aircraft_tx.clone())
    }
}

/// start the refresh loop for an aircraft source. Until the first update arrives the layer shows
/// the fallback aircraft
pub fn spawn_aircraft_feed<S> (
    source: S, cache_config: CacheConfig, fallback: Vec<Aircraft>, poll_interval: Duration, cancel: CancellationToken
)->AircraftFeed where S: FeedSource<Item=Aircraft> + 'static
{
    let initial = AircraftBase::new( utc_now(), fallback.clone());
    let (aircraft_tx, aircraft) = watch::channel( initial.aircraft.clone());
    let (base_tx, base) = watch::channel( initial);

    info!("starting {} aircraft feed, polling every {:?}", source.name(), poll_interval);
    let cache = PositionCache::new( source, cache_config, fallback);
    let refresh_task = spawn_refresh_loop( cache, poll_interval, cancel, aircraft_update_action( base_tx));

    AircraftFeed { refresh_task, base, aircraft, aircraft_tx }
}
