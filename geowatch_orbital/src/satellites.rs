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
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use geowatch_common::{datetime::utc_now, debug, info};
use geowatch_anim::Animated;
use geowatch_feed::{CacheResult, PositionCache, spawn_refresh_loop};

use crate::{
    celestrak::{CelestrakSource, OrbitalConfig},
    fallback::fallback_satellites,
    propagator::{Satellite, propagate_elements},
    tle::{OrbitalElement, TleEntry, parse_elements}
};

pub type ElementsReceiver = watch::Receiver<Arc<Vec<OrbitalElement>>>;
pub type SatellitesReceiver = watch::Receiver<Arc<Vec<Satellite>>>;

/// the propagation cadence: re-computes all satellite positions from the current element set
/// and publishes them. Registered with the animation scheduler at a low rate (default 20s)
pub struct SatellitePropagation {
    elements: ElementsReceiver,
    satellites: watch::Sender<Arc<Vec<Satellite>>>,
}

impl SatellitePropagation {
    pub fn new (elements: ElementsReceiver, satellites: watch::Sender<Arc<Vec<Satellite>>>)->Self {
        SatellitePropagation { elements, satellites }
    }

    pub fn propagate_now (&self) {
        let elements = self.elements.borrow().clone();
        publish_propagated( &self.satellites, &elements);
    }
}

impl Animated for SatellitePropagation {
    fn advance (&mut self, _elapsed: Duration, _now: Duration) {
        self.propagate_now();
    }
}

fn publish_propagated (tx: &watch::Sender<Arc<Vec<Satellite>>>, elements: &[OrbitalElement]) {
    let sats = propagate_elements( elements, &utc_now());
    debug!("propagated {} satellites from {} elements", sats.len(), elements.len());
    tx.send_replace( Arc::new(sats));
}

/// the action for TLE cache updates: swap in the new element set (if it has any valid elements) and
/// propagate immediately so that the display doesn't wait for the next propagation tick
pub fn tle_update_action (
    elements_tx: watch::Sender<Arc<Vec<OrbitalElement>>>,
    satellites_tx: watch::Sender<Arc<Vec<Satellite>>>
)->impl FnMut(CacheResult<TleEntry>) + Send + 'static {
    move |result| {
        let elements = parse_elements( &result.items);
        if !elements.is_empty() {
            info!("using {} orbital elements ({:?})", elements.len(), result.provenance);
            elements_tx.send_replace( Arc::new(elements));
        }
        let current = elements_tx.borrow().clone();
        publish_propagated( &satellites_tx, &current);
    }
}

/// everything the satellite layer needs at runtime
pub struct SatelliteFeed {
    pub refresh_task: JoinHandle<()>,
    pub elements: ElementsReceiver,
    pub satellites: SatellitesReceiver,
    satellites_tx: watch::Sender<Arc<Vec<Satellite>>>,
}

impl SatelliteFeed {
    /// the cadence to register with the animation scheduler
    pub fn propagation (&self)->SatellitePropagation {
        SatellitePropagation::new( self.elements.clone(), self.satellites_tx.clone())
    }
}

/// start the TLE refresh loop. Satellites start out with the static fallback positions
pub fn spawn_satellite_feed (config: &OrbitalConfig, cancel: CancellationToken)->SatelliteFeed {
    let (elements_tx, elements) = watch::channel( Arc::new( Vec::<OrbitalElement>::new()));
    let (satellites_tx, satellites) = watch::channel( Arc::new( fallback_satellites()));

    let cache = PositionCache::new( CelestrakSource::new(config), config.cache.clone(), Vec::new());
    let action = tle_update_action( elements_tx, satellites_tx.clone());
    let refresh_task = spawn_refresh_loop( cache, config.refresh_interval, cancel, action);

    SatelliteFeed { refresh_task, elements, satellites, satellites_tx }
}
